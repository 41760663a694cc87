use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::preferences::use_preferences;
use crate::content::{Section, PERSONAL_INFO};
use crate::i18n::{Language, Translations};

pub(super) const NAV_SECTIONS: [Section; 7] = [
    Section::Home,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Services,
    Section::GitHub,
    Section::Contact,
];

pub(super) fn nav_label(t: &'static Translations, section: Section) -> &'static str {
    let nav = &t.nav;
    match section {
        Section::Home => nav.home,
        Section::About => nav.about,
        Section::Skills => nav.skills,
        Section::Projects => nav.projects,
        Section::Services => nav.services,
        Section::Certificates => t.certificates.title,
        Section::GitHub => nav.github,
        Section::Contact => nav.contact,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let prefs = use_preferences();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > 50.0;

    let links = move |mobile: bool| {
        NAV_SECTIONS
            .into_iter()
            .map(|section| {
                let class = if mobile {
                    "block px-4 py-3 rounded-md hover:bg-purple-500/10 hover:text-purple-500 transition-colors"
                } else {
                    "px-3 py-2 text-sm font-medium hover:text-purple-500 transition-colors"
                };
                view! {
                    <a href=section.href() class=class on:click=move |_| set_menu_open(false)>
                        {move || nav_label(prefs.t(), section)}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 {}",
                if scrolled() || menu_open() {
                    "bg-background/90 backdrop-blur shadow-md"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <a href=Section::Home.href() class="text-2xl font-bold text-gradient">
                        {PERSONAL_INFO.initials}
                    </a>
                    <div class="hidden md:flex items-center gap-2">{links(false)}</div>
                    <div class="flex items-center gap-2">
                        <LanguageSelect />
                        <ThemeToggle />
                        <button
                            class="md:hidden p-2 rounded-md hover:bg-purple-500/10"
                            aria-label="Menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=menu_open>
                    <div class="md:hidden pb-4">{links(true)}</div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn LanguageSelect() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <div
            class="flex items-center rounded-full border border-muted/30 overflow-hidden"
            title=move || prefs.t().nav.language
        >
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            class=move || {
                                if prefs.language() == lang {
                                    "px-2 py-1 text-xs font-bold bg-purple-500 text-white"
                                } else {
                                    "px-2 py-1 text-xs hover:bg-purple-500/10"
                                }
                            }
                            aria-label=lang.label()
                            on:click=move |_| prefs.set_language(lang)
                        >
                            {lang.flag()}
                            " "
                            {lang.code().to_uppercase()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <button
            class="p-2 rounded-full hover:bg-purple-500/10 transition-colors"
            aria-label=move || prefs.t().nav.toggle_theme
            title=move || prefs.t().nav.toggle_theme
            on:click=move |_| prefs.toggle_theme()
        >
            {move || if prefs.theme().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
