use leptos::prelude::*;

use super::navbar::{nav_label, NAV_SECTIONS};
use super::preferences::use_preferences;
use super::SocialIcons;
use crate::content::{Section, PERSONAL_INFO};

/// Baked in at build time so server and client agree on the year.
const COPYRIGHT_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().footer;

    view! {
        <footer class="relative border-t border-muted/20 pt-16 pb-8 px-4">
            <div class="mx-auto max-w-7xl grid md:grid-cols-3 gap-10 mb-12">
                <div>
                    <a href=Section::Home.href() class="text-3xl font-bold text-gradient">
                        {PERSONAL_INFO.initials}
                    </a>
                    <p class="mt-4 text-muted">{move || t().description}</p>
                    <div class="mt-6">
                        <SocialIcons />
                    </div>
                </div>
                <div>
                    <h4 class="text-lg font-bold mb-4">{move || t().quick_links}</h4>
                    <ul class="space-y-2">
                        {NAV_SECTIONS
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a href=section.href() class="text-muted hover:text-purple-500">
                                            {move || nav_label(prefs.t(), section)}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="text-lg font-bold mb-4">{move || t().contact_title}</h4>
                    <ul class="space-y-2 text-muted">
                        <li>
                            "📧 "
                            <a href=format!("mailto:{}", PERSONAL_INFO.email) class="hover:text-purple-500">
                                {PERSONAL_INFO.email}
                            </a>
                        </li>
                        <li>"📱 " {PERSONAL_INFO.phone}</li>
                        <li>"📍 " {PERSONAL_INFO.location}</li>
                    </ul>
                </div>
            </div>
            <div class="mx-auto max-w-7xl flex flex-col md:flex-row items-center justify-between gap-4 pt-8 border-t border-muted/20 text-sm text-muted">
                <p>
                    {format!("© {COPYRIGHT_YEAR} {}. ", PERSONAL_INFO.name)}
                    {move || t().rights}
                </p>
                <p>
                    {move || t().made_with}
                    " ❤️ "
                    {move || t().and}
                </p>
                <button
                    class="hover:text-purple-500"
                    on:click=move |_| prefs.platform().scroll_to_top()
                >
                    {move || t().back_to_top}
                    " ↑"
                </button>
            </div>
        </footer>
    }
}
