use leptos::prelude::*;

use super::preferences::use_preferences;
use crate::content::Section;
use crate::i18n::Translations;

/// Title, highlighted title part and subtitle for a section.
fn heading_text(t: &'static Translations, section: Section) -> [&'static str; 3] {
    match section {
        Section::Home => [t.hero.title1, t.hero.title2, t.hero.subtitle],
        Section::About => [t.about.title, t.about.title_highlight, t.about.subtitle],
        Section::Skills => [t.skills.title, t.skills.title_highlight, t.skills.subtitle],
        Section::Projects => [
            t.projects.title,
            t.projects.title_highlight,
            t.projects.subtitle,
        ],
        Section::Services => [
            t.services.title,
            t.services.title_highlight,
            t.services.subtitle,
        ],
        Section::Certificates => [t.certificates.title, "", t.certificates.subtitle],
        Section::GitHub => [t.github.title_prefix, t.github.title_highlight, t.github.subtitle],
        Section::Contact => [t.contact.title, t.contact.title_highlight, t.contact.subtitle],
    }
}

#[component]
pub fn SectionHeading(section: Section) -> impl IntoView {
    let prefs = use_preferences();
    let text = move |i: usize| heading_text(prefs.t(), section)[i];

    view! {
        <div class="text-center mb-12 section-content">
            <h2 class="text-3xl md:text-5xl font-bold mb-4">
                {move || text(0)}
                " "
                <span class="text-gradient">{move || text(1)}</span>
            </h2>
            <div class="w-24 h-1 mx-auto mb-6 rounded-full bg-gradient-to-r from-purple-500 to-pink-500"></div>
            <p class="max-w-2xl mx-auto text-lg text-muted">{move || text(2)}</p>
        </div>
    }
}
