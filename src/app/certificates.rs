use leptos::prelude::*;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use crate::content::{Section, CERTIFICATIONS};

#[component]
pub fn Certificates() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().certificates;

    view! {
        <section id=Section::Certificates.id() class="py-20 px-4">
            <div class="mx-auto max-w-5xl">
                <SectionHeading section=Section::Certificates />
                <div class="grid md:grid-cols-2 gap-8">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <article class="card p-0 overflow-hidden">
                                    <img src=cert.image alt=cert.title class="w-full h-52 object-cover" />
                                    <div class="p-6">
                                        <div class="flex items-center justify-between text-sm mb-2">
                                            <span class="font-semibold text-purple-500">
                                                {move || t().obtained_on}
                                                " "
                                                {cert.platform}
                                            </span>
                                            <span class="text-muted">{cert.date}</span>
                                        </div>
                                        <h3 class="text-xl font-bold mb-2">"🏆 " {cert.title}</h3>
                                        <p class="text-muted mb-4">{cert.description}</p>
                                        <a
                                            href=cert.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="font-medium hover:text-purple-500"
                                        >
                                            {move || t().view_certificate}
                                            " ↗"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
