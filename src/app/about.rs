use leptos::prelude::*;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use crate::content::{about_stats, Section, INTERESTS, SPOKEN_LANGUAGES};

#[component]
pub fn About() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().about;
    let stats = about_stats();

    view! {
        <section id=Section::About.id() class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                <SectionHeading section=Section::About />
                <div class="card mb-12 section-content">
                    <h3 class="text-2xl font-bold mb-4">{move || t().bio_title}</h3>
                    <p class="leading-relaxed text-muted">{move || t().bio}</p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12">
                    <Stat value=stats.years_of_study.to_string() label=move || t().stats.years />
                    <Stat value=stats.internships.to_string() label=move || t().stats.internships />
                    <Stat value=format!("{}+", stats.projects) label=move || t().stats.projects />
                    <Stat
                        value=format!("{}+", stats.technologies)
                        label=move || t().stats.technologies
                    />
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <Timeline />
                    <div class="space-y-8">
                        <div class="card">
                            <h3 class="text-xl font-bold mb-4">{move || t().languages}</h3>
                            {SPOKEN_LANGUAGES
                                .iter()
                                .map(|lang| {
                                    view! {
                                        <div class="mb-4">
                                            <div class="flex justify-between text-sm mb-1">
                                                <span class="font-medium">{lang.name}</span>
                                                <span class="text-muted">{lang.level}</span>
                                            </div>
                                            <div class="h-2 rounded-full bg-muted/20">
                                                <div
                                                    class="h-2 rounded-full bg-gradient-to-r from-purple-500 to-pink-500"
                                                    style=format!("width: {}%", lang.percentage)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="card">
                            <h3 class="text-xl font-bold mb-4">{move || t().interests}</h3>
                            <div class="flex flex-wrap gap-3">
                                {INTERESTS
                                    .iter()
                                    .map(|interest| {
                                        view! {
                                            <span class="px-4 py-2 rounded-full bg-purple-500/10">
                                                {interest.icon}
                                                " "
                                                {interest.name}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(
    value: String,
    label: impl Fn() -> &'static str + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="card text-center">
            <div class="text-3xl font-extrabold text-gradient">{value}</div>
            <div class="text-sm text-muted mt-1">{label}</div>
        </div>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().about;

    view! {
        <div class="space-y-10">
            <div>
                <h3 class="text-xl font-bold mb-6">"💼 " {move || t().experiences}</h3>
                {move || {
                    t()
                        .experiences_list
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="relative pl-8 pb-8 border-l-2 border-purple-500/30 last:pb-0">
                                    <span class="absolute -left-2 top-1 w-4 h-4 rounded-full bg-purple-500"></span>
                                    <span class="text-sm font-semibold text-purple-500">{exp.year}</span>
                                    <h4 class="text-lg font-bold">{exp.title}</h4>
                                    <p class="font-medium">{exp.company}</p>
                                    <p class="text-sm text-muted">{exp.subtitle} " · " {exp.location}</p>
                                    <p class="mt-2 text-muted">{exp.description}</p>
                                    <div class="flex flex-wrap gap-2 mt-3">
                                        {exp
                                            .technologies
                                            .iter()
                                            .map(|tech| view! { <span class="tag">{*tech}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div>
                <h3 class="text-xl font-bold mb-6">"🎓 " {move || t().formation}</h3>
                {move || {
                    t()
                        .education_list
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class="relative pl-8 pb-8 border-l-2 border-pink-500/30 last:pb-0">
                                    <span class="absolute -left-2 top-1 w-4 h-4 rounded-full bg-pink-500"></span>
                                    <span class="text-sm font-semibold text-pink-500">{edu.year}</span>
                                    <h4 class="text-lg font-bold">{edu.title}</h4>
                                    <p class="font-medium">{edu.institution}</p>
                                    <p class="text-sm text-muted">{edu.location}</p>
                                    <p class="mt-2 text-muted">{edu.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
