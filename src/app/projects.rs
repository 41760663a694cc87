use leptos::prelude::*;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use crate::content::{filter_projects, Project, ProjectCategory, Section, ALL_PROJECTS, PROJECTS};
use crate::i18n::ProjectsText;

fn filter_label(t: &'static ProjectsText, filter: &str) -> &'static str {
    match filter {
        "frontend" => t.frontend,
        "fullstack" => t.fullstack,
        "mobile" => t.mobile,
        "backend" => t.backend,
        _ => t.all,
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let prefs = use_preferences();
    let (filter, set_filter) = signal(ALL_PROJECTS);
    let filters = std::iter::once(ALL_PROJECTS).chain(ProjectCategory::ALL.map(|c| c.slug()));

    view! {
        <section id=Section::Projects.id() class="py-20 px-4">
            <div class="mx-auto max-w-7xl">
                <SectionHeading section=Section::Projects />
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {filters
                        .map(|slug| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == slug {
                                            "px-5 py-2 rounded-full font-medium bg-gradient-to-r from-purple-500 to-pink-500 text-white"
                                        } else {
                                            "px-5 py-2 rounded-full font-medium bg-muted/10 hover:bg-purple-500/10"
                                        }
                                    }
                                    on:click=move |_| set_filter(slug)
                                >
                                    {move || filter_label(&prefs.t().projects, slug)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let visible = filter_projects(PROJECTS, filter.get());
                    if visible.is_empty() {
                        view! {
                            <p class="text-center text-muted py-12">
                                {move || prefs.t().projects.no_projects}
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {visible
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().projects;

    view! {
        <article class="card p-0 overflow-hidden group section-content">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                {project
                    .in_progress
                    .then(|| {
                        view! {
                            <span class="absolute top-3 right-3 px-3 py-1 rounded-full text-xs font-bold bg-yellow-400 text-black">
                                {move || t().in_progress}
                            </span>
                        }
                    })}
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-muted mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tag">{*tech}</span> })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 font-medium hover:text-purple-500"
                    >
                        <i class="devicon-github-original" />
                        {move || t().view_code}
                    </a>
                    {project
                        .demo
                        .map(|demo| {
                            view! {
                                <a
                                    href=demo
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 font-medium hover:text-purple-500"
                                >
                                    "↗ "
                                    {move || t().view_demo}
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
