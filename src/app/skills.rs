use leptos::prelude::*;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use crate::content::{Section, SkillKind, SKILLS};
use crate::i18n::SkillCategoriesText;

fn category_title(t: &'static SkillCategoriesText, kind: SkillKind) -> &'static str {
    match kind {
        SkillKind::Frontend => t.frontend,
        SkillKind::Backend => t.backend,
        SkillKind::Tools => t.tools,
        SkillKind::Management => t.management,
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let prefs = use_preferences();

    view! {
        <section id=Section::Skills.id() class="py-20 px-4 bg-muted/5">
            <div class="mx-auto max-w-6xl">
                <SectionHeading section=Section::Skills />
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="card" style=format!("border-top: 4px solid {}", category.accent)>
                                    <h3 class="text-xl font-bold mb-6" style=format!("color: {}", category.accent)>
                                        {move || category_title(&prefs.t().skills.categories, category.kind)}
                                    </h3>
                                    <div class="grid grid-cols-3 sm:grid-cols-4 gap-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="flex flex-col items-center gap-2 p-3 rounded-lg hover:bg-purple-500/10 transition-colors">
                                                        <i class=format!("{} text-4xl", skill.icon) />
                                                        <span class="text-xs font-medium text-center">{skill.name}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
