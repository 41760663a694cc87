use leptos::prelude::*;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use crate::content::Section;
use crate::i18n::ServicesText;

/// Icon plus title/description accessors for one service card.
type ServiceCard = (
    &'static str,
    fn(&'static ServicesText) -> &'static str,
    fn(&'static ServicesText) -> &'static str,
);

const SERVICES: [ServiceCard; 6] = [
    ("🧩", |s| s.fullstack, |s| s.fullstack_desc),
    ("🌐", |s| s.websites, |s| s.websites_desc),
    ("📱", |s| s.mobile, |s| s.mobile_desc),
    ("🛒", |s| s.ecommerce, |s| s.ecommerce_desc),
    ("🚀", |s| s.landing, |s| s.landing_desc),
    ("🎨", |s| s.design, |s| s.design_desc),
];

#[component]
pub fn Services() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().services;

    view! {
        <section id=Section::Services.id() class="py-20 px-4 bg-muted/5">
            <div class="mx-auto max-w-6xl">
                <SectionHeading section=Section::Services />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES
                        .into_iter()
                        .map(|(icon, title, desc)| {
                            view! {
                                <div class="card group hover:-translate-y-1 transition-transform">
                                    <div class="w-14 h-14 mb-6 flex items-center justify-center rounded-xl text-3xl bg-gradient-to-br from-purple-500/20 to-pink-500/20">
                                        {icon}
                                    </div>
                                    <h3 class="text-xl font-bold mb-3 group-hover:text-purple-500">
                                        {move || title(t())}
                                    </h3>
                                    <p class="text-muted leading-relaxed">{move || desc(t())}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <a href=Section::Contact.href() class="btn-primary">
                        {move || t().cta}
                    </a>
                </div>
            </div>
        </section>
    }
}
