use leptos::prelude::*;

use super::preferences::use_preferences;
use super::SocialIcons;
use crate::content::{Section, PERSONAL_INFO};

#[component]
pub fn Hero() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().hero;

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center pt-16 overflow-hidden"
        >
            <div class="mx-auto max-w-7xl w-full px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-6 section-content">
                    <span class="inline-flex items-center gap-2 px-4 py-1 rounded-full text-sm font-semibold bg-green-500/10 text-green-500">
                        <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                        {move || t().available}
                    </span>
                    <p class="text-xl text-muted">{move || t().greeting}</p>
                    <h1 class="text-5xl md:text-7xl font-extrabold leading-tight">
                        {move || t().title1}
                        <br />
                        <span class="text-gradient">{move || t().title2}</span>
                    </h1>
                    <p class="text-2xl font-medium">{move || t().subtitle}</p>
                    <p class="flex items-center gap-2 text-muted">"📍 " {move || t().location}</p>
                    <div class="flex flex-wrap gap-4 pt-2">
                        <a href=Section::Projects.href() class="btn-primary">
                            {move || t().view_projects}
                        </a>
                        <a href=Section::Contact.href() class="btn-outline">
                            {move || t().contact_me}
                        </a>
                    </div>
                    <SocialIcons />
                </div>
                <div class="relative flex justify-center">
                    <div class="absolute inset-0 m-auto w-72 h-72 md:w-96 md:h-96 rounded-full bg-gradient-to-r from-purple-500 to-pink-500 blur-3xl opacity-30"></div>
                    <img
                        src=PERSONAL_INFO.image
                        alt=PERSONAL_INFO.name
                        class="relative w-72 h-72 md:w-96 md:h-96 object-cover rounded-full border-4 border-purple-500/40 shadow-2xl"
                    />
                    <span class="absolute bottom-6 right-6 px-4 py-2 rounded-xl bg-background shadow-lg text-sm font-semibold">
                        {move || t().badge}
                    </span>
                </div>
            </div>
            <a
                href=Section::About.href()
                class="hidden md:flex absolute bottom-8 inset-x-0 mx-auto w-fit flex-col items-center text-xs text-muted animate-bounce"
            >
                {move || t().scroll}
                <span>"↓"</span>
            </a>
        </section>
    }
}
