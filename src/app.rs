mod about;
mod certificates;
mod contact;
mod footer;
mod github_stats;
mod heading;
mod hero;
mod navbar;
pub mod preferences;
mod projects;
mod services;
mod skills;
mod voice;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{FAVICON, PERSONAL_INFO, SOCIAL_LINKS};
use crate::prefs::{LANGUAGE_KEY, THEME_KEY};

use about::About;
use certificates::Certificates;
use contact::Contact;
use footer::Footer;
use github_stats::GitHubSection;
use hero::Hero;
use navbar::Navbar;
use preferences::provide_preferences;
use projects::Projects;
use services::Services;
use skills::Skills;
use voice::VoiceCommands;
use widgets::{CustomCursor, Loader, ScrollProgress, ScrollToTop};

const DEVICON_CSS: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

/// Applies stored theme and language before first paint, so a returning
/// dark-mode visitor never sees a light flash while the WASM loads.
fn preference_script() -> String {
    format!(
        "(function(){{try{{var r=document.documentElement;\
if(localStorage.getItem('{THEME_KEY}')==='true'){{r.classList.add('dark');}}\
var l=localStorage.getItem('{LANGUAGE_KEY}');if(l==='fr'||l==='en'){{r.lang=l;}}\
}}catch(e){{}}}})();"
    )
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PERSONAL_INFO.description />
                <script inner_html=preference_script()></script>
                <noscript>
                    <style>".loader { display: none !important; }"</style>
                </noscript>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" href=DEVICON_CSS />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_preferences();

    view! {
        <Title formatter=|title| format!("{} - {title}", PERSONAL_INFO.name) />

        <Router>
            <Loader />
            <ScrollProgress />
            <CustomCursor />
            <Navbar />
            <main class="flex flex-col w-full overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <ScrollToTop />
            <VoiceCommands />
        </Router>
    }
}

/// Every section of the portfolio, in page order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Services />
        <Certificates />
        <GitHubSection />
        <Contact />
    }
}

#[component]
fn SocialIcons() -> impl IntoView {
    let links = [
        ("GitHub", SOCIAL_LINKS.github, "devicon-github-original"),
        ("LinkedIn", SOCIAL_LINKS.linkedin, "devicon-linkedin-plain"),
        ("Twitter", SOCIAL_LINKS.twitter, "devicon-twitter-original"),
    ];
    view! {
        <div class="flex gap-3">
            {links
                .into_iter()
                .map(|(name, href, icon)| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=name
                            class="w-11 h-11 flex items-center justify-center rounded-full text-xl bg-muted/10 hover:bg-purple-500 hover:text-white transition-colors"
                        >
                            <i class=icon />
                        </a>
                    }
                })
                .collect_view()}
            <a
                href=SOCIAL_LINKS.instagram
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Instagram"
                class="w-11 h-11 flex items-center justify-center rounded-full text-xl bg-muted/10 hover:bg-purple-500 hover:text-white transition-colors"
            >
                "📸"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_script_uses_storage_keys() {
        let script = preference_script();
        assert!(script.contains("getItem('darkMode')==='true'"));
        assert!(script.contains("getItem('language')"));
        assert!(script.starts_with("(function(){try{"));
        assert!(script.ends_with("})();"));
    }
}
