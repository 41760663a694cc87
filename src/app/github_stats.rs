use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use crate::content::Section;
use crate::github::{language_color, GitHubStats};
use crate::i18n::GitHubText;

type CounterLabel = fn(&'static GitHubText) -> &'static str;

#[server(input = GetUrl)]
pub async fn get_github_stats() -> Result<GitHubStats, ServerFnError> {
    use crate::config::SITE_CONFIG;
    use crate::github::{GitHubClient, GLOBAL_STATS_CACHE};

    let username = SITE_CONFIG.github_username.as_str();
    GLOBAL_STATS_CACHE
        .get_or_fetch(username, || async {
            GitHubClient::new()?
                .with_token(SITE_CONFIG.github_token.clone())
                .stats(username)
                .await
        })
        .await
        .map_err(|e| {
            tracing::warn!(username, "could not load GitHub stats: {e}");
            ServerFnError::new("Couldn't load GitHub stats")
        })
}

#[component]
pub fn GitHubSection() -> impl IntoView {
    let prefs = use_preferences();
    let stats = Resource::new(|| (), |_| get_github_stats());

    view! {
        <section id=Section::GitHub.id() class="py-20 px-4 bg-muted/5">
            <div class="mx-auto max-w-6xl">
                <SectionHeading section=Section::GitHub />
                <Suspense fallback=move || {
                    view! {
                        <div class="flex justify-center py-16">
                            <div class="w-12 h-12 rounded-full border-4 border-purple-500/30 border-t-purple-500 animate-spin"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match stats.await {
                            Ok(stats) => view! { <StatsView stats=stats /> }.into_any(),
                            Err(_) => {
                                view! {
                                    <p class="text-center text-red-500 py-12">
                                        {move || prefs.t().github.error}
                                    </p>
                                }
                                    .into_any()
                            }
                        }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn StatsView(stats: GitHubStats) -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().github;
    let profile_url = if stats.profile.html_url.is_empty() {
        format!("https://github.com/{}", stats.username)
    } else {
        stats.profile.html_url.clone()
    };
    let counters: [(&str, u64, CounterLabel); 4] = [
        ("📦", stats.profile.public_repos as u64, |t| t.stats.repos),
        ("👥", stats.profile.followers as u64, |t| t.stats.followers),
        ("➡️", stats.profile.following as u64, |t| t.stats.following),
        ("⭐", stats.total_stars, |t| t.stats.stars),
    ];

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12">
            {counters
                .into_iter()
                .map(|(icon, value, label)| {
                    view! {
                        <div class="card text-center">
                            <div class="text-2xl">{icon}</div>
                            <div class="text-3xl font-extrabold text-gradient">{value}</div>
                            <div class="text-sm text-muted">{move || label(t())}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="grid lg:grid-cols-3 gap-8">
            <div class="card">
                <h3 class="text-xl font-bold mb-1">{move || t().top_languages}</h3>
                <p class="text-xs text-muted mb-6">
                    {stats.analysed_repos}
                    " "
                    {move || t().analysed}
                </p>
                {stats
                    .top_languages
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <div class="mb-4">
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="font-medium">{lang.name}</span>
                                    <span class="text-muted">{format!("{}%", lang.percentage)}</span>
                                </div>
                                <div class="h-2 rounded-full bg-muted/20">
                                    <div
                                        class="h-2 rounded-full"
                                        style=format!(
                                            "width: {}%; background-color: {}",
                                            lang.percentage,
                                            lang.color,
                                        )
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="lg:col-span-2">
                <h3 class="text-xl font-bold mb-6">{move || t().popular_repos}</h3>
                <div class="grid sm:grid-cols-2 gap-4">
                    {stats
                        .popular_repos
                        .into_iter()
                        .map(|repo| {
                            let description = repo.description.clone();
                            view! {
                                <a
                                    href=repo.html_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="card block hover:border-purple-500/50"
                                >
                                    <div class="flex items-center justify-between mb-2">
                                        <span class="font-bold truncate">{repo.name}</span>
                                        <span class="text-sm">"⭐ " {repo.stargazers_count}</span>
                                    </div>
                                    <p class="text-sm text-muted mb-3 line-clamp-2">
                                        {move || {
                                            description
                                                .clone()
                                                .unwrap_or_else(|| t().no_description.to_string())
                                        }}
                                    </p>
                                    {repo
                                        .language
                                        .map(|lang| {
                                            let color = language_color(&lang);
                                            view! {
                                                <span class="tag">
                                                    <span
                                                        class="inline-block w-2 h-2 mr-1 rounded-full"
                                                        style=format!("background-color: {color}")
                                                    ></span>
                                                    {lang}
                                                </span>
                                            }
                                        })}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <div class="text-center mt-10">
            <a href=profile_url target="_blank" rel="noopener noreferrer" class="btn-outline">
                <i class="devicon-github-original mr-2" />
                {move || t().view_all}
            </a>
        </div>
    }
}
