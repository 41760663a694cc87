//! Public GitHub profile data and the aggregates shown in the stats section.

#[cfg(feature = "ssr")]
mod cache;
#[cfg(feature = "ssr")]
mod client;

#[cfg(feature = "ssr")]
pub use cache::{StatsCache, GLOBAL_STATS_CACHE, STATS_TTL};
#[cfg(feature = "ssr")]
pub use client::GitHubClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GITHUB_API: &str = "https://api.github.com";
pub const TOP_LANGUAGES: usize = 5;
pub const POPULAR_REPOS: usize = 6;
const DEFAULT_LANGUAGE_COLOR: &str = "#6c757d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitHubProfile {
    pub login: String,
    #[serde(default)]
    pub html_url: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubStats {
    pub username: String,
    pub profile: GitHubProfile,
    /// Number of repositories the aggregates were computed from.
    pub analysed_repos: usize,
    pub total_stars: u64,
    pub top_languages: Vec<LanguageShare>,
    pub popular_repos: Vec<GitHubRepo>,
}

impl GitHubStats {
    pub fn from_snapshot(username: &str, profile: GitHubProfile, repos: Vec<GitHubRepo>) -> Self {
        Self {
            username: username.to_string(),
            analysed_repos: repos.len(),
            total_stars: total_stars(&repos),
            top_languages: top_languages(&repos, TOP_LANGUAGES),
            popular_repos: most_starred(repos, POPULAR_REPOS),
            profile,
        }
    }
}

#[derive(Error, Debug)]
pub enum GitHubError {
    #[cfg(feature = "ssr")]
    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("GitHub returned HTTP {0}")]
    Status(http::StatusCode),
}

pub fn total_stars(repos: &[GitHubRepo]) -> u64 {
    repos.iter().map(|r| r.stargazers_count as u64).sum()
}

/// Share of repositories per language, rounded to whole percent.
///
/// Repositories without a language are skipped. Ties keep the order in which
/// languages were first seen.
pub fn top_languages(repos: &[GitHubRepo], limit: usize) -> Vec<LanguageShare> {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        match counts.iter_mut().find(|(name, _)| *name == lang) {
            Some((_, count)) => *count += 1,
            None => counts.push((lang, 1)),
        }
    }
    let total = counts.iter().map(|(_, c)| *c).sum::<u32>();
    if total == 0 {
        return Vec::new();
    }
    let mut shares = counts
        .into_iter()
        .map(|(name, count)| LanguageShare {
            name: name.to_string(),
            percentage: (count as f64 / total as f64 * 100.0).round() as u32,
            color: language_color(name).to_string(),
        })
        .collect::<Vec<_>>();
    // stable: equal percentages stay in encounter order
    shares.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    shares.truncate(limit);
    shares
}

pub fn most_starred(mut repos: Vec<GitHubRepo>, limit: usize) -> Vec<GitHubRepo> {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(limit);
    repos
}

pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#F7DF1E",
        "HTML" => "#E34F26",
        "CSS" => "#1572B6",
        "PHP" => "#777BB4",
        "Python" => "#3776AB",
        "Java" => "#007396",
        "TypeScript" => "#3178C6",
        "Vue" => "#4FC08D",
        "React" => "#61DAFB",
        "Dart" => "#00B4AB",
        "Shell" => "#89E051",
        "C" => "#555555",
        "C++" => "#F34B7D",
        "C#" => "#178600",
        "Rust" => "#DEA584",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>, stars: u32) -> GitHubRepo {
        GitHubRepo {
            name: name.to_string(),
            description: None,
            language: language.map(str::to_string),
            stargazers_count: stars,
            html_url: format!("https://github.com/someone/{name}"),
        }
    }

    #[test]
    fn test_total_stars() {
        let repos = [5, 0, 3, 10, 0]
            .iter()
            .enumerate()
            .map(|(i, s)| repo(&format!("r{i}"), None, *s))
            .collect::<Vec<_>>();
        assert_eq!(total_stars(&repos), 18);
        assert_eq!(total_stars(&[]), 0);
    }

    #[test]
    fn test_top_languages_rounding_and_order() {
        let repos = vec![
            repo("a", Some("JS"), 0),
            repo("b", Some("JS"), 0),
            repo("c", Some("Py"), 0),
        ];
        let langs = top_languages(&repos, TOP_LANGUAGES);
        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].name, "JS");
        assert_eq!(langs[0].percentage, 67);
        assert_eq!(langs[1].name, "Py");
        assert_eq!(langs[1].percentage, 33);
    }

    #[test]
    fn test_top_languages_ties_keep_encounter_order() {
        let repos = vec![
            repo("a", Some("Rust"), 0),
            repo("b", None, 0),
            repo("c", Some("Go"), 0),
            repo("d", Some("Dart"), 0),
            repo("e", Some("Dart"), 0),
        ];
        let names = top_languages(&repos, TOP_LANGUAGES)
            .into_iter()
            .map(|l| (l.name, l.percentage))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                ("Dart".to_string(), 50),
                ("Rust".to_string(), 25),
                ("Go".to_string(), 25),
            ]
        );
    }

    #[test]
    fn test_top_languages_caps_and_colors() {
        let repos = ["A", "B", "C", "D", "E", "F", "Python"]
            .iter()
            .map(|l| repo(l, Some(l), 0))
            .collect::<Vec<_>>();
        let langs = top_languages(&repos, TOP_LANGUAGES);
        assert_eq!(langs.len(), 5);
        assert_eq!(langs[0].color, DEFAULT_LANGUAGE_COLOR);
        assert_eq!(language_color("Python"), "#3776AB");
        assert!(top_languages(&[repo("x", None, 3)], TOP_LANGUAGES).is_empty());
    }

    #[test]
    fn test_most_starred() {
        let repos = vec![
            repo("low", None, 1),
            repo("high", None, 10),
            repo("mid", None, 5),
            repo("mid2", None, 5),
        ];
        let names = most_starred(repos, 3)
            .into_iter()
            .map(|r| r.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["high", "mid", "mid2"]);
    }

    #[test]
    fn test_stats_from_snapshot() {
        let profile = GitHubProfile {
            login: "someone".to_string(),
            html_url: "https://github.com/someone".to_string(),
            public_repos: 2,
            followers: 7,
            following: 3,
        };
        let repos = vec![repo("a", Some("Dart"), 4), repo("b", Some("Java"), 1)];
        let stats = GitHubStats::from_snapshot("someone", profile.clone(), repos);
        assert_eq!(stats.profile, profile);
        assert_eq!(stats.analysed_repos, 2);
        assert_eq!(stats.total_stars, 5);
        assert_eq!(stats.popular_repos[0].name, "a");
        assert_eq!(stats.top_languages.len(), 2);
    }

    #[test]
    fn test_repo_deserializes_from_api_shape() {
        let json = r#"[{
            "id": 1,
            "name": "News-app",
            "description": null,
            "language": "Dart",
            "stargazers_count": 2,
            "html_url": "https://github.com/HAMZAZAWAK17/News-app",
            "fork": false
        }]"#;
        let repos: Vec<GitHubRepo> = serde_json::from_str(json).unwrap();
        assert_eq!(repos[0].language.as_deref(), Some("Dart"));
        assert_eq!(repos[0].description, None);
    }
}
