use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{GitHubError, GitHubProfile, GitHubRepo, GitHubStats, GITHUB_API};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));

/// Client for the handful of public endpoints the stats section reads.
/// A token is optional and only raises the rate limit.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new() -> Result<Self, GitHubError> {
        let http = reqwest::Client::builder()
            // GitHub rejects requests without a user agent
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: GITHUB_API.to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{username}", self.base_url)
    }

    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{username}/repos?per_page=100&sort=updated",
            self.base_url
        )
    }

    pub async fn profile(&self, username: &str) -> Result<GitHubProfile, GitHubError> {
        self.get_json(&self.profile_url(username)).await
    }

    pub async fn repos(&self, username: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        self.get_json(&self.repos_url(username)).await
    }

    /// Fetches profile and repositories together and derives the aggregates.
    pub async fn stats(&self, username: &str) -> Result<GitHubStats, GitHubError> {
        let (profile, repos) = tokio::try_join!(self.profile(username), self.repos(username))?;
        tracing::debug!(username, repos = repos.len(), "fetched GitHub snapshot");
        Ok(GitHubStats::from_snapshot(username, profile, repos))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        let mut req = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(GitHubError::Status(status));
        }
        Ok(res.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    /// Serves `app` on an ephemeral local port and returns its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("should be able to bind");
        let addr = listener.local_addr().expect("should have an address");
        tokio::spawn(async move { axum::serve(listener, app).await });
        format!("http://{addr}")
    }

    fn client(base_url: &str) -> GitHubClient {
        GitHubClient::new()
            .expect("client should build")
            .with_base_url(base_url)
    }

    #[test]
    fn test_urls() {
        let client = client("http://localhost:9999/");
        assert_eq!(
            client.profile_url("HAMZAZAWAK17"),
            "http://localhost:9999/users/HAMZAZAWAK17"
        );
        assert_eq!(
            client.repos_url("HAMZAZAWAK17"),
            "http://localhost:9999/users/HAMZAZAWAK17/repos?per_page=100&sort=updated"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let res = client("http://127.0.0.1:9").stats("nobody").await;
        assert!(matches!(res, Err(GitHubError::Request(_))));
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let base = serve(Router::new().fallback(|| async { StatusCode::NOT_FOUND })).await;
        let res = client(&base).stats("nobody").await;
        assert!(matches!(res, Err(GitHubError::Status(StatusCode::NOT_FOUND))));

        let base = serve(Router::new().fallback(|| async { StatusCode::FORBIDDEN })).await;
        let res = client(&base).profile("nobody").await;
        assert!(matches!(res, Err(GitHubError::Status(StatusCode::FORBIDDEN))));
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer() {
        let app = Router::new().fallback(|headers: HeaderMap| async move {
            match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                Some("Bearer s3cret") => StatusCode::NOT_FOUND,
                _ => StatusCode::UNAUTHORIZED,
            }
        });
        let base = serve(app).await;

        let res = client(&base).profile("octocat").await;
        assert!(matches!(res, Err(GitHubError::Status(StatusCode::UNAUTHORIZED))));

        let res = client(&base)
            .with_token(Some("s3cret".to_string()))
            .profile("octocat")
            .await;
        assert!(matches!(res, Err(GitHubError::Status(StatusCode::NOT_FOUND))));
    }

    #[tokio::test]
    async fn test_stats_from_both_endpoints() {
        let app = Router::new()
            .route(
                "/users/{name}",
                get(|Path(name): Path<String>| async move {
                    Json(json!({
                        "login": name,
                        "public_repos": 3,
                        "followers": 10,
                        "following": 2
                    }))
                }),
            )
            .route(
                "/users/{name}/repos",
                get(|| async {
                    Json::<Value>(json!([
                        {"name": "a", "description": null, "language": "Rust", "stargazers_count": 5, "html_url": "https://github.com/o/a"},
                        {"name": "b", "description": "b", "language": null, "stargazers_count": 1, "html_url": "https://github.com/o/b"},
                        {"name": "c", "description": null, "language": "Rust", "stargazers_count": 9, "html_url": "https://github.com/o/c"}
                    ]))
                }),
            );
        let base = serve(app).await;

        let stats = client(&base).stats("octocat").await.expect("should load stats");
        assert_eq!(stats.profile.login, "octocat");
        assert_eq!(stats.profile.followers, 10);
        assert_eq!(stats.analysed_repos, 3);
        assert_eq!(stats.total_stars, 15);
        assert_eq!(stats.top_languages[0].name, "Rust");
        assert_eq!(stats.top_languages[0].percentage, 100);
        assert_eq!(stats.popular_repos[0].name, "c");
    }
}
