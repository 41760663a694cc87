use std::future::Future;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use super::{GitHubError, GitHubStats};

/// Unauthenticated GitHub allows 60 requests an hour per IP and every
/// snapshot costs two, so renders share one snapshot for this long.
pub const STATS_TTL: Duration = Duration::from_secs(10 * 60);

pub static GLOBAL_STATS_CACHE: LazyLock<StatsCache> =
    LazyLock::new(|| StatsCache::new(STATS_TTL));

/// Last good snapshot per username, with the time it was fetched.
pub struct StatsCache {
    entries: DashMap<String, (Instant, GitHubStats)>,
    ttl: Duration,
}

impl StatsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// The cached snapshot, if it is younger than the TTL.
    pub fn fresh(&self, username: &str) -> Option<GitHubStats> {
        let entry = self.entries.get(username)?;
        let (fetched, stats) = &*entry;
        (fetched.elapsed() < self.ttl).then(|| stats.clone())
    }

    fn stale(&self, username: &str) -> Option<GitHubStats> {
        self.entries.get(username).map(|entry| entry.1.clone())
    }

    pub fn insert(&self, username: &str, stats: GitHubStats) {
        self.entries
            .insert(username.to_string(), (Instant::now(), stats));
    }

    /// Serves a fresh snapshot, or calls `fetch` and caches its result.
    /// Errors are never cached; when `fetch` fails an expired snapshot is
    /// served instead, if there is one.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        username: &str,
        fetch: F,
    ) -> Result<GitHubStats, GitHubError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<GitHubStats, GitHubError>>,
    {
        if let Some(stats) = self.fresh(username) {
            return Ok(stats);
        }
        match fetch().await {
            Ok(stats) => {
                self.insert(username, stats.clone());
                Ok(stats)
            }
            Err(e) => match self.stale(username) {
                Some(stats) => {
                    tracing::warn!(username, "serving expired GitHub stats: {e}");
                    Ok(stats)
                }
                None => Err(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::github::GitHubProfile;

    fn stats(stars: u64) -> GitHubStats {
        GitHubStats {
            username: "octocat".to_string(),
            profile: GitHubProfile::default(),
            analysed_repos: 0,
            total_stars: stars,
            top_languages: Vec::new(),
            popular_repos: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_fresh_snapshot_is_reused() {
        let cache = StatsCache::new(STATS_TTL);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let res = cache
                .get_or_fetch("octocat", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(stats(7))
                })
                .await;
            assert_eq!(res.expect("should load").total_stars, 7);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_snapshot_is_refetched() {
        let cache = StatsCache::new(Duration::ZERO);
        cache.insert("octocat", stats(1));
        assert!(cache.fresh("octocat").is_none());

        let res = cache.get_or_fetch("octocat", || async { Ok(stats(2)) }).await;
        assert_eq!(res.expect("should load").total_stars, 2);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_expired_snapshot() {
        let cache = StatsCache::new(Duration::ZERO);
        let forbidden = || async { Err(GitHubError::Status(http::StatusCode::FORBIDDEN)) };

        let res = cache.get_or_fetch("octocat", forbidden).await;
        assert!(matches!(res, Err(GitHubError::Status(_))));

        cache.insert("octocat", stats(3));
        let res = cache.get_or_fetch("octocat", forbidden).await;
        assert_eq!(res.expect("should serve stale").total_stars, 3);
    }

    #[tokio::test]
    async fn test_usernames_are_cached_separately() {
        let cache = StatsCache::new(STATS_TTL);
        cache.insert("octocat", stats(1));
        assert!(cache.fresh("hubot").is_none());
        let res = cache.get_or_fetch("hubot", || async { Ok(stats(9)) }).await;
        assert_eq!(res.expect("should load").total_stars, 9);
        assert_eq!(cache.fresh("octocat").map(|s| s.total_stars), Some(1));
    }
}
