use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of repositories shown in the showcase.
pub const SHOWCASE_SIZE: usize = 3;
const DEDUPE_WINDOW_SECS: i64 = 60;

pub static GLOBAL_REPO_CACHE: LazyLock<RepoCache> = LazyLock::new(RepoCache::default);

#[cfg(feature = "ssr")]
static HTTP: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GithubError {
    #[error("An error occurred while fetching the data: {0}")]
    Request(String),
    #[error("GitHub answered with status {0}")]
    Status(u16),
}

pub fn repos_url(username: &str) -> String {
    format!("https://api.github.com/users/{username}/repos?sort=updated&per_page=6")
}

/// Most-starred repositories first, at most [`SHOWCASE_SIZE`] of them.
pub fn top_repos(mut repos: Vec<Repo>) -> Vec<Repo> {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(SHOWCASE_SIZE);
    repos
}

#[derive(Debug, Clone)]
struct CachedRepos {
    fetched_at: DateTime<Utc>,
    repos: Vec<Repo>,
}

/// Per-user results, reused for one minute after they were fetched.
#[derive(Debug, Default)]
pub struct RepoCache {
    entries: DashMap<String, CachedRepos>,
}

impl RepoCache {
    pub fn get(&self, username: &str, now: DateTime<Utc>) -> Option<Vec<Repo>> {
        let entry = self.entries.get(username)?;
        if now - entry.fetched_at < TimeDelta::seconds(DEDUPE_WINDOW_SECS) {
            Some(entry.repos.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, username: &str, repos: Vec<Repo>, now: DateTime<Utc>) {
        self.entries.insert(
            username.to_string(),
            CachedRepos {
                fetched_at: now,
                repos,
            },
        );
    }
}

/// Fetches the showcase for `username`. Failures are not retried.
#[cfg(feature = "ssr")]
pub async fn get_repos(username: &str) -> Result<Vec<Repo>, GithubError> {
    let cache = &*GLOBAL_REPO_CACHE;
    if let Some(repos) = cache.get(username, Utc::now()) {
        return Ok(repos);
    }

    let response = HTTP
        .get(repos_url(username))
        .header(reqwest::header::USER_AGENT, "portfolio-site")
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| GithubError::Request(e.to_string()))?;
    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), username, "github repo fetch failed");
        return Err(GithubError::Status(response.status().as_u16()));
    }
    let repos = response
        .json::<Vec<Repo>>()
        .await
        .map_err(|e| GithubError::Request(e.to_string()))?;

    let repos = top_repos(repos);
    cache.insert(username, repos.clone(), Utc::now());
    Ok(repos)
}
