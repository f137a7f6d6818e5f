//! The remote index client: search, contents, and tags against the
//! GitHub REST API, with a response cache and a rate-limit budget.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_TAG_PAGES: u32 = 3;
const TAG_PAGE_SIZE: u32 = 100;

/// What an API call resolved to.
#[derive(Debug, Clone)]
pub enum ApiOutcome {
    Found(Value),
    NotFound,
    Unavailable,
}

/// `(remainingCalls, resetEpochSeconds)`, updated from `X-RateLimit-*`
/// response headers.
#[derive(Debug, Clone, Copy)]
struct RateLimitBudget {
    remaining: i64,
    reset_epoch_seconds: u64,
}

impl Default for RateLimitBudget {
    fn default() -> Self {
        Self {
            remaining: i64::MAX,
            reset_epoch_seconds: 0,
        }
    }
}

impl RateLimitBudget {
    fn exhausted(&self, now_epoch_seconds: u64) -> bool {
        self.remaining <= 0 && now_epoch_seconds < self.reset_epoch_seconds
    }

    fn update_from_headers(&mut self, headers: &reqwest::header::HeaderMap) {
        if let Some(remaining) = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
        {
            self.remaining = remaining;
        }
        if let Some(reset) = headers
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.reset_epoch_seconds = reset;
        }
    }
}

/// A client for the GitHub REST API.
///
/// Holds its cache and rate-limit budget as owned state behind a `Mutex` so
/// a single client instance can be shared across a parallel driver,
/// even though the reference driver only ever calls it sequentially.
pub struct GithubClient {
    http: Client,
    api_base_url: String,
    token: Option<String>,
    cache: Mutex<HashMap<String, ApiOutcomeCacheEntry>>,
    budget: Mutex<RateLimitBudget>,
}

#[derive(Debug, Clone)]
enum ApiOutcomeCacheEntry {
    Found(Value),
    NotFound,
    Unavailable,
}

impl GithubClient {
    pub fn new(api_base_url: impl Into<String>, token: Option<String>) -> miette::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("javamap/0.1")
            .build()
            .map_err(|e| javamap_util::errors::JavamapError::Network {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            api_base_url: api_base_url.into(),
            token,
            cache: Mutex::new(HashMap::new()),
            budget: Mutex::new(RateLimitBudget::default()),
        })
    }

    /// `searchRepos(query, params)`.
    pub async fn search_repos(&self, query: &str, params: &[(&str, &str)]) -> ApiOutcome {
        let mut all_params: Vec<(&str, &str)> = vec![("q", query)];
        all_params.extend_from_slice(params);
        self.get("/search/repositories", &all_params).await
    }

    /// `getContents(owner, repo, path, ref)`.
    pub async fn get_contents(&self, owner: &str, repo: &str, path: &str, git_ref: &str) -> ApiOutcome {
        let url_path = format!("/repos/{owner}/{repo}/contents/{path}");
        self.get(&url_path, &[("ref", git_ref)]).await
    }

    /// `listTags(owner, repo)`, paginated up to three pages of 100.
    pub async fn list_tags(&self, owner: &str, repo: &str) -> ApiOutcome {
        let url_path = format!("/repos/{owner}/{repo}/tags");
        let mut collected = Vec::new();

        for page in 1..=MAX_TAG_PAGES {
            let page_str = page.to_string();
            let per_page_str = TAG_PAGE_SIZE.to_string();
            let params = [("per_page", per_page_str.as_str()), ("page", page_str.as_str())];
            match self.get(&url_path, &params).await {
                ApiOutcome::Found(Value::Array(mut items)) => {
                    let got = items.len();
                    collected.append(&mut items);
                    if got < TAG_PAGE_SIZE as usize {
                        break;
                    }
                }
                ApiOutcome::Found(_) => break,
                ApiOutcome::NotFound => return ApiOutcome::NotFound,
                ApiOutcome::Unavailable => {
                    if collected.is_empty() {
                        return ApiOutcome::Unavailable;
                    }
                    break;
                }
            }
        }

        ApiOutcome::Found(Value::Array(collected))
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> ApiOutcome {
        let cache_key = cache_key(path, params);
        if let Some(cached) = self.cache.lock().unwrap().get(&cache_key).cloned() {
            return match cached {
                ApiOutcomeCacheEntry::Found(v) => ApiOutcome::Found(v),
                ApiOutcomeCacheEntry::NotFound => ApiOutcome::NotFound,
                ApiOutcomeCacheEntry::Unavailable => ApiOutcome::Unavailable,
            };
        }

        let now = now_epoch_seconds();
        if self.budget.lock().unwrap().exhausted(now) {
            tracing::warn!(path, "GitHub rate-limit budget exhausted, degrading silently");
            self.store(&cache_key, ApiOutcomeCacheEntry::Unavailable);
            return ApiOutcome::Unavailable;
        }

        let url = format!("{}{}", self.api_base_url, path);
        let mut request = self.http.get(&url).query(params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let outcome = match request.send().await {
            Ok(response) => {
                self.budget.lock().unwrap().update_from_headers(response.headers());
                match response.status() {
                    status if status == reqwest::StatusCode::NOT_FOUND => ApiOutcomeCacheEntry::NotFound,
                    status if status.is_success() => match response.json::<Value>().await {
                        Ok(body) => ApiOutcomeCacheEntry::Found(body),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to decode GitHub API response body");
                            ApiOutcomeCacheEntry::Unavailable
                        }
                    },
                    status => {
                        tracing::warn!(%status, path, "GitHub API call failed");
                        ApiOutcomeCacheEntry::Unavailable
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, path, "GitHub API call failed");
                ApiOutcomeCacheEntry::Unavailable
            }
        };

        self.store(&cache_key, outcome.clone());
        match outcome {
            ApiOutcomeCacheEntry::Found(v) => ApiOutcome::Found(v),
            ApiOutcomeCacheEntry::NotFound => ApiOutcome::NotFound,
            ApiOutcomeCacheEntry::Unavailable => ApiOutcome::Unavailable,
        }
    }

    fn store(&self, key: &str, entry: ApiOutcomeCacheEntry) {
        self.cache.lock().unwrap().insert(key.to_string(), entry);
    }
}

/// Canonical (sorted-key) cache key for a request.
fn cache_key(path: &str, params: &[(&str, &str)]) -> String {
    let sorted: BTreeMap<&str, &str> = params.iter().copied().collect();
    let query = sorted
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

fn now_epoch_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
