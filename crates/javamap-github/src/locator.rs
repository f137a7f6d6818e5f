//! The repository locator: scoring candidate repositories and selecting
//! the canonical upstream for a Maven coordinate.

use serde::Deserialize;
use serde_json::Value;

use javamap_core::archive::Archive;
use javamap_core::coordinate::MavenCoordinate;

use crate::client::{ApiOutcome, GithubClient};

/// A resolved (owner, repo) pair, or unresolved ("unknown").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocation {
    pub owner: String,
    pub repo: String,
}

/// A single candidate repository as returned by the search API, flattened
/// to the fields the scoring function needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RepoOwner {
    fn is_organization(&self) -> bool {
        self.kind.eq_ignore_ascii_case("organization")
    }
}

/// Score a single candidate against a query term and optional owner hint
///. Returns `None` for outright rejections.
pub fn score_repository(repo: &RepoMetadata, query_term: &str, owner_hint: Option<&str>) -> Option<i64> {
    if repo.archived || repo.disabled {
        return None;
    }
    if repo.fork && !repo.owner.is_organization() && repo.stargazers_count < 100 {
        return None;
    }

    let mut score: i64 = 0;
    let name_lower = repo.name.to_lowercase();
    let query_lower = query_term.to_lowercase();

    if name_lower == query_lower {
        score += 1000;
    } else if name_lower.contains(&query_lower) {
        score += 100;
    }

    if repo.fork {
        score -= 1000;
    } else {
        score += 500;
    }

    if repo.owner.is_organization() {
        score += 300;
    } else {
        if repo.stargazers_count < 100 {
            score -= 500;
        }
        if let Some(hint) = owner_hint {
            if !repo.owner.login.eq_ignore_ascii_case(hint) {
                score -= 200;
            }
        }
    }

    score += star_bonus(repo.stargazers_count);

    if let Some(hint) = owner_hint {
        if repo.owner.login.eq_ignore_ascii_case(hint) {
            score += 200;
        }
    }

    if repo.description.as_deref().is_some_and(|d| !d.is_empty()) {
        score += 50;
    }

    Some(score)
}

fn star_bonus(stars: u64) -> i64 {
    if stars >= 1000 {
        200
    } else if stars >= 100 {
        (stars.min(1000) / 10) as i64
    } else {
        (stars / 20) as i64
    }
}

/// Extract the owner hint from a `io.github.*`/`com.github.*` groupId
///: the third dot-segment.
pub fn owner_hint_from_group_id(group_id: &str) -> Option<String> {
    let parts: Vec<&str> = group_id.split('.').collect();
    let is_github_group = parts.first() == Some(&"io") || parts.first() == Some(&"com");
    if is_github_group && parts.get(1) == Some(&"github") {
        parts.get(2).map(|s| s.to_string())
    } else {
        None
    }
}

/// Locate the canonical repository for a Maven coordinate: POM URL
/// shortcut, API search, parent-POM recursion.
pub async fn locate_repository(
    client: &GithubClient,
    archive: &Archive,
    coordinate: &MavenCoordinate,
) -> Option<RepositoryLocation> {
    if let Some(pom_project) = &archive.pom_project {
        if let Some(location) = parse_github_url(&pom_project.url) {
            return Some(location);
        }
    }

    if let Some(location) = search_for_repository(client, &coordinate.artifact_id, &coordinate.group_id).await {
        return Some(location);
    }

    if let Some(pom_project) = &archive.pom_project {
        if let Some(parent) = &pom_project.parent {
            if let Some(location) =
                search_for_repository(client, &parent.artifact_id, &parent.group_id).await
            {
                return Some(location);
            }
        }
    }

    None
}

/// Parse a `pom.xml` project URL pointing at a GitHub
/// repository, in either `https://github.com/<owner>/<repo>` or
/// `git@github.com:<owner>/<repo>` form, with an optional `.git` suffix.
fn parse_github_url(url: &str) -> Option<RepositoryLocation> {
    let rest = url
        .strip_prefix("https://github.com/")
        .or_else(|| url.strip_prefix("http://github.com/"))
        .or_else(|| url.strip_prefix("git@github.com:"))
        .or_else(|| url.strip_prefix("ssh://git@github.com/"))?;

    let rest = rest.trim_end_matches('/').strip_suffix(".git").unwrap_or(rest.trim_end_matches('/'));
    let mut parts = rest.splitn(2, '/');
    let owner = parts.next()?.to_string();
    let repo = parts.next()?.to_string();
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some(RepositoryLocation { owner, repo })
}

async fn search_for_repository(client: &GithubClient, artifact_id: &str, group_id: &str) -> Option<RepositoryLocation> {
    let owner_hint = owner_hint_from_group_id(group_id);

    let queries = [
        format!("{artifact_id} in:name language:java filename:pom.xml fork:false"),
        format!("{artifact_id} in:name fork:false"),
        format!("{artifact_id} in:name"),
    ];

    let mut best: Option<(RepoMetadata, i64)> = None;
    for query in &queries {
        let items = match client.search_repos(query, &[("sort", "stars"), ("order", "desc")]).await {
            ApiOutcome::Found(value) => parse_items(&value),
            _ => Vec::new(),
        };
        for repo in items {
            if let Some(score) = score_repository(&repo, artifact_id, owner_hint.as_deref()) {
                if best.as_ref().map(|(_, s)| score > *s).unwrap_or(true) {
                    best = Some((repo, score));
                }
            }
        }
        if best.is_some() {
            break;
        }
    }

    let (best_repo, best_score) = best?;
    let best_repo = apply_umbrella_heuristic(client, artifact_id, owner_hint.as_deref(), best_repo, best_score).await;

    Some(RepositoryLocation {
        owner: best_repo.owner.login,
        repo: best_repo.name,
    })
}

/// Umbrella-project heuristic: substitute a higher-scoring
/// organization-owned "umbrella framework" repo when the primary best
/// candidate looks like a personal or low-star fork of a module.
async fn apply_umbrella_heuristic(
    client: &GithubClient,
    artifact_id: &str,
    owner_hint: Option<&str>,
    primary: RepoMetadata,
    primary_score: i64,
) -> RepoMetadata {
    let looks_like_module = !primary.owner.is_organization() || primary.stargazers_count < 1000;
    let Some((prefix, _rest)) = artifact_id.split_once('-') else {
        return primary;
    };
    if !looks_like_module {
        return primary;
    }

    let candidate_queries = [prefix.to_string(), format!("{prefix}-framework")];
    let mut best_umbrella: Option<(RepoMetadata, i64)> = None;

    for query in &candidate_queries {
        let items = match client
            .search_repos(query, &[("sort", "stars"), ("order", "desc")])
            .await
        {
            ApiOutcome::Found(value) => parse_items(&value),
            _ => Vec::new(),
        };
        for repo in items {
            if !repo.owner.is_organization() || repo.stargazers_count < 1000 {
                continue;
            }
            if let Some(mut score) = score_repository(&repo, artifact_id, owner_hint) {
                score += 500;
                if best_umbrella.as_ref().map(|(_, s)| score > *s).unwrap_or(true) {
                    best_umbrella = Some((repo, score));
                }
            }
        }
    }

    match best_umbrella {
        Some((umbrella, score)) if score > primary_score => umbrella,
        _ => primary,
    }
}

fn parse_items(value: &Value) -> Vec<RepoMetadata> {
    value
        .get("items")
        .and_then(|items| serde_json::from_value::<Vec<RepoMetadata>>(items.clone()).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_repo(name: &str, stars: u64) -> RepoMetadata {
        RepoMetadata {
            name: name.to_string(),
            full_name: format!("acme/{name}"),
            fork: false,
            archived: false,
            disabled: false,
            stargazers_count: stars,
            description: Some("a repository".to_string()),
            owner: RepoOwner {
                login: "acme".to_string(),
                kind: "Organization".to_string(),
            },
        }
    }

    #[test]
    fn exact_name_match_scores_highest() {
        let exact = org_repo("widget", 500);
        let substring = org_repo("widget-extra", 500);
        let exact_score = score_repository(&exact, "widget", None).unwrap();
        let substring_score = score_repository(&substring, "widget", None).unwrap();
        assert!(exact_score > substring_score);
    }

    #[test]
    fn archived_repository_is_rejected() {
        let mut repo = org_repo("widget", 500);
        repo.archived = true;
        assert!(score_repository(&repo, "widget", None).is_none());
    }

    #[test]
    fn low_star_personal_fork_is_rejected() {
        let mut repo = org_repo("widget", 5);
        repo.fork = true;
        repo.owner.kind = "User".to_string();
        assert!(score_repository(&repo, "widget", None).is_none());
    }

    #[test]
    fn fork_with_enough_stars_is_scored_not_rejected() {
        let mut repo = org_repo("widget", 500);
        repo.fork = true;
        repo.owner.kind = "User".to_string();
        assert!(score_repository(&repo, "widget", None).is_some());
    }

    #[test]
    fn owner_hint_match_adds_bonus() {
        let repo = org_repo("widget", 50);
        let with_hint = score_repository(&repo, "widget", Some("acme")).unwrap();
        let without_hint = score_repository(&repo, "widget", None).unwrap();
        assert!(with_hint > without_hint);
    }

    #[test]
    fn extracts_owner_hint_from_github_group_id() {
        assert_eq!(owner_hint_from_group_id("io.github.someuser"), Some("someuser".to_string()));
        assert_eq!(owner_hint_from_group_id("com.github.anotheruser"), Some("anotheruser".to_string()));
        assert_eq!(owner_hint_from_group_id("org.example"), None);
    }

    #[test]
    fn parses_https_and_ssh_github_urls() {
        assert_eq!(
            parse_github_url("https://github.com/acme/widget.git"),
            Some(RepositoryLocation { owner: "acme".to_string(), repo: "widget".to_string() })
        );
        assert_eq!(
            parse_github_url("git@github.com:acme/widget.git"),
            Some(RepositoryLocation { owner: "acme".to_string(), repo: "widget".to_string() })
        );
        assert_eq!(parse_github_url("https://gitlab.com/acme/widget"), None);
    }
}
