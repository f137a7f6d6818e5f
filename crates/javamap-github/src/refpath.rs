//! The ref & path resolver: matching a Maven version to an actual tag,
//! and probing the repository layout for the Java source root.

use serde_json::Value;

use crate::client::{ApiOutcome, GithubClient};

const STDLIB_GROUP_IDS: [&str; 3] = ["java", "sun", "javax"];
const FALLBACK_PATH: &str = "src/main/java";

/// Resolve a git ref for `(owner, repo, version, group_id)`.
pub async fn resolve_ref(client: &GithubClient, owner: &str, repo: &str, version: &str, group_id: &str, jdk_ref: &str) -> String {
    if version.ends_with("-SNAPSHOT") {
        return "main".to_string();
    }
    let top_level = group_id.split('.').next().unwrap_or(group_id);
    if STDLIB_GROUP_IDS.contains(&top_level) {
        return jdk_ref.to_string();
    }

    let tags = match client.list_tags(owner, repo).await {
        ApiOutcome::Found(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| item.get("name").and_then(Value::as_str).map(str::to_string))
            .collect::<Vec<_>>(),
        _ => return version.to_string(),
    };

    let candidates = [
        version.to_string(),
        format!("v{version}"),
        format!("release-{version}"),
        format!("{version}-release"),
    ];

    for candidate in &candidates {
        if tags.iter().any(|t| t == candidate) {
            return candidate.clone();
        }
    }
    for candidate in &candidates {
        if let Some(matched) = tags.iter().find(|t| t.eq_ignore_ascii_case(candidate)) {
            return matched.clone();
        }
    }

    version.to_string()
}

/// Resolve the in-repository Java source path.
pub async fn resolve_path(client: &GithubClient, owner: &str, repo: &str, git_ref: &str, artifact_id: &str) -> String {
    let root_entries = match list_directory(client, owner, repo, "", git_ref).await {
        Some(entries) => entries,
        None => return try_conventional_paths(client, owner, repo, git_ref, artifact_id).await,
    };

    let has_pom = root_entries.iter().any(|e| e.name == "pom.xml");
    if has_pom {
        if let Some(exact) = root_entries.iter().find(|e| e.name == artifact_id && e.is_dir) {
            if directory_has_src_child(client, owner, repo, &exact.name, git_ref).await {
                return format!("{artifact_id}/src/main/java");
            }
        }

        for entry in root_entries.iter().filter(|e| e.is_dir) {
            let related = entry.name.contains(artifact_id) || artifact_id.contains(entry.name.as_str());
            if related && entry.name != artifact_id {
                if directory_has_src_child(client, owner, repo, &entry.name, git_ref).await {
                    return format!("{}/src/main/java", entry.name);
                }
            }
        }

        if root_entries.iter().any(|e| e.name == "src" && e.is_dir) {
            return FALLBACK_PATH.to_string();
        }
    }

    try_conventional_paths(client, owner, repo, git_ref, artifact_id).await
}

async fn try_conventional_paths(client: &GithubClient, owner: &str, repo: &str, git_ref: &str, artifact_id: &str) -> String {
    let candidates = [
        "src/main/java".to_string(),
        "java".to_string(),
        format!("{artifact_id}/src/main/java"),
        format!("src/{artifact_id}/main/java"),
    ];

    for candidate in &candidates {
        if matches!(client.get_contents(owner, repo, candidate, git_ref).await, ApiOutcome::Found(_)) {
            return candidate.clone();
        }
    }

    FALLBACK_PATH.to_string()
}

struct DirEntry {
    name: String,
    is_dir: bool,
}

async fn list_directory(client: &GithubClient, owner: &str, repo: &str, path: &str, git_ref: &str) -> Option<Vec<DirEntry>> {
    match client.get_contents(owner, repo, path, git_ref).await {
        ApiOutcome::Found(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| {
                    let name = item.get("name").and_then(Value::as_str)?.to_string();
                    let is_dir = item.get("type").and_then(Value::as_str) == Some("dir");
                    Some(DirEntry { name, is_dir })
                })
                .collect(),
        ),
        _ => None,
    }
}

async fn directory_has_src_child(client: &GithubClient, owner: &str, repo: &str, dir: &str, git_ref: &str) -> bool {
    list_directory(client, owner, repo, dir, git_ref)
        .await
        .map(|entries| entries.iter().any(|e| e.name == "src" && e.is_dir))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_version_resolves_to_main() {
        let client = GithubClient::new("https://api.github.com", None).unwrap();
        let git_ref = resolve_ref(&client, "acme", "widget", "2.0.0-SNAPSHOT", "com.acme", "jdk-17+0").await;
        assert_eq!(git_ref, "main");
    }

    #[tokio::test]
    async fn stdlib_group_id_resolves_to_jdk_ref() {
        let client = GithubClient::new("https://api.github.com", None).unwrap();
        let git_ref = resolve_ref(&client, "openjdk", "jdk", "17.0.2", "java.lang", "jdk-17+0").await;
        assert_eq!(git_ref, "jdk-17+0");
    }
}
