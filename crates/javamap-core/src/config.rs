//! Global configuration loaded from an optional `javamap.toml`.
//!
//! Every field has a default matching the tool's built-in behavior, so a
//! missing or empty config file is equivalent to `JavamapConfig::default()`.

use serde::{Deserialize, Serialize};

/// Top-level configuration, one section per component that has anything
/// worth tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JavamapConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub github: GithubConfig,
}

/// `[classifier]` — launcher-loader detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// `Main-Class` values beginning with any of these substrings mark an
    /// archive as a launcher/loader rather than application code.
    #[serde(default = "default_launcher_loader_packages", rename = "launcher-loader-packages")]
    pub launcher_loader_packages: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            launcher_loader_packages: default_launcher_loader_packages(),
        }
    }
}

fn default_launcher_loader_packages() -> Vec<String> {
    vec!["org.springframework.boot.loader".to_string()]
}

/// `[resolver]` — ref resolution defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Ref used for the `java`/`sun`/`javax` standard-library groupIds.
    #[serde(default = "default_jdk_ref", rename = "jdk-ref")]
    pub jdk_ref: String,
    /// Default in-repository path when path resolution cannot determine one.
    #[serde(default = "default_local_path", rename = "default-local-path")]
    pub default_local_path: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            jdk_ref: default_jdk_ref(),
            default_local_path: default_local_path(),
        }
    }
}

fn default_jdk_ref() -> String {
    "jdk-17+0".to_string()
}

fn default_local_path() -> String {
    "src/main/java".to_string()
}

/// `[github]` — remote index client credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Environment variable consulted for the API credential when no CLI
    /// flag supplies one.
    #[serde(default = "default_token_env", rename = "token-env")]
    pub token_env: String,
    /// Explicit token; normally left unset and sourced from the environment.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_base_url", rename = "api-base-url")]
    pub api_base_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            token: None,
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_spec_defaults() {
        let cfg = JavamapConfig::default();
        assert_eq!(
            cfg.classifier.launcher_loader_packages,
            vec!["org.springframework.boot.loader"]
        );
        assert_eq!(cfg.resolver.jdk_ref, "jdk-17+0");
        assert_eq!(cfg.resolver.default_local_path, "src/main/java");
        assert_eq!(cfg.github.token_env, "GITHUB_TOKEN");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: JavamapConfig = toml::from_str("").unwrap_or_else(|_| JavamapConfig::default());
        assert_eq!(cfg.resolver.jdk_ref, "jdk-17+0");
    }
}
