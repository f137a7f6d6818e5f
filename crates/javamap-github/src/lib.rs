//! The GitHub-backed remote index: a caching, rate-limit-aware API client,
//! repository candidate scoring and selection, and git ref/path
//! resolution.

pub mod client;
pub mod locator;
pub mod refpath;

pub use client::{ApiOutcome, GithubClient};
pub use locator::{locate_repository, owner_hint_from_group_id, score_repository, RepoMetadata, RepositoryLocation};
pub use refpath::{resolve_path, resolve_ref};
