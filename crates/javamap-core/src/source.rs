//! Source descriptors: either a local workspace path
//! or a version-pinned remote location.

/// Where the source for a set of package prefixes lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceDescriptor {
    /// A path relative to the local workspace (application code).
    Local { path: String },
    /// A version-pinned remote source tree (dependency code).
    Remote {
        owner: String,
        repo: String,
        git_ref: String,
        in_repo_path: String,
    },
}

impl SourceDescriptor {
    pub fn local(path: impl Into<String>) -> Self {
        Self::Local { path: path.into() }
    }

    pub fn remote(
        owner: impl Into<String>,
        repo: impl Into<String>,
        git_ref: impl Into<String>,
        in_repo_path: impl Into<String>,
    ) -> Self {
        Self::Remote {
            owner: owner.into(),
            repo: repo.into(),
            git_ref: git_ref.into(),
            in_repo_path: in_repo_path.into(),
        }
    }

    /// Whether two descriptors share all four remote components, or
    /// are the identical local path. Used by the mapping builder to decide
    /// whether a new prefix set coalesces into an existing entry.
    pub fn same_source(&self, other: &SourceDescriptor) -> bool {
        self == other
    }
}
