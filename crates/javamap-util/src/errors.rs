use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all javamap operations.
///
/// Only failures that are genuinely fatal to the driver get a variant here.
/// Recoverable conditions (unresolvable coordinate, exhausted rate limit,
/// no matching repository, prefix conflict) are represented as `Option`/
/// `Result` control flow inside the component that detects them and never
/// reach this type.
#[derive(Debug, Error, Diagnostic)]
pub enum JavamapError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input SBOM document is missing required fields or is not valid JSON.
    #[error("Malformed SBOM: {message}")]
    #[diagnostic(help("Check that the input is Syft-shaped JSON with an `artifacts` array"))]
    MalformedSbom { message: String },

    /// A network request or external tool invocation failed in a way the
    /// driver cannot recover from (as opposed to the GitHub client's
    /// per-call degradation on rate-limit exhaustion).
    #[error("Network error: {message}")]
    Network { message: String },

    /// Config file present but could not be parsed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous fatal errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JavamapResult<T> = miette::Result<T>;
