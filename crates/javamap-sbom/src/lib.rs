//! SBOM parsing and the normalized archive projection.
//!
//! Consumes the raw Syft-shaped JSON document and exposes only the
//! normalized `javamap_core::Archive` type to the rest of the workspace.

pub mod raw;
pub mod view;

pub use view::SbomView;
