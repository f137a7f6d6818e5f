//! Core data types for the javamap SBOM-to-source-mapping tool.
//!
//! This crate defines the fundamental types shared by every other javamap
//! crate: the normalized archive projection, Maven coordinates,
//! package prefixes and their antichain operations, source descriptors, and
//! the mapping document that is ultimately serialized to the output file.
//!
//! This crate is intentionally free of async code, network I/O, and JSON
//! parsing — those live in `javamap-sbom` and `javamap-github`.

pub mod archive;
pub mod config;
pub mod coordinate;
pub mod mapping;
pub mod prefix;
pub mod source;

pub use archive::{Archive, Location, ParentCoordinate, PomProject, PomProperties};
pub use config::JavamapConfig;
pub use coordinate::MavenCoordinate;
pub use mapping::{MappingDocument, MappingEntry};
pub use prefix::PackagePrefix;
pub use source::SourceDescriptor;
