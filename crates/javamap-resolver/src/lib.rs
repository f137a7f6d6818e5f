//! Pure resolution algorithms, free of async code and network I/O:
//! archive classification, package prefix extraction, and mapping
//! document assembly.
//!
//! Deciding *which* remote repository, ref, and path a library resolves to
//! lives in `javamap-github`, which depends on this crate's types but not
//! the other way around.

pub mod classify;
pub mod mapping_builder;
pub mod prefix_extract;

pub use classify::{classify, find_main_archive, Classification, MainArchive};
pub use mapping_builder::MappingBuilder;
pub use prefix_extract::{extract_application_prefix, extract_library_prefixes};
