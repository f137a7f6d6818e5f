//! Shared utilities for the javamap SBOM-to-source-mapping tool.
//!
//! This crate provides cross-cutting concerns used by all other javamap
//! crates: the unified error type, filesystem helpers, and a process
//! invocation builder. It is intentionally free of domain logic.

pub mod errors;
pub mod fs;
pub mod process;
