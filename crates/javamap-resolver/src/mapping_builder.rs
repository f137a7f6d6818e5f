//! Mapping document assembly: accumulating entries while enforcing
//! global prefix uniqueness, antichain minimality, coalescing of entries
//! that share a source, and application-before-dependency ordering.

use javamap_core::mapping::{MappingDocument, MappingEntry};
use javamap_core::prefix::{filter_nested, PackagePrefix};
use javamap_core::source::SourceDescriptor;

/// Accumulates mapping entries while enforcing the document's invariants.
///
/// Application entries and dependency entries are tracked separately so
/// that application entries can always be emitted first, regardless
/// of the order archives were pushed in.
#[derive(Debug, Default)]
pub struct MappingBuilder {
    used_prefixes: std::collections::HashSet<PackagePrefix>,
    app_entries: Vec<MappingEntry>,
    dep_entries: Vec<MappingEntry>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the application's package prefixes under `source` (normally a
    /// `Local` descriptor). Prefixes whose final segment is `loader`, or
    /// which contain a `/loader/` segment, are dropped first.
    pub fn add_application(&mut self, prefixes: Vec<PackagePrefix>, source: SourceDescriptor) {
        let filtered: Vec<PackagePrefix> = prefixes
            .into_iter()
            .filter(|p| !is_loader_prefix(p))
            .collect();
        self.insert(filtered, source, true);
    }

    /// Add a library's package prefixes under a remote (or local) source.
    pub fn add_dependency(&mut self, prefixes: Vec<PackagePrefix>, source: SourceDescriptor) {
        self.insert(prefixes, source, false);
    }

    /// Seed the builder with entries read back from a previously-written
    /// mapping document, before any freshly-discovered prefixes are added.
    /// Seeded entries keep first-writer-wins priority over anything the
    /// current run would otherwise claim, and coalesce normally with new
    /// entries that share the same source.
    pub fn seed(&mut self, entries: Vec<MappingEntry>) {
        for entry in entries {
            let is_application = matches!(entry.source, SourceDescriptor::Local { .. });
            self.insert(entry.prefixes, entry.source, is_application);
        }
    }

    fn insert(&mut self, prefixes: Vec<PackagePrefix>, source: SourceDescriptor, is_application: bool) {
        let mut accepted = Vec::new();
        for prefix in prefixes {
            if self.used_prefixes.contains(&prefix) {
                tracing::warn!(prefix = %prefix, "package prefix already claimed by another entry, skipping");
                continue;
            }
            self.used_prefixes.insert(prefix.clone());
            accepted.push(prefix);
        }
        if accepted.is_empty() {
            return;
        }

        let entries = if is_application {
            &mut self.app_entries
        } else {
            &mut self.dep_entries
        };

        if let Some(existing) = entries.iter_mut().find(|e| e.source.same_source(&source)) {
            existing.prefixes.append(&mut accepted);
            existing.prefixes = filter_nested(std::mem::take(&mut existing.prefixes));
            existing.prefixes.sort();
            return;
        }

        let mut merged = filter_nested(accepted);
        merged.sort();
        entries.push(MappingEntry {
            prefixes: merged,
            source,
        });
    }

    /// Finalize into a [`MappingDocument`]: application entries first (P5),
    /// then dependency entries, both in the order they were first created.
    pub fn build(self) -> MappingDocument {
        let mut document = MappingDocument::new();
        for entry in self.app_entries.into_iter().chain(self.dep_entries) {
            document.push_entry(entry);
        }
        document
    }
}

fn is_loader_prefix(prefix: &PackagePrefix) -> bool {
    let s = prefix.as_str();
    s.rsplit('/').next() == Some("loader") || s.contains("/loader/")
}
