//! The normalized archive projection.
//!
//! `javamap-sbom` is responsible for turning whatever shape the raw SBOM
//! JSON happens to have into one of these; every other crate only ever sees
//! this type, never the raw JSON.

/// A single `{path, accessPath}` location entry from the SBOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub access_path: String,
}

impl Location {
    /// Whether this location sits inside a Spring Boot style `BOOT-INF/lib/`
    /// nested-archive directory.
    pub fn is_in_boot_lib(&self) -> bool {
        self.access_path.contains(":BOOT-INF/lib/")
    }
}

/// The optional `pomProperties` block: `groupId`/`artifactId`/`version`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomProperties {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// A parent coordinate referenced from a `pomProject` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// The optional `pomProject` block: `url` and an optional `parent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomProject {
    pub url: String,
    pub parent: Option<ParentCoordinate>,
}

/// A single Java archive entry from the SBOM.
///
/// Immutable after ingestion: nothing downstream mutates an `Archive`, only
/// derives values (coordinate, prefixes, classification) from it.
#[derive(Debug, Clone)]
pub struct Archive {
    pub id: String,
    pub locations: Vec<Location>,
    /// Ordered `(key, value)` pairs from the manifest's `main` section.
    /// Keys are case-sensitive; duplicate keys are preserved in source order.
    pub manifest_main: Vec<(String, String)>,
    pub pom_properties: Option<PomProperties>,
    pub pom_project: Option<PomProject>,
    pub purl: Option<String>,
}

impl Archive {
    /// The first value for `key` in the manifest main section, in source order.
    pub fn manifest_value(&self, key: &str) -> Option<&str> {
        self.manifest_main
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any location sits outside `BOOT-INF/lib/` and ends in `.jar`.
    pub fn is_candidate_main(&self) -> bool {
        self.locations
            .iter()
            .any(|l| !l.is_in_boot_lib() && l.path.ends_with(".jar"))
    }
}
