//! Raw JSON shapes for the input SBOM document, deserialized as-is and
//! then normalized into `javamap_core::Archive` by [`crate::view`].
//!
//! Every optional field in the SBOM maps to an `Option` here rather than
//! being reached into with raw `serde_json::Value` indexing.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawSbom {
    #[serde(default)]
    pub artifacts: Vec<RawArtifact>,
}

#[derive(Debug, Deserialize)]
pub struct RawArtifact {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default)]
    pub locations: Vec<RawLocation>,
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub path: String,
    #[serde(default, rename = "accessPath")]
    pub access_path: String,
}

#[derive(Debug, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub manifest: Option<RawManifest>,
    #[serde(default, rename = "pomProperties")]
    pub pom_properties: Option<RawPomProperties>,
    #[serde(default, rename = "pomProject")]
    pub pom_project: Option<RawPomProject>,
}

#[derive(Debug, Deserialize)]
pub struct RawManifest {
    #[serde(default)]
    pub main: Vec<RawManifestEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawManifestEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct RawPomProperties {
    #[serde(default, rename = "groupId")]
    pub group_id: String,
    #[serde(default, rename = "artifactId")]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct RawPomProject {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub parent: Option<RawParentCoordinate>,
}

#[derive(Debug, Deserialize)]
pub struct RawParentCoordinate {
    #[serde(default, rename = "groupId")]
    pub group_id: String,
    #[serde(default, rename = "artifactId")]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
}
