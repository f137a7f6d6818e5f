//! The normalized, read-only SBOM projection.

use javamap_core::archive::{Archive, Location, ParentCoordinate, PomProject, PomProperties};
use javamap_core::coordinate::{MavenCoordinate, NotMavenCoordinate};
use javamap_util::errors::JavamapError;

use crate::raw::{RawArtifact, RawSbom};

/// A parsed SBOM document, normalized to the archive projection.
#[derive(Debug, Clone)]
pub struct SbomView {
    archives: Vec<Archive>,
}

impl SbomView {
    /// Parse a raw SBOM JSON document.
    ///
    /// Fails with [`JavamapError::MalformedSbom`] only when the JSON itself
    /// cannot be deserialized at all — missing optional sub-fields are
    /// handled per-field by `serde(default)` in [`crate::raw`].
    pub fn parse(json: &str) -> Result<Self, JavamapError> {
        let raw: RawSbom =
            serde_json::from_str(json).map_err(|e| JavamapError::MalformedSbom {
                message: format!("failed to parse SBOM JSON: {e}"),
            })?;

        let archives = raw
            .artifacts
            .into_iter()
            .filter(|a| a.r#type == "java-archive" && a.language == "java")
            .map(normalize_archive)
            .collect();

        Ok(Self { archives })
    }

    /// The subset of artifacts with type `java-archive` and language `java`.
    pub fn archives(&self) -> &[Archive] {
        &self.archives
    }

    /// Parse an archive's package URL into a Maven coordinate.
    pub fn coordinate(archive: &Archive) -> Result<MavenCoordinate, NotMavenCoordinate> {
        match &archive.purl {
            Some(purl) => MavenCoordinate::parse_purl(purl),
            None => Err(NotMavenCoordinate),
        }
    }
}

fn normalize_archive(raw: RawArtifact) -> Archive {
    let locations = raw
        .locations
        .into_iter()
        .map(|l| Location {
            path: l.path,
            access_path: l.access_path,
        })
        .collect();

    let manifest_main = raw
        .metadata
        .as_ref()
        .and_then(|m| m.manifest.as_ref())
        .map(|m| {
            m.main
                .iter()
                .map(|e| (e.key.clone(), e.value.clone()))
                .collect()
        })
        .unwrap_or_default();

    let pom_properties = raw
        .metadata
        .as_ref()
        .and_then(|m| m.pom_properties.as_ref())
        .map(|p| PomProperties {
            group_id: p.group_id.clone(),
            artifact_id: p.artifact_id.clone(),
            version: p.version.clone(),
        });

    let pom_project = raw
        .metadata
        .as_ref()
        .and_then(|m| m.pom_project.as_ref())
        .map(|p| PomProject {
            url: p.url.clone(),
            parent: p.parent.as_ref().map(|parent| ParentCoordinate {
                group_id: parent.group_id.clone(),
                artifact_id: parent.artifact_id.clone(),
                version: parent.version.clone(),
            }),
        });

    Archive {
        id: raw.id.unwrap_or_default(),
        locations,
        manifest_main,
        pom_properties,
        pom_project,
        purl: raw.purl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "artifacts": [
            {
                "id": "a1",
                "type": "java-archive",
                "language": "java",
                "purl": "pkg:maven/org.springframework/spring-web@6.1.0",
                "locations": [{"path": "/app/BOOT-INF/lib/spring-web-6.1.0.jar", "accessPath": "app.jar:BOOT-INF/lib/spring-web-6.1.0.jar"}],
                "metadata": {
                    "manifest": {"main": [{"key": "Export-Package", "value": "org.springframework.web;version=6.1.0"}]}
                }
            },
            {
                "type": "rpm",
                "language": "",
                "locations": []
            }
        ]
    }"#;

    #[test]
    fn parses_and_filters_java_archives() {
        let view = SbomView::parse(SAMPLE).unwrap();
        assert_eq!(view.archives().len(), 1);
        let archive = &view.archives()[0];
        assert_eq!(archive.id, "a1");
        assert!(archive.locations[0].is_in_boot_lib());
    }

    #[test]
    fn extracts_maven_coordinate() {
        let view = SbomView::parse(SAMPLE).unwrap();
        let coord = SbomView::coordinate(&view.archives()[0]).unwrap();
        assert_eq!(coord.artifact_id, "spring-web");
        assert_eq!(coord.version, "6.1.0");
    }

    #[test]
    fn malformed_json_is_fatal() {
        let err = SbomView::parse("not json").unwrap_err();
        assert!(matches!(err, JavamapError::MalformedSbom { .. }));
    }

    #[test]
    fn archive_without_purl_has_no_coordinate() {
        let mut view = SbomView::parse(SAMPLE).unwrap();
        view.archives[0].purl = None;
        assert!(SbomView::coordinate(&view.archives()[0]).is_err());
    }
}
