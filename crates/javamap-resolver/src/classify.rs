//! Archive classification: finding the main application archive and
//! deciding, for every other archive, whether it is application code or
//! a library.

use javamap_core::archive::Archive;
use javamap_core::config::ClassifierConfig;
use javamap_core::coordinate::MavenCoordinate;

/// The archive selected as the application's entry point, together with the
/// specific location path that qualified it as a candidate.
#[derive(Debug, Clone)]
pub struct MainArchive<'a> {
    pub archive: &'a Archive,
    pub jar_path: String,
}

/// Whether an archive is application code or a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Application,
    Library,
}

/// Select the main application archive.
///
/// An archive is a *candidate main* if at least one of its locations is
/// outside `BOOT-INF/lib/` and ends in `.jar`. Among candidates, the first
/// one whose manifest has a `Main-Class` entry wins; if none does, the
/// first candidate wins. `None` if there are no candidates at all.
pub fn find_main_archive(archives: &[Archive]) -> Option<MainArchive<'_>> {
    let candidates: Vec<&Archive> = archives.iter().filter(|a| a.is_candidate_main()).collect();

    let chosen = candidates
        .iter()
        .find(|a| a.manifest_value("Main-Class").is_some())
        .or_else(|| candidates.first())?;

    let jar_path = chosen
        .locations
        .iter()
        .find(|l| !l.is_in_boot_lib() && l.path.ends_with(".jar"))
        .map(|l| l.path.clone())?;

    Some(MainArchive {
        archive: chosen,
        jar_path,
    })
}

/// Classify a single archive given the selected main archive.
///
/// When `main` is `None` (no candidate main archive was found anywhere in
/// the SBOM), every archive is treated as a library.
pub fn classify(archive: &Archive, main: Option<&MainArchive<'_>>, config: &ClassifierConfig) -> Classification {
    let Some(main) = main else {
        return Classification::Library;
    };

    let is_main_location = archive
        .locations
        .iter()
        .any(|l| l.path == main.jar_path && !l.is_in_boot_lib());
    if !is_main_location {
        return Classification::Library;
    }

    if archive.manifest_value("Start-Class").is_some() {
        return Classification::Application;
    }

    if let Some(main_class) = archive.manifest_value("Main-Class") {
        let is_loader = config
            .launcher_loader_packages
            .iter()
            .any(|prefix| main_class.starts_with(prefix.as_str()));
        return if is_loader {
            Classification::Library
        } else {
            Classification::Application
        };
    }

    let has_maven_coordinate = archive
        .purl
        .as_deref()
        .and_then(|purl| MavenCoordinate::parse_purl(purl).ok())
        .is_some();
    if has_maven_coordinate {
        Classification::Library
    } else {
        Classification::Application
    }
}
