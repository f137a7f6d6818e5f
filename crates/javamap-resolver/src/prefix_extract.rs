//! Package prefix extraction: deriving Java package prefixes from
//! manifest entries, with consolidation to common roots and a
//! groupId-based fallback.

use std::collections::BTreeMap;

use javamap_core::archive::Archive;
use javamap_core::config::ClassifierConfig;
use javamap_core::coordinate::MavenCoordinate;
use javamap_core::prefix::PackagePrefix;

/// The single application package prefix inferred from `Start-Class` or a
/// non-launcher `Main-Class`.
pub fn extract_application_prefix(archive: &Archive, config: &ClassifierConfig) -> Option<PackagePrefix> {
    let class_name = if let Some(start_class) = archive.manifest_value("Start-Class") {
        Some(start_class)
    } else {
        archive.manifest_value("Main-Class").filter(|main_class| {
            !config
                .launcher_loader_packages
                .iter()
                .any(|p| main_class.starts_with(p.as_str()))
        })
    }?;

    let (package, _class) = class_name.rsplit_once('.')?;
    Some(PackagePrefix::new(package.replace('.', "/")))
}

/// Library package prefixes: prefer manifest
/// `Export-Package`/`Import-Package`, falling back to groupId-derived
/// ancestor prefixes.
pub fn extract_library_prefixes(archive: &Archive, coordinate: Option<&MavenCoordinate>) -> Vec<PackagePrefix> {
    let manifest_packages = extract_packages_from_manifest(archive);
    if !manifest_packages.is_empty() {
        return consolidate(manifest_packages)
            .into_iter()
            .map(|dotted| PackagePrefix::new(dotted.replace('.', "/")))
            .collect();
    }

    let mut group_ids: Vec<&str> = Vec::new();
    if let Some(coord) = coordinate {
        group_ids.push(coord.group_id.as_str());
    }
    if let Some(props) = &archive.pom_properties {
        if !props.group_id.is_empty() {
            group_ids.push(props.group_id.as_str());
        }
    }

    let mut seen = BTreeMap::new();
    let mut prefixes = Vec::new();
    for group_id in group_ids {
        for prefix in extract_group_id_prefixes(group_id) {
            if seen.insert(prefix.clone(), ()).is_none() {
                prefixes.push(PackagePrefix::new(prefix));
            }
        }
    }
    prefixes
}

/// Parse an OSGi-style manifest package list: `"pkg1;version=1.0,pkg2;uses:=pkg3"`.
fn parse_manifest_package_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|entry| {
            let package = entry
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .trim_matches('"')
                .trim_matches('\'');
            let rejected = package.is_empty()
                || !package.contains('.')
                || package.starts_with("version")
                || package.starts_with("uses")
                || package.starts_with('[');
            (!rejected).then(|| package.to_string())
        })
        .collect()
}

fn extract_packages_from_manifest(archive: &Archive) -> Vec<String> {
    let mut packages = Vec::new();
    for (key, value) in &archive.manifest_main {
        if key == "Export-Package" || key == "Import-Package" {
            packages.extend(parse_manifest_package_list(value));
        }
    }
    packages
}

/// Group packages by their first three dot-separated components and emit
/// the longest common dot-prefix of each group.
fn consolidate(packages: Vec<String>) -> Vec<String> {
    if packages.is_empty() {
        return Vec::new();
    }

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for package in packages {
        let parts: Vec<&str> = package.split('.').collect();
        let key = if parts.len() >= 3 {
            parts[..3].join(".")
        } else {
            package.clone()
        };
        groups.entry(key).or_default().push(package);
    }

    let mut result = Vec::new();
    for (root, members) in groups {
        if members.len() == 1 {
            result.push(members.into_iter().next().unwrap());
        } else {
            result.push(longest_common_package_prefix(&members).unwrap_or(root));
        }
    }
    result.sort();
    result.dedup();
    result
}

fn longest_common_package_prefix(packages: &[String]) -> Option<String> {
    if packages.is_empty() {
        return None;
    }
    let parts_list: Vec<Vec<&str>> = packages.iter().map(|p| p.split('.').collect()).collect();
    let min_len = parts_list.iter().map(|p| p.len()).min().unwrap_or(0);

    let mut common = Vec::new();
    for i in 0..min_len {
        let first = parts_list[0][i];
        if parts_list.iter().all(|p| p[i] == first) {
            common.push(first);
        } else {
            break;
        }
    }
    (!common.is_empty()).then(|| common.join("."))
}

/// GroupId plus up to two ancestor prefixes, in slash form.
///
/// `org.apache.tomcat.embed` yields `org/apache/tomcat/embed`,
/// `org/apache/tomcat`, `org/apache`.
fn extract_group_id_prefixes(group_id: &str) -> Vec<String> {
    if group_id.is_empty() {
        return Vec::new();
    }
    let mut prefixes = vec![group_id.replace('.', "/")];

    let parts: Vec<&str> = group_id.split('.').collect();
    let floor = parts.len().saturating_sub(3).max(0);
    for i in (floor..parts.len() - 1).rev() {
        prefixes.push(parts[..i + 1].join("/"));
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use javamap_core::archive::{Location, PomProperties};

    fn app_archive(class_key: &str, class_value: &str) -> Archive {
        Archive {
            id: "app".to_string(),
            locations: vec![Location {
                path: "/app/app.jar".to_string(),
                access_path: "app.jar".to_string(),
            }],
            manifest_main: vec![(class_key.to_string(), class_value.to_string())],
            pom_properties: None,
            pom_project: None,
            purl: None,
        }
    }

    #[test]
    fn extracts_application_prefix_from_start_class() {
        let archive = app_archive("Start-Class", "com.example.rideshare.App");
        let config = ClassifierConfig::default();
        let prefix = extract_application_prefix(&archive, &config).unwrap();
        assert_eq!(prefix.as_str(), "com/example/rideshare");
    }

    #[test]
    fn launcher_main_class_yields_no_application_prefix() {
        let archive = app_archive("Main-Class", "org.springframework.boot.loader.JarLauncher");
        let config = ClassifierConfig::default();
        assert!(extract_application_prefix(&archive, &config).is_none());
    }

    #[test]
    fn manifest_export_package_consolidates_to_module_root() {
        let archive = Archive {
            id: "spring-web".to_string(),
            locations: vec![],
            manifest_main: vec![(
                "Export-Package".to_string(),
                "org.springframework.web.servlet;version=6.1.0,org.springframework.web.client;version=6.1.0"
                    .to_string(),
            )],
            pom_properties: None,
            pom_project: None,
            purl: None,
        };
        let prefixes = extract_library_prefixes(&archive, None);
        assert_eq!(prefixes, vec![PackagePrefix::new("org/springframework/web")]);
    }

    #[test]
    fn manifest_package_list_rejects_invalid_tokens() {
        let parsed = parse_manifest_package_list(r#"org.example.pkg;version="1.0",uses:=foo,[bad,version=1"#);
        assert_eq!(parsed, vec!["org.example.pkg".to_string()]);
    }

    /// Consolidating a single valid package is the identity.
    #[test]
    fn consolidate_single_package_is_identity() {
        let result = consolidate(vec!["org.apache.tomcat.util.Thing".to_string()]);
        assert_eq!(result, vec!["org.apache.tomcat.util.Thing".to_string()]);
    }

    #[test]
    fn groupid_fallback_generates_ancestor_prefixes() {
        let coord = MavenCoordinate {
            group_id: "org.apache.tomcat.embed".to_string(),
            artifact_id: "tomcat-embed-core".to_string(),
            version: "10.1.0".to_string(),
        };
        let archive = Archive {
            id: "tomcat-embed".to_string(),
            locations: vec![],
            manifest_main: vec![],
            pom_properties: None,
            pom_project: None,
            purl: None,
        };
        let mut prefixes: Vec<String> = extract_library_prefixes(&archive, Some(&coord))
            .into_iter()
            .map(|p| p.into_string())
            .collect();
        prefixes.sort();
        assert_eq!(
            prefixes,
            vec![
                "org/apache".to_string(),
                "org/apache/tomcat".to_string(),
                "org/apache/tomcat/embed".to_string(),
            ]
        );
    }

    #[test]
    fn pom_properties_group_id_used_when_no_coordinate() {
        let archive = Archive {
            id: "x".to_string(),
            locations: vec![],
            manifest_main: vec![],
            pom_properties: Some(PomProperties {
                group_id: "org.example".to_string(),
                artifact_id: "x".to_string(),
                version: "1.0".to_string(),
            }),
            pom_project: None,
            purl: None,
        };
        let prefixes = extract_library_prefixes(&archive, None);
        assert!(prefixes.contains(&PackagePrefix::new("org/example")));
    }
}
