use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn javamap_cmd() -> Command {
    Command::cargo_bin("javamap").unwrap()
}

const SAMPLE_SBOM: &str = r#"{
    "artifacts": [
        {
            "id": "app",
            "type": "java-archive",
            "language": "java",
            "locations": [{"path": "/app/app.jar", "accessPath": "app.jar"}],
            "metadata": {
                "manifest": {"main": [{"key": "Start-Class", "value": "com.example.rideshare.App"}]}
            }
        }
    ]
}"#;

#[test]
fn generate_from_sbom_json_writes_local_entry() {
    let tmp = TempDir::new().unwrap();
    let sbom_path = tmp.path().join("sbom.json");
    fs::write(&sbom_path, SAMPLE_SBOM).unwrap();
    let output_path = tmp.path().join("mappings.yaml");

    javamap_cmd()
        .current_dir(tmp.path())
        .args([
            "--skip-build",
            "--sbom-json",
            sbom_path.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let yaml = fs::read_to_string(&output_path).unwrap();
    assert!(yaml.contains("com/example/rideshare"));
    assert!(yaml.contains("local:"));
}

#[test]
fn mappings_file_entries_are_kept_over_newly_discovered_ones() {
    let tmp = TempDir::new().unwrap();
    let sbom_path = tmp.path().join("sbom.json");
    fs::write(&sbom_path, SAMPLE_SBOM).unwrap();
    let output_path = tmp.path().join("mappings.yaml");
    let mappings_path = tmp.path().join("existing.yaml");
    fs::write(
        &mappings_path,
        r#"source_code:
  mappings:
  - function_name:
    - prefix: com/example/rideshare
    language: java
    source:
      local:
        path: custom/path
"#,
    )
    .unwrap();

    javamap_cmd()
        .current_dir(tmp.path())
        .args([
            "--skip-build",
            "--sbom-json",
            sbom_path.to_str().unwrap(),
            "--mappings-file",
            mappings_path.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let yaml = fs::read_to_string(&output_path).unwrap();
    assert!(yaml.contains("custom/path"));
}

#[test]
fn missing_sbom_json_without_skip_sbom_attempts_syft_and_fails() {
    let tmp = TempDir::new().unwrap();

    javamap_cmd()
        .current_dir(tmp.path())
        .args(["--skip-build"])
        .assert()
        .failure();
}
