//! Driver integration with `syft`.

use javamap_util::errors::JavamapError;
use javamap_util::process::CommandBuilder;

/// Run Syft against an image and return its SBOM JSON document.
pub fn generate_sbom(image_name: &str) -> Result<String, JavamapError> {
    tracing::info!(image_name, "running syft");

    let output = CommandBuilder::new("syft")
        .arg(image_name)
        .arg("-o")
        .arg("json")
        .exec()?;

    if !output.status.success() {
        return Err(JavamapError::Generic {
            message: format!(
                "syft failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
