//! Driver integration with `docker build`.

use std::path::Path;

use javamap_util::errors::JavamapError;
use javamap_util::process::CommandBuilder;

/// Build the target image, tagging it `image_name`.
pub fn build_image(dockerfile: &Path, image_name: &str, context: &Path) -> Result<(), JavamapError> {
    tracing::info!(image_name, dockerfile = %dockerfile.display(), "building image");

    let output = CommandBuilder::new("docker")
        .arg("build")
        .arg("-f")
        .arg(dockerfile.to_string_lossy().to_string())
        .arg("-t")
        .arg(image_name)
        .arg(context.to_string_lossy().to_string())
        .exec()?;

    if !output.status.success() {
        return Err(JavamapError::Generic {
            message: format!(
                "docker build failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ),
        });
    }

    Ok(())
}
