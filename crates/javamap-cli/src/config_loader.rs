//! Loading an optional `javamap.toml`.

use std::path::Path;

use javamap_core::config::JavamapConfig;
use javamap_util::errors::JavamapError;

/// Load configuration from `path` if given, otherwise from `javamap.toml`
/// in the current directory if it exists, otherwise the built-in defaults.
pub fn load(path: Option<&Path>) -> Result<JavamapConfig, JavamapError> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let default = Path::new("javamap.toml");
            default.is_file().then(|| default.to_path_buf())
        }
    };

    let Some(resolved) = resolved else {
        return Ok(JavamapConfig::default());
    };

    let contents = javamap_util::fs::read_to_string(&resolved)?;
    toml::from_str(&contents).map_err(|e| JavamapError::Config {
        message: format!("failed to parse {}: {e}", resolved.display()),
    })
}
