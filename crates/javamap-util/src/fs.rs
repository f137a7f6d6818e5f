use std::path::{Path, PathBuf};

use crate::errors::JavamapError;

/// Read an entire file to a string, wrapping the error in [`JavamapError`].
pub fn read_to_string(path: &Path) -> Result<String, JavamapError> {
    std::fs::read_to_string(path).map_err(JavamapError::Io)
}

/// Write `contents` to `path`, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<(), JavamapError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(JavamapError::Io)?;
        }
    }
    std::fs::write(path, contents).map_err(JavamapError::Io)
}

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("out.txt");
        write_string(&path, "hello").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn find_ancestor_with_locates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join("marker.toml"), "").unwrap();
        let found = find_ancestor_with(&nested, "marker.toml").unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn find_ancestor_with_returns_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(find_ancestor_with(tmp.path(), "does-not-exist.toml").is_none());
    }
}
