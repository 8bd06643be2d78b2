//! Removal of the template's own documentation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{TemplateError, TemplateResult};

/// Recursively remove the documentation directory at `path`.
///
/// Returns `true` if a directory was removed. A missing path is not an
/// error. A path that exists but is not a directory is left alone.
pub fn cleanup_docs(path: &Path) -> TemplateResult<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No documentation directory at {:?}", path);
            return Ok(false);
        }
        Err(source) => {
            return Err(TemplateError::DocsRemovalFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.is_dir() {
        warn!("{:?} is not a directory, leaving it in place", path);
        return Ok(false);
    }

    match fs::remove_dir_all(path) {
        Ok(()) => {
            info!("Removed documentation directory {:?}", path);
            Ok(true)
        }
        // Removed concurrently between the check and the delete.
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(TemplateError::DocsRemovalFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cleanup_missing_dir() {
        let temp = tempdir().unwrap();
        let removed = cleanup_docs(&temp.path().join("docs")).unwrap();
        assert!(!removed);
    }

    #[test]
    fn test_cleanup_nested_dir() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(docs.join("guide").join("assets")).unwrap();
        fs::write(docs.join("index.md"), "# Docs").unwrap();
        fs::write(docs.join("guide").join("assets").join("logo.svg"), "<svg/>").unwrap();

        assert!(cleanup_docs(&docs).unwrap());
        assert!(!docs.exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_cleanup_twice() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir(&docs).unwrap();

        assert!(cleanup_docs(&docs).unwrap());
        assert!(!cleanup_docs(&docs).unwrap());
    }

    #[test]
    fn test_cleanup_leaves_file() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::write(&docs, "not a directory").unwrap();

        assert!(!cleanup_docs(&docs).unwrap());
        assert!(docs.is_file());
    }
}
