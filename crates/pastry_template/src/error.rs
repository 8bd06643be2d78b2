//! Error types for template rewriting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while rewriting a project.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to read manifest {}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest has no version field: {}", .0.display())]
    MissingVersion(PathBuf),

    #[error("Failed to write {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove documentation directory {}", path.display())]
    DocsRemovalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TemplateError {
    /// Whether the error concerns locating or reading the manifest.
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound(_)
                | Self::ManifestUnreadable { .. }
                | Self::InvalidManifest { .. }
                | Self::MissingVersion(_)
        )
    }

    /// Whether the error is a failed write or removal on disk.
    pub fn is_filesystem_error(&self) -> bool {
        matches!(
            self,
            Self::WriteFailed { .. } | Self::DocsRemovalFailed { .. } | Self::Io(_)
        )
    }
}
