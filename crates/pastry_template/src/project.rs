//! A project directory and the files the rewriter touches in it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cleanup::cleanup_docs;
use crate::error::{TemplateError, TemplateResult};
use crate::identity::{Placeholders, SubstitutionSet};
use crate::manifest::PackageManifest;
use crate::renderer::{render_readme, rewrite_manifest};

/// File names relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Manifest rewritten with the substitution set
    pub manifest_file: PathBuf,
    /// README regenerated from scratch
    pub readme_file: PathBuf,
    /// Template documentation removed on init
    pub docs_dir: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest_file: PathBuf::from("package.json"),
            readme_file: PathBuf::from("README.md"),
            docs_dir: PathBuf::from("docs"),
        }
    }
}

/// A project created from the Pastry template.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    layout: ProjectLayout,
}

impl Project {
    /// A project rooted at `root` with the default layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: ProjectLayout::default(),
        }
    }

    /// A project rooted at the current working directory.
    pub fn current_dir() -> TemplateResult<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.layout.manifest_file)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.layout.readme_file)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.root.join(&self.layout.docs_dir)
    }

    /// Fail unless the manifest exists as a file.
    pub fn ensure_manifest(&self) -> TemplateResult<()> {
        let path = self.manifest_path();
        if path.is_file() {
            Ok(())
        } else {
            Err(TemplateError::ManifestNotFound(path))
        }
    }

    /// Read the manifest as text.
    pub fn read_manifest(&self) -> TemplateResult<String> {
        let path = self.manifest_path();
        debug!("Reading manifest from {:?}", path);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TemplateError::ManifestNotFound(path)
            } else {
                TemplateError::ManifestUnreadable { path, source }
            }
        })
    }

    /// The manifest's `version` field.
    pub fn manifest_version(&self) -> TemplateResult<String> {
        let content = self.read_manifest()?;
        let path = self.manifest_path();
        let manifest = PackageManifest::parse(&content)
            .map_err(|source| TemplateError::InvalidManifest {
                path: path.clone(),
                source,
            })?;
        manifest
            .version
            .ok_or(TemplateError::MissingVersion(path))
    }

    /// Substitute the placeholders in the manifest and write it back.
    ///
    /// Returns whether the content changed. The file is written even when
    /// nothing changed.
    pub fn update_manifest(
        &self,
        placeholders: &Placeholders,
        substitutions: &SubstitutionSet,
    ) -> TemplateResult<bool> {
        let content = self.read_manifest()?;
        let updated = rewrite_manifest(&content, placeholders, substitutions);
        let changed = updated != content;

        write_file(&self.manifest_path(), &updated)?;
        info!(
            "Updated manifest {:?} (changed: {})",
            self.manifest_path(),
            changed
        );
        Ok(changed)
    }

    /// Regenerate the README, replacing any existing one.
    pub fn write_readme(&self, name: &str, description: &str) -> TemplateResult<()> {
        let readme = render_readme(name, description);
        write_file(&self.readme_path(), &readme)?;
        info!("Wrote README {:?}", self.readme_path());
        Ok(())
    }

    /// Remove the template documentation directory if present.
    pub fn remove_docs(&self) -> TemplateResult<bool> {
        cleanup_docs(&self.docs_path())
    }
}

fn write_file(path: &Path, content: &str) -> TemplateResult<()> {
    debug!("Writing {} bytes to {:?}", content.len(), path);
    fs::write(path, content).map_err(|source| TemplateError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
