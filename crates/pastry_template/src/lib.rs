//! # pastry_template
//!
//! Turns a checkout of the Pastry library template into a new project.
//!
//! The template ships with a fixed identity (name, author, GitHub user and
//! description). Initializing a project:
//!
//! - replaces every literal occurrence of those strings in `package.json`,
//! - regenerates `README.md` from a fixed layout,
//! - removes the template's `docs/` directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pastry_template::{Placeholders, Project, SubstitutionSet};
//!
//! let project = Project::current_dir().unwrap();
//! let subs = SubstitutionSet::with_defaults("croissant", "A pastry lib");
//!
//! project.update_manifest(&Placeholders::TEMPLATE, &subs).unwrap();
//! project.write_readme(&subs.name, &subs.description).unwrap();
//! project.remove_docs().unwrap();
//! ```

pub mod cleanup;
pub mod error;
pub mod identity;
pub mod manifest;
pub mod project;
pub mod renderer;

pub use cleanup::cleanup_docs;
pub use error::{TemplateError, TemplateResult};
pub use identity::{
    Placeholders, SubstitutionSet, TEMPLATE_AUTHOR, TEMPLATE_DESCRIPTION, TEMPLATE_GITHUB_USER,
    TEMPLATE_NAME,
};
pub use manifest::PackageManifest;
pub use project::{Project, ProjectLayout};
pub use renderer::{render_readme, rewrite_manifest};
