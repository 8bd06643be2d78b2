//! Package manifest (`package.json`) metadata.
//!
//! The rewriter treats the manifest as plain text. Parsing only happens when
//! a field has to be read, such as the version reported by `--version`.

use serde::Deserialize;

/// Fields of `package.json` that Pastry reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Parse manifest text.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = PackageManifest::parse(
            r#"{"name":"pastry","version":"0.3.1","scripts":{"build":"bun build"}}"#,
        )
        .unwrap();
        assert_eq!(manifest.version.as_deref(), Some("0.3.1"));
    }

    #[test]
    fn test_parse_manifest_without_version() {
        let manifest = PackageManifest::parse(r#"{"name":"pastry"}"#).unwrap();
        assert!(manifest.version.is_none());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        assert!(PackageManifest::parse("{ not json").is_err());
    }
}
