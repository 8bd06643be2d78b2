//! Text rendering: manifest substitution and README generation.

use tracing::debug;

use crate::identity::{Placeholders, SubstitutionSet};

/// Replace every occurrence of each placeholder with its substitution.
///
/// Replacements run in order name, author, GitHub user, description, each
/// over the output of the previous one. The content is treated as raw text;
/// nothing checks that the result is still valid JSON.
pub fn rewrite_manifest(
    content: &str,
    placeholders: &Placeholders,
    substitutions: &SubstitutionSet,
) -> String {
    placeholders
        .pairs(substitutions)
        .into_iter()
        .fold(content.to_string(), |text, (placeholder, value)| {
            if placeholder.is_empty() {
                return text;
            }
            let hits = text.matches(placeholder).count();
            if hits == 0 {
                return text;
            }
            debug!("Replacing {} occurrence(s) of {:?}", hits, placeholder);
            text.replace(placeholder, value)
        })
}

/// Render the README of a freshly initialized project.
///
/// `name` and `description` are inserted verbatim, without HTML or Markdown
/// escaping.
pub fn render_readme(name: &str, description: &str) -> String {
    format!(
        r#"
<div align="center">
  <h1 align="center">{name}</h1>

  <p align="center">
    <strong>{description}</strong>
  </p>
</div>

Made with [🥐 `pastry`](https://github.com/adelrodriguez/pastry)
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{TEMPLATE_AUTHOR, TEMPLATE_DESCRIPTION, TEMPLATE_GITHUB_USER};

    fn subs() -> SubstitutionSet {
        SubstitutionSet::new("croissant", "Jane <jane@example.com>", "jane", "Flaky library")
    }

    #[test]
    fn test_rewrite_replaces_all_occurrences() {
        let content = format!(
            r#"{{"name":"pastry","repository":"github:{gh}/pastry","bugs":"https://github.com/{gh}/pastry/issues","author":"{author}","description":"{desc}"}}"#,
            gh = TEMPLATE_GITHUB_USER,
            author = TEMPLATE_AUTHOR,
            desc = TEMPLATE_DESCRIPTION,
        );
        let rewritten = rewrite_manifest(&content, &Placeholders::TEMPLATE, &subs());

        assert_eq!(
            rewritten,
            r#"{"name":"croissant","repository":"github:jane/croissant","bugs":"https://github.com/jane/croissant/issues","author":"Jane <jane@example.com>","description":"Flaky library"}"#
        );
        assert!(!rewritten.contains("pastry"));
        assert!(!rewritten.contains(TEMPLATE_GITHUB_USER));
    }

    #[test]
    fn test_rewrite_without_placeholders_is_unchanged() {
        let content = r#"{"name":"baguette","version":"1.0.0"}"#;
        assert_eq!(
            rewrite_manifest(content, &Placeholders::TEMPLATE, &subs()),
            content
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let content = r#"{"name":"pastry","description":"A simple template to build libraries with Bun"}"#;
        let once = rewrite_manifest(content, &Placeholders::TEMPLATE, &subs());
        let twice = rewrite_manifest(&once, &Placeholders::TEMPLATE, &subs());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rewrite_keeps_default_author() {
        let content = r#"{"name":"pastry","author":"Adel Rodríguez <hey@adel.do>"}"#;
        let subs = SubstitutionSet::with_defaults("croissant", "A pastry lib");
        assert_eq!(
            rewrite_manifest(content, &Placeholders::TEMPLATE, &subs),
            r#"{"name":"croissant","author":"Adel Rodríguez <hey@adel.do>"}"#
        );
    }

    #[test]
    fn test_rewrite_is_sequential() {
        // A name that spells the GitHub placeholder is itself rewritten by
        // the later GitHub user pass.
        let subs = SubstitutionSet::new("adelrodriguez-lib", "a", "octocat", "d");
        let rewritten = rewrite_manifest(r#"{"name":"pastry"}"#, &Placeholders::TEMPLATE, &subs);
        assert_eq!(rewritten, r#"{"name":"octocat-lib"}"#);
    }

    #[test]
    fn test_rewrite_skips_empty_placeholder() {
        let placeholders = Placeholders {
            name: "",
            ..Placeholders::TEMPLATE
        };
        let content = r#"{"name":"x"}"#;
        assert_eq!(rewrite_manifest(content, &placeholders, &subs()), content);
    }

    #[test]
    fn test_render_readme() {
        let readme = render_readme("croissant", "A pastry lib");
        assert!(readme.contains(r#"<h1 align="center">croissant</h1>"#));
        assert!(readme.contains("<strong>A pastry lib</strong>"));
        assert!(readme.contains("Made with [🥐 `pastry`](https://github.com/adelrodriguez/pastry)"));
    }

    #[test]
    fn test_render_readme_does_not_escape() {
        let readme = render_readme("<b>&</b>", "*bold*");
        assert!(readme.contains("<h1 align=\"center\"><b>&</b></h1>"));
        assert!(readme.contains("<strong>*bold*</strong>"));
    }
}
