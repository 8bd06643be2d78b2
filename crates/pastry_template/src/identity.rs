//! Template identity: the placeholder strings shipped in the template and
//! the values that replace them.

/// Project name shipped in the template.
pub const TEMPLATE_NAME: &str = "pastry";
/// Author shipped in the template.
pub const TEMPLATE_AUTHOR: &str = "Adel Rodríguez <hey@adel.do>";
/// GitHub user shipped in the template.
pub const TEMPLATE_GITHUB_USER: &str = "adelrodriguez";
/// Description shipped in the template.
pub const TEMPLATE_DESCRIPTION: &str = "A simple template to build libraries with Bun";

/// The literal strings that identify an un-substituted template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub name: &'static str,
    pub author: &'static str,
    pub github_user: &'static str,
    pub description: &'static str,
}

impl Placeholders {
    /// Placeholders of the Pastry template.
    pub const TEMPLATE: Self = Self {
        name: TEMPLATE_NAME,
        author: TEMPLATE_AUTHOR,
        github_user: TEMPLATE_GITHUB_USER,
        description: TEMPLATE_DESCRIPTION,
    };

    /// Placeholder/value pairs in substitution order.
    pub fn pairs<'a>(&self, substitutions: &'a SubstitutionSet) -> [(&'static str, &'a str); 4] {
        [
            (self.name, substitutions.name.as_str()),
            (self.author, substitutions.author.as_str()),
            (self.github_user, substitutions.github_user.as_str()),
            (self.description, substitutions.description.as_str()),
        ]
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::TEMPLATE
    }
}

/// Values collected from the user for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionSet {
    pub name: String,
    pub author: String,
    pub github_user: String,
    pub description: String,
}

impl SubstitutionSet {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        github_user: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            github_user: github_user.into(),
            description: description.into(),
        }
    }

    /// Name and description only; author and GitHub user keep the
    /// template's values.
    pub fn with_defaults(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, TEMPLATE_AUTHOR, TEMPLATE_GITHUB_USER, description)
    }
}
