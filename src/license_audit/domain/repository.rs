/// Branch used when the platform does not report a default branch
pub const FALLBACK_BRANCH: &str = "main";

/// Repository entity as returned by the repository listing
///
/// Only the attributes the audit consumes are kept. Instances are never
/// mutated after listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    full_name: String,
    name: String,
    owner_login: String,
    default_branch: Option<String>,
}

impl Repository {
    pub fn new(
        full_name: String,
        name: String,
        owner_login: String,
        default_branch: Option<String>,
    ) -> Self {
        Self {
            full_name,
            name,
            owner_login,
            default_branch,
        }
    }

    /// `owner/name`
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Short repository name, used in console output
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_login(&self) -> &str {
        &self.owner_login
    }

    pub fn default_branch(&self) -> Option<&str> {
        self.default_branch.as_deref()
    }

    /// Branch the license commit targets: the default branch, or `main`
    /// when the record carries none
    pub fn target_branch(&self) -> &str {
        match self.default_branch.as_deref() {
            Some(branch) if !branch.is_empty() => branch,
            _ => FALLBACK_BRANCH,
        }
    }
}
