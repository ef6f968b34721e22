use crate::license_audit::domain::{FileCommit, LicenseStatus, Repository};
use crate::shared::Result;
use async_trait::async_trait;

/// RepositoryHost port for the code-hosting platform
///
/// This port abstracts the three platform calls the audit needs, so the
/// use case can be exercised against fakes.
///
/// # Async Support
/// Implementations must be `Send + Sync`; the use case may keep several
/// repositories in flight at once.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists every repository visible to the authenticated identity
    ///
    /// # Errors
    /// Returns an error if the listing call fails (transport error or
    /// non-2xx status). The audit treats this as fatal.
    async fn list_repositories(&self) -> Result<Vec<Repository>>;

    /// Looks up the license the platform detected for a repository
    ///
    /// Never fails: lookup problems are reported as `LicenseStatus::Unknown`.
    async fn license_status(&self, repository: &Repository) -> LicenseStatus;

    /// Creates (or updates) a single file on the commit's branch
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status.
    async fn create_file(&self, repository: &Repository, commit: &FileCommit) -> Result<()>;
}
