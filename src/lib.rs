//! license-auditor - make sure every GitHub repository you own carries an MIT license
//!
//! Lists the repositories of the authenticated identity, asks GitHub which
//! license each one carries, and commits a generated MIT `LICENSE` file to
//! those without one. Organized along hexagonal lines.
//!
//! # Architecture
//!
//! - **Domain Layer** (`license_audit`): repositories, license status, the
//!   generated license file, and the licensing policy
//! - **Application Layer** (`application`): the audit use case and its DTOs
//! - **Ports** (`ports`): interfaces to the hosting platform and the console
//! - **Adapters** (`adapters`): GitHub REST client and console output
//! - **Shared** (`shared`): error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use license_auditor::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let credentials = Credentials::from_env()?;
//! let host = GitHubRepositoryHost::new(&credentials, DEFAULT_API_URL)?;
//!
//! let use_case = AuditLicensesUseCase::new(
//!     host,
//!     StderrProgressReporter::new(),
//!     StdoutOutcomePresenter::new(),
//! );
//!
//! let request = AuditRequest::builder().dry_run(true).build()?;
//! let response = use_case.execute(request).await?;
//! println!("Audited {} repositories", response.outcomes().len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutOutcomePresenter};
    pub use crate::adapters::outbound::network::{GitHubRepositoryHost, DEFAULT_API_URL};
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::use_cases::AuditLicensesUseCase;
    pub use crate::config::Credentials;
    pub use crate::license_audit::domain::{
        FileCommit, LicenseFile, LicenseStatus, OutcomeKind, Repository, RepositoryOutcome,
    };
    pub use crate::license_audit::policies::{LicenseDecision, LicensePolicy};
    pub use crate::license_audit::services::RepositoryFilter;
    pub use crate::ports::outbound::{OutcomePresenter, ProgressReporter, RepositoryHost};
    pub use crate::shared::Result;
}
