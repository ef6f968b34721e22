pub mod license_file;
pub mod license_status;
pub mod outcome;
pub mod repository;

pub use license_file::{FileCommit, LicenseFile};
pub use license_status::LicenseStatus;
pub use outcome::{OutcomeKind, RepositoryOutcome};
pub use repository::Repository;
