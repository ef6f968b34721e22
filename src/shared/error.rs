use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-repository upload failures do not change the exit code; only errors
/// that abort the whole run do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The run completed (individual repositories may still have failed)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing credential, listing failure, bad config)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors that abort a license audit run.
///
/// Per-repository problems (status lookups, uploads) never surface as
/// `AuditError`; they are folded into a `RepositoryOutcome` instead.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Error: {variable} environment variable is not set\n\n💡 Hint: Please set your GitHub personal access token as an environment variable")]
    MissingCredential { variable: String },

    #[error("Error: failed to list repositories: {details}\n\n💡 Hint: Check that the token is valid and has the `repo` scope")]
    RepositoryListing { details: String },

    #[error("Invalid config: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
