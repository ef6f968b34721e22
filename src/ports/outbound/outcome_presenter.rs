use crate::license_audit::domain::RepositoryOutcome;
use crate::shared::Result;

/// OutcomePresenter port for per-repository results
///
/// Outcomes are presented one at a time, in repository listing order.
pub trait OutcomePresenter {
    /// Presents the outcome for a single repository
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, outcome: &RepositoryOutcome) -> Result<()>;
}
