/// Mock implementations for testing
mod mock_outcome_presenter;
mod mock_progress_reporter;
mod mock_repository_host;

pub use mock_outcome_presenter::MockOutcomePresenter;
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_repository_host::{HostCall, MockRepositoryHost};
