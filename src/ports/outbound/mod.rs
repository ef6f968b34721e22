/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the hosting platform, the console).
pub mod outcome_presenter;
pub mod progress_reporter;
pub mod repository_host;

pub use outcome_presenter::OutcomePresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_host::RepositoryHost;
