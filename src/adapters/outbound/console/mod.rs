/// Console adapters for progress and outcome output
mod outcome_presenter;
mod progress_reporter;

pub use outcome_presenter::StdoutOutcomePresenter;
pub use progress_reporter::StderrProgressReporter;
