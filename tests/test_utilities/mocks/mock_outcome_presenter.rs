use license_auditor::prelude::*;

/// Mock OutcomePresenter that records every printed line
#[derive(Default, Clone)]
pub struct MockOutcomePresenter {
    pub lines: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockOutcomePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl OutcomePresenter for MockOutcomePresenter {
    fn present(&self, outcome: &RepositoryOutcome) -> Result<()> {
        self.lines.lock().unwrap().extend(outcome.lines());
        Ok(())
    }
}
