use crate::license_audit::domain::{OutcomeKind, RepositoryOutcome};

/// AuditResponse - outcomes of an audit run, in repository listing order
#[derive(Debug, Clone, Default)]
pub struct AuditResponse {
    outcomes: Vec<RepositoryOutcome>,
}

impl AuditResponse {
    pub fn new(outcomes: Vec<RepositoryOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[RepositoryOutcome] {
        &self.outcomes
    }

    pub fn upload_attempts(&self) -> usize {
        self.outcomes.iter().filter(|o| o.attempted_upload()).count()
    }

    pub fn added_count(&self) -> usize {
        self.count(|kind| matches!(kind, OutcomeKind::Added))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|kind| {
            matches!(
                kind,
                OutcomeKind::Failed { .. } | OutcomeKind::NotUploaded { .. }
            )
        })
    }

    pub fn already_licensed_count(&self) -> usize {
        self.count(|kind| matches!(kind, OutcomeKind::AlreadyLicensed))
    }

    fn count(&self, predicate: impl Fn(&OutcomeKind) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o.kind())).count()
    }
}
