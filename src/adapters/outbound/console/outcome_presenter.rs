use crate::license_audit::domain::RepositoryOutcome;
use crate::ports::outbound::OutcomePresenter;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutOutcomePresenter adapter writing outcome lines to stdout
pub struct StdoutOutcomePresenter;

impl StdoutOutcomePresenter {
    pub fn new() -> Self {
        Self
    }

    fn write_to(writer: &mut impl Write, outcome: &RepositoryOutcome) -> io::Result<()> {
        for line in outcome.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl Default for StdoutOutcomePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomePresenter for StdoutOutcomePresenter {
    fn present(&self, outcome: &RepositoryOutcome) -> Result<()> {
        Self::write_to(&mut io::stdout().lock(), outcome)
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_audit::domain::OutcomeKind;

    #[test]
    fn test_write_added_outcome() {
        let mut buffer = Vec::new();
        let outcome = RepositoryOutcome::new("hello-world", OutcomeKind::Added);
        StdoutOutcomePresenter::write_to(&mut buffer, &outcome).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Adding MIT license to hello-world...\nSuccessfully added MIT license to hello-world\n"
        );
    }

    #[test]
    fn test_write_already_licensed_outcome() {
        let mut buffer = Vec::new();
        let outcome = RepositoryOutcome::new("A", OutcomeKind::AlreadyLicensed);
        StdoutOutcomePresenter::write_to(&mut buffer, &outcome).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "A already has an MIT license\n"
        );
    }

    #[test]
    fn test_present_to_stdout() {
        let presenter = StdoutOutcomePresenter::default();
        let outcome = RepositoryOutcome::new("A", OutcomeKind::WouldAdd);
        assert!(presenter.present(&outcome).is_ok());
    }
}
