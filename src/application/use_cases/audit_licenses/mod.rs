use crate::application::dto::{AuditRequest, AuditResponse};
use crate::license_audit::domain::{
    LicenseFile, LicenseStatus, OutcomeKind, Repository, RepositoryOutcome,
};
use crate::license_audit::policies::{LicenseDecision, LicensePolicy};
use crate::license_audit::services::RepositoryFilter;
use crate::ports::outbound::{OutcomePresenter, ProgressReporter, RepositoryHost};
use crate::shared::error::AuditError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// AuditLicensesUseCase - ensures every listed repository carries an MIT license
///
/// For each repository: look up the license status, skip if MIT is present,
/// otherwise commit a generated `LICENSE`. Only a failed repository listing
/// aborts the run; lookup errors fail open and upload errors are reported per
/// repository.
///
/// # Type Parameters
/// * `H` - RepositoryHost implementation
/// * `PR` - ProgressReporter implementation
/// * `OP` - OutcomePresenter implementation
pub struct AuditLicensesUseCase<H, PR, OP> {
    repository_host: H,
    progress_reporter: PR,
    outcome_presenter: OP,
}

impl<H, PR, OP> AuditLicensesUseCase<H, PR, OP>
where
    H: RepositoryHost,
    PR: ProgressReporter,
    OP: OutcomePresenter,
{
    /// Creates a new AuditLicensesUseCase with injected dependencies
    pub fn new(repository_host: H, progress_reporter: PR, outcome_presenter: OP) -> Self {
        Self {
            repository_host,
            progress_reporter,
            outcome_presenter,
        }
    }

    /// Executes the audit
    ///
    /// # Errors
    /// Returns an error if an exclusion pattern is invalid, the repository
    /// listing fails, or an outcome cannot be presented.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Validate exclusion patterns before touching the network
        let filter = RepositoryFilter::new(request.exclude_patterns.clone())?;

        // Step 2: List repositories (fatal on failure)
        let repositories = self.list_repositories().await?;

        // Step 3: Decide and patch each repository
        let outcomes = self
            .process_repositories(&repositories, &filter, &request)
            .await?;

        // Step 4: Diagnostics
        self.warn_unmatched_patterns(&filter);
        if request.dry_run {
            self.progress_reporter
                .report_completion("🧪 Dry run: no files were committed");
        }

        Ok(AuditResponse::new(outcomes))
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        self.progress_reporter
            .report_activity("🔍 Fetching repositories...");

        let repositories = self
            .repository_host
            .list_repositories()
            .await
            .map_err(|e| AuditError::RepositoryListing {
                details: format!("{:#}", e),
            })?;

        self.progress_reporter.report(&format!(
            "✅ Found {} repository(ies)",
            repositories.len()
        ));

        Ok(repositories)
    }

    /// Processes repositories with at most `request.concurrency` in flight
    ///
    /// Outcomes are presented in listing order regardless of completion order.
    async fn process_repositories(
        &self,
        repositories: &[Repository],
        filter: &RepositoryFilter,
        request: &AuditRequest,
    ) -> Result<Vec<RepositoryOutcome>> {
        let mut pending = stream::iter(repositories)
            .map(move |repository| self.process_repository(repository, filter, request))
            .buffered(request.concurrency.max(1));

        let mut outcomes = Vec::with_capacity(repositories.len());
        while let Some(outcome) = pending.next().await {
            self.outcome_presenter.present(&outcome)?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    async fn process_repository(
        &self,
        repository: &Repository,
        filter: &RepositoryFilter,
        request: &AuditRequest,
    ) -> RepositoryOutcome {
        if filter.excludes(repository) {
            return RepositoryOutcome::new(repository.name(), OutcomeKind::Excluded);
        }

        let status = self.repository_host.license_status(repository).await;
        if let LicenseStatus::Unknown { reason } = &status {
            self.progress_reporter.report_error(&format!(
                "⚠️  Could not determine the license of {}: {}",
                repository.full_name(),
                reason
            ));
        }

        let kind = match LicensePolicy::decide(&status) {
            LicenseDecision::Skip => OutcomeKind::AlreadyLicensed,
            LicenseDecision::AddLicense if request.dry_run => OutcomeKind::WouldAdd,
            LicenseDecision::AddLicense => {
                self.upload_license(repository, request.copyright_year)
                    .await
            }
        };

        RepositoryOutcome::new(repository.name(), kind)
    }

    async fn upload_license(&self, repository: &Repository, year: i32) -> OutcomeKind {
        let license = match LicenseFile::mit_for(repository, year) {
            Ok(license) => license,
            Err(e) => {
                return OutcomeKind::NotUploaded {
                    reason: e.to_string(),
                };
            }
        };

        let commit = license.commit_for(repository);
        match self.repository_host.create_file(repository, &commit).await {
            Ok(()) => OutcomeKind::Added,
            Err(e) => OutcomeKind::Failed {
                reason: format!("{:#}", e),
            },
        }
    }

    fn warn_unmatched_patterns(&self, filter: &RepositoryFilter) {
        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any repository.",
                pattern
            ));
        }
    }
}
