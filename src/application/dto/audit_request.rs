use crate::shared::error::AuditError;
use crate::shared::Result;
use chrono::Datelike;

/// Upper bound on repositories processed in parallel, to stay well within
/// the platform's secondary rate limits
pub const MAX_CONCURRENCY: usize = 16;

/// AuditRequest - Internal request DTO for the license audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Year written into the copyright line
    pub copyright_year: i32,
    /// Query license status but never upload
    pub dry_run: bool,
    /// Number of repositories processed at once (1 = strictly sequential)
    pub concurrency: usize,
    /// Patterns for excluding repositories from the audit
    pub exclude_patterns: Vec<String>,
}

impl AuditRequest {
    pub fn builder() -> AuditRequestBuilder {
        AuditRequestBuilder::default()
    }
}

/// Builder for `AuditRequest`
///
/// The copyright year defaults to the current local year and concurrency
/// defaults to 1.
#[derive(Debug, Default)]
pub struct AuditRequestBuilder {
    copyright_year: Option<i32>,
    dry_run: bool,
    concurrency: Option<usize>,
    exclude_patterns: Vec<String>,
}

impl AuditRequestBuilder {
    pub fn copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn build(self) -> Result<AuditRequest> {
        let concurrency = self.concurrency.unwrap_or(1);
        if concurrency == 0 || concurrency > MAX_CONCURRENCY {
            return Err(AuditError::Validation {
                message: format!(
                    "concurrency must be between 1 and {} (got {})",
                    MAX_CONCURRENCY, concurrency
                ),
            }
            .into());
        }

        Ok(AuditRequest {
            copyright_year: self
                .copyright_year
                .unwrap_or_else(|| chrono::Local::now().year()),
            dry_run: self.dry_run,
            concurrency,
            exclude_patterns: self.exclude_patterns,
        })
    }
}
