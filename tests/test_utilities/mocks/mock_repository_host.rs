use async_trait::async_trait;
use license_auditor::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded platform call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    List,
    License(String),
    Create(String, FileCommit),
}

/// Mock RepositoryHost backed by in-memory fixtures
///
/// Cloning shares the call log, so a test can keep a handle after moving
/// the mock into a use case.
#[derive(Default, Clone)]
pub struct MockRepositoryHost {
    repositories: Vec<Repository>,
    listing_error: Option<String>,
    statuses: HashMap<String, LicenseStatus>,
    upload_errors: HashMap<String, String>,
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl MockRepositoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(
        mut self,
        owner: &str,
        name: &str,
        default_branch: Option<&str>,
    ) -> Self {
        self.repositories.push(Repository::new(
            format!("{}/{}", owner, name),
            name.to_string(),
            owner.to_string(),
            default_branch.map(str::to_string),
        ));
        self
    }

    /// 200 with the given license key
    pub fn with_license(mut self, full_name: &str, key: &str) -> Self {
        self.statuses
            .insert(full_name.to_string(), LicenseStatus::present(key));
        self
    }

    /// Lookup failure (transport error or unexpected status)
    pub fn with_lookup_failure(mut self, full_name: &str, reason: &str) -> Self {
        self.statuses
            .insert(full_name.to_string(), LicenseStatus::unknown(reason));
        self
    }

    pub fn with_upload_error(mut self, full_name: &str, error: &str) -> Self {
        self.upload_errors
            .insert(full_name.to_string(), error.to_string());
        self
    }

    pub fn with_listing_error(mut self, error: &str) -> Self {
        self.listing_error = Some(error.to_string());
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<(String, FileCommit)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Create(full_name, commit) => Some((full_name, commit)),
                _ => None,
            })
            .collect()
    }

    pub fn uploads_for(&self, full_name: &str) -> usize {
        self.uploads()
            .iter()
            .filter(|(name, _)| name == full_name)
            .count()
    }
}

#[async_trait]
impl RepositoryHost for MockRepositoryHost {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        self.calls.lock().unwrap().push(HostCall::List);
        if let Some(error) = &self.listing_error {
            anyhow::bail!("{}", error);
        }
        Ok(self.repositories.clone())
    }

    async fn license_status(&self, repository: &Repository) -> LicenseStatus {
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::License(repository.full_name().to_string()));
        // Repositories without a fixture answer 404
        self.statuses
            .get(repository.full_name())
            .cloned()
            .unwrap_or(LicenseStatus::Absent)
    }

    async fn create_file(&self, repository: &Repository, commit: &FileCommit) -> Result<()> {
        self.calls.lock().unwrap().push(HostCall::Create(
            repository.full_name().to_string(),
            commit.clone(),
        ));
        if let Some(error) = self.upload_errors.get(repository.full_name()) {
            anyhow::bail!("{}", error);
        }
        Ok(())
    }
}
