use crate::config::Credentials;
use crate::license_audit::domain::{FileCommit, LicenseStatus, Repository};
use crate::ports::outbound::RepositoryHost;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public GitHub REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size for repository listing (GitHub maximum)
const PAGE_SIZE: u32 = 100;

/// Upper bound on listing pages, to stop a misbehaving server from looping forever
const MAX_PAGES: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GitHubRepositoryRecord {
    full_name: String,
    name: String,
    owner: GitHubOwner,
    #[serde(default)]
    default_branch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubLicenseResponse {
    #[serde(default)]
    license: Option<GitHubLicense>,
}

#[derive(Debug, Deserialize)]
struct GitHubLicense {
    #[serde(default)]
    key: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateFileRequest<'a> {
    message: &'a str,
    content: &'a str,
    branch: &'a str,
}

impl From<GitHubRepositoryRecord> for Repository {
    fn from(record: GitHubRepositoryRecord) -> Self {
        Repository::new(
            record.full_name,
            record.name,
            record.owner.login,
            record.default_branch,
        )
    }
}

/// GitHubRepositoryHost adapter for the GitHub REST API (v3)
///
/// Implements the RepositoryHost port with an async reqwest client. Every
/// request carries the token, the v3 media type, and a user agent.
pub struct GitHubRepositoryHost {
    client: reqwest::Client,
    api_url: String,
    max_pages: u32,
}

impl GitHubRepositoryHost {
    /// Creates a client for `api_url` (e.g. `https://api.github.com`, or a
    /// GitHub Enterprise `https://host/api/v3`)
    pub fn new(credentials: &Credentials, api_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("license-auditor/{}", version);

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .default_headers(Self::default_headers(credentials)?)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            max_pages: MAX_PAGES,
        })
    }

    #[cfg(test)]
    fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn default_headers(credentials: &Credentials) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&format!("token {}", credentials.token()))
            .context("GITHUB_TOKEN contains characters that are not valid in an HTTP header")?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        Ok(headers)
    }

    fn repos_page_url(&self, page: u32) -> String {
        format!(
            "{}/user/repos?per_page={}&page={}",
            self.api_url, PAGE_SIZE, page
        )
    }

    /// `{api}/repos/{owner}/{name}` with each segment percent-encoded
    fn repository_url(&self, repository: &Repository) -> String {
        let (owner, name) = repository
            .full_name()
            .split_once('/')
            .unwrap_or((repository.owner_login(), repository.name()));

        format!(
            "{}/repos/{}/{}",
            self.api_url,
            urlencoding::encode(owner),
            urlencoding::encode(name)
        )
    }

    fn license_url(&self, repository: &Repository) -> String {
        format!("{}/license", self.repository_url(repository))
    }

    fn contents_url(&self, repository: &Repository, path: &str) -> String {
        format!(
            "{}/contents/{}",
            self.repository_url(repository),
            urlencoding::encode(path)
        )
    }

    async fn fetch_repos_page(&self, page: u32) -> Result<Vec<GitHubRepositoryRecord>> {
        let response = self.client.get(self.repos_page_url(page)).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GitHub API returned status code {}", status);
        }

        let records = response
            .json()
            .await
            .context("Failed to parse repository listing")?;
        Ok(records)
    }
}

/// Maps a license lookup response onto the three-valued status
fn classify_license_response(
    status: StatusCode,
    body: Option<GitHubLicenseResponse>,
) -> LicenseStatus {
    match status {
        StatusCode::OK => match body.and_then(|b| b.license).and_then(|l| l.key) {
            Some(key) => LicenseStatus::present(key),
            None => LicenseStatus::unknown("license response did not include a license key"),
        },
        StatusCode::NOT_FOUND => LicenseStatus::Absent,
        other => LicenseStatus::unknown(format!("GitHub API returned status code {}", other)),
    }
}

#[async_trait]
impl RepositoryHost for GitHubRepositoryHost {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let mut repositories = Vec::new();

        for page in 1..=self.max_pages {
            let records = self.fetch_repos_page(page).await?;
            let is_last_page = records.len() < PAGE_SIZE as usize;

            repositories.extend(records.into_iter().map(Repository::from));

            if is_last_page {
                return Ok(repositories);
            }
        }

        // Every page was full: the listing would be silently truncated
        anyhow::bail!(
            "repository listing did not end within {} pages of {} repositories",
            self.max_pages,
            PAGE_SIZE
        )
    }

    async fn license_status(&self, repository: &Repository) -> LicenseStatus {
        let response = match self.client.get(self.license_url(repository)).send().await {
            Ok(response) => response,
            Err(e) => return LicenseStatus::unknown(e.to_string()),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return classify_license_response(status, None);
        }

        match response.json::<GitHubLicenseResponse>().await {
            Ok(body) => classify_license_response(status, Some(body)),
            Err(e) => LicenseStatus::unknown(format!("Failed to parse license response: {}", e)),
        }
    }

    async fn create_file(&self, repository: &Repository, commit: &FileCommit) -> Result<()> {
        let body = CreateFileRequest {
            message: &commit.message,
            content: &commit.content,
            branch: &commit.branch,
        };

        let response = self
            .client
            .put(self.contents_url(repository, &commit.path))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API returned status code {}: {}", status, details.trim());
        }

        Ok(())
    }
}
