mod cli;

use cli::Args;
use license_auditor::adapters::outbound::console::{
    StderrProgressReporter, StdoutOutcomePresenter,
};
use license_auditor::adapters::outbound::network::{GitHubRepositoryHost, DEFAULT_API_URL};
use license_auditor::application::dto::AuditRequest;
use license_auditor::application::use_cases::AuditLicensesUseCase;
use license_auditor::config::{self, ConfigFile, Credentials};
use license_auditor::shared::error::ExitCode;
use license_auditor::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    // Read before any adapter exists: a missing token must not cause network I/O
    let credentials = Credentials::from_env()?;

    let api_url = args
        .api_url
        .clone()
        .or(config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let repository_host = GitHubRepositoryHost::new(&credentials, &api_url)?;
    let progress_reporter = StderrProgressReporter::new();
    let outcome_presenter = StdoutOutcomePresenter::new();

    let use_case =
        AuditLicensesUseCase::new(repository_host, progress_reporter, outcome_presenter);

    let request = build_request(&args, config)?;
    use_case.execute(request).await?;

    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path)),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// CLI values take precedence over config file values
fn build_request(args: &Args, config: ConfigFile) -> Result<AuditRequest> {
    let mut exclude_patterns = config.exclude_repositories.unwrap_or_default();
    exclude_patterns.extend(args.exclude.iter().cloned());

    let concurrency = args
        .concurrency
        .map(usize::from)
        .or(config.concurrency)
        .unwrap_or(1);

    AuditRequest::builder()
        .dry_run(args.dry_run || config.dry_run.unwrap_or(false))
        .concurrency(concurrency)
        .exclude_patterns(exclude_patterns)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["license-auditor"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request(&args(&[]), ConfigFile::default()).unwrap();
        assert_eq!(request.concurrency, 1);
        assert!(!request.dry_run);
        assert!(request.exclude_patterns.is_empty());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            concurrency: Some(8),
            exclude_repositories: Some(vec!["dotfiles".to_string()]),
            ..Default::default()
        };
        let request = build_request(&args(&["-j", "2", "-e", "archive-*"]), config).unwrap();

        assert_eq!(request.concurrency, 2);
        assert_eq!(request.exclude_patterns, vec!["dotfiles", "archive-*"]);
    }

    #[test]
    fn test_config_dry_run() {
        let config = ConfigFile {
            dry_run: Some(true),
            ..Default::default()
        };
        let request = build_request(&args(&[]), config).unwrap();
        assert!(request.dry_run);
    }

    #[test]
    fn test_load_config_explicit_missing_file() {
        let result = load_config(&args(&["--config", "/nonexistent/license-auditor.yml"]));
        assert!(result.is_err());
    }
}
