use clap::Parser;

/// Ensure every repository you own carries an MIT license
///
/// Reads a GitHub token from GITHUB_TOKEN, lists your repositories, and
/// commits a generated MIT LICENSE to each one that does not already have one.
#[derive(Parser, Debug)]
#[command(name = "license-auditor")]
#[command(version)]
#[command(about = "Add an MIT LICENSE to every GitHub repository that lacks one", long_about = None)]
pub struct Args {
    /// GitHub API base URL (defaults to https://api.github.com)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (defaults to ./license-auditor.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Exclude repositories matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "dotfiles" -e "octo-org/*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Number of repositories processed in parallel (1-16)
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub concurrency: Option<u8>,

    /// Check license status only; never commit anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["license-auditor"]).unwrap();
        assert!(args.api_url.is_none());
        assert!(args.config.is_none());
        assert!(args.exclude.is_empty());
        assert!(args.concurrency.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "license-auditor",
            "--api-url",
            "https://github.example.com/api/v3",
            "-c",
            "audit.yml",
            "-e",
            "dotfiles",
            "--exclude",
            "octo-org/*",
            "-j",
            "4",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(
            args.api_url.as_deref(),
            Some("https://github.example.com/api/v3")
        );
        assert_eq!(args.config.as_deref(), Some("audit.yml"));
        assert_eq!(args.exclude, vec!["dotfiles", "octo-org/*"]);
        assert_eq!(args.concurrency, Some(4));
        assert!(args.dry_run);
    }

    #[test]
    fn test_concurrency_out_of_range() {
        assert!(Args::try_parse_from(["license-auditor", "-j", "0"]).is_err());
        assert!(Args::try_parse_from(["license-auditor", "-j", "17"]).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(Args::try_parse_from(["license-auditor", "--invalid-option"]).is_err());
    }
}
