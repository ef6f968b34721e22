use crate::license_audit::domain::Repository;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// RepositoryFilter - excludes repositories from an audit by name
///
/// Patterns support `*` as a wildcard for zero or more characters. A
/// pattern containing `/` is matched against the full `owner/name`; any
/// other pattern is matched against the short name. Matching is
/// case-sensitive.
#[derive(Debug, Default)]
pub struct RepositoryFilter {
    patterns: Vec<ExcludePattern>,
}

impl RepositoryFilter {
    /// Creates a filter from raw pattern strings (e.g. "archive-*", "octocat/dotfiles")
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, too long, bad characters, only wildcards)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Checks whether a repository matches any exclusion pattern
    pub fn excludes(&self, repository: &Repository) -> bool {
        // Every pattern is evaluated so unmatched-pattern tracking stays accurate.
        self.patterns
            .iter()
            .fold(false, |excluded, pattern| pattern.matches(repository) || excluded)
    }

    /// Patterns that have not matched any repository checked so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    against_full_name: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        Ok(Self {
            matcher: compile_pattern(&pattern),
            against_full_name: pattern.contains('/'),
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, repository: &Repository) -> bool {
        let subject = if self.against_full_name {
            repository.full_name()
        } else {
            repository.name()
        };

        let is_match = self.matcher.matches(subject);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "name"
    Exact(String),
    /// "*-suffix"
    EndsWith(String),
    /// "prefix-*"
    StartsWith(String),
    /// "*middle*"
    Contains(String),
    /// "pre*mid*suf": anchored at both ends unless the pattern starts/ends with '*'
    Glob {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, subject: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => subject == s,
            PatternMatcher::EndsWith(suffix) => subject.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => subject.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => subject.contains(middle.as_str()),
            PatternMatcher::Glob {
                parts,
                anchored_start,
                anchored_end,
            } => glob_matches(subject, parts, *anchored_start, *anchored_end),
        }
    }
}

fn glob_matches(subject: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = subject;

    for (i, part) in parts.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i + 1 == parts.len();

        if is_first && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(stripped) => rest = stripped,
                None => return false,
            }
        } else if is_last && anchored_end {
            return rest.ends_with(part.as_str());
        } else {
            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
    }

    !anchored_end || rest.is_empty()
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, slashes, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    if pattern.matches('/').count() > 1 {
        anyhow::bail!(
            "Exclusion pattern '{}' must be a repository name or owner/name",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '/' || c == '*'
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();
    let starts = pattern.starts_with('*');
    let ends = pattern.ends_with('*');

    match (wildcard_count, starts, ends) {
        (0, _, _) => PatternMatcher::Exact(pattern.to_string()),
        (1, true, false) => PatternMatcher::EndsWith(pattern[1..].to_string()),
        (1, false, true) => PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string()),
        (2, true, true) => PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string()),
        _ => PatternMatcher::Glob {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            anchored_start: !starts,
            anchored_end: !ends,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(full_name: &str) -> Repository {
        let (owner, name) = full_name.split_once('/').unwrap();
        Repository::new(
            full_name.to_string(),
            name.to_string(),
            owner.to_string(),
            Some("main".to_string()),
        )
    }

    fn filter(patterns: &[&str]) -> RepositoryFilter {
        RepositoryFilter::new(patterns.iter().map(|p| p.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let filter = filter(&["dotfiles"]);
        assert!(filter.excludes(&repo("octocat/dotfiles")));
        assert!(!filter.excludes(&repo("octocat/dotfiles-old")));
        assert!(!filter.excludes(&repo("octocat/my-dotfiles")));
    }

    #[test]
    fn test_ends_with_wildcard() {
        let filter = filter(&["*-archive"]);
        assert!(filter.excludes(&repo("octocat/blog-archive")));
        assert!(!filter.excludes(&repo("octocat/archive")));
        assert!(!filter.excludes(&repo("octocat/blog-archive-2")));
    }

    #[test]
    fn test_starts_with_wildcard() {
        let filter = filter(&["fork-*"]);
        assert!(filter.excludes(&repo("octocat/fork-linux")));
        assert!(!filter.excludes(&repo("octocat/my-fork-linux")));
    }

    #[test]
    fn test_contains_wildcard() {
        let filter = filter(&["*test*"]);
        assert!(filter.excludes(&repo("octocat/my-test-repo")));
        assert!(filter.excludes(&repo("octocat/test")));
        assert!(!filter.excludes(&repo("octocat/tset")));
    }

    #[test]
    fn test_glob_is_anchored() {
        let filter = filter(&["go*-lib"]);
        assert!(filter.excludes(&repo("octocat/go-http-lib")));
        assert!(filter.excludes(&repo("octocat/go-lib")));
        assert!(!filter.excludes(&repo("octocat/ergo-lib")));
        assert!(!filter.excludes(&repo("octocat/go-lib-extra")));
    }

    #[test]
    fn test_full_name_pattern() {
        let filter = filter(&["octo-org/*"]);
        assert!(filter.excludes(&repo("octo-org/website")));
        assert!(!filter.excludes(&repo("octocat/website")));
    }

    #[test]
    fn test_short_name_pattern_ignores_owner() {
        let filter = filter(&["octocat*"]);
        assert!(!filter.excludes(&repo("octocat/website")));
    }

    #[test]
    fn test_unmatched_patterns() {
        let filter = filter(&["dotfiles", "never-*"]);
        filter.excludes(&repo("octocat/dotfiles"));
        filter.excludes(&repo("octocat/website"));
        assert_eq!(filter.unmatched_patterns(), vec!["never-*".to_string()]);
    }

    #[test]
    fn test_all_patterns_are_tracked_on_overlap() {
        let filter = filter(&["web*", "*site"]);
        assert!(filter.excludes(&repo("octocat/website")));
        assert!(filter.unmatched_patterns().is_empty());
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = RepositoryFilter::default();
        assert!(filter.is_empty());
        assert!(!filter.excludes(&repo("octocat/website")));
    }

    #[test]
    fn test_pattern_validation_empty() {
        let result = RepositoryFilter::new(vec![String::new()]);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_pattern_validation_too_long() {
        let result = RepositoryFilter::new(vec!["a".repeat(300)]);
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_pattern_validation_invalid_chars() {
        let result = RepositoryFilter::new(vec!["repo?".to_string()]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid character '?'"));
    }

    #[test]
    fn test_pattern_validation_only_wildcards() {
        let result = RepositoryFilter::new(vec!["**".to_string()]);
        assert!(result.unwrap_err().to_string().contains("only wildcards"));
    }

    #[test]
    fn test_pattern_validation_too_many_slashes() {
        let result = RepositoryFilter::new(vec!["a/b/c".to_string()]);
        assert!(result.unwrap_err().to_string().contains("owner/name"));
    }

    #[test]
    fn test_too_many_patterns() {
        let patterns = (0..65).map(|i| format!("repo-{}", i)).collect();
        let result = RepositoryFilter::new(patterns);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Too many exclusion patterns"));
    }
}
