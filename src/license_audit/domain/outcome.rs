/// What happened to a single repository during an audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// An MIT license was already present; nothing was uploaded
    AlreadyLicensed,
    /// A license file was committed
    Added,
    /// The upload was attempted and failed
    Failed { reason: String },
    /// The license file could not be generated; nothing was uploaded
    NotUploaded { reason: String },
    /// Dry run: a license would have been committed
    WouldAdd,
    /// Matched an exclusion pattern; not inspected
    Excluded,
}

/// Per-repository outcome, reported in listing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOutcome {
    repository_name: String,
    kind: OutcomeKind,
}

impl RepositoryOutcome {
    pub fn new(repository_name: impl Into<String>, kind: OutcomeKind) -> Self {
        Self {
            repository_name: repository_name.into(),
            kind,
        }
    }

    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    pub fn kind(&self) -> &OutcomeKind {
        &self.kind
    }

    /// True when an upload was issued for this repository
    pub fn attempted_upload(&self) -> bool {
        matches!(self.kind, OutcomeKind::Added | OutcomeKind::Failed { .. })
    }

    /// Console lines for this outcome, in the order they are printed
    pub fn lines(&self) -> Vec<String> {
        let name = &self.repository_name;
        match &self.kind {
            OutcomeKind::AlreadyLicensed => vec![format!("{} already has an MIT license", name)],
            OutcomeKind::Added => vec![
                format!("Adding MIT license to {}...", name),
                format!("Successfully added MIT license to {}", name),
            ],
            OutcomeKind::Failed { reason } => vec![
                format!("Adding MIT license to {}...", name),
                format!("Error creating license for {}: {}", name, reason),
                format!("Failed to add MIT license to {}", name),
            ],
            OutcomeKind::NotUploaded { reason } => vec![
                format!("Error creating license for {}: {}", name, reason),
                format!("Failed to add MIT license to {}", name),
            ],
            OutcomeKind::WouldAdd => vec![format!("Would add MIT license to {}", name)],
            OutcomeKind::Excluded => vec![format!("Skipping {} (excluded)", name)],
        }
    }
}
