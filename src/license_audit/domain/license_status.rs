/// License key the platform reports for the MIT license
pub const MIT_LICENSE_KEY: &str = "mit";

/// Result of asking the platform which license a repository carries
///
/// `Unknown` is kept distinct from `Absent` so callers decide explicitly
/// what a failed lookup means; see `LicensePolicy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseStatus {
    /// A license was detected; `key` is the platform's identifier (e.g. `mit`)
    Present { key: String },
    /// The platform reported no license (HTTP 404)
    Absent,
    /// The lookup failed or returned something unexpected
    Unknown { reason: String },
}

impl LicenseStatus {
    pub fn present(key: impl Into<String>) -> Self {
        LicenseStatus::Present { key: key.into() }
    }

    pub fn unknown(reason: impl Into<String>) -> Self {
        LicenseStatus::Unknown {
            reason: reason.into(),
        }
    }

    /// License key when one was detected
    pub fn key(&self) -> Option<&str> {
        match self {
            LicenseStatus::Present { key } => Some(key.as_str()),
            _ => None,
        }
    }

    /// True only for a detected license whose key is exactly `mit`
    pub fn is_mit(&self) -> bool {
        self.key() == Some(MIT_LICENSE_KEY)
    }
}
