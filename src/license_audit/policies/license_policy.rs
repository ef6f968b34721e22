use crate::license_audit::domain::LicenseStatus;

/// What to do with a repository once its license status is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseDecision {
    /// An MIT license is present
    Skip,
    /// Commit a generated MIT license
    AddLicense,
}

/// LicensePolicy - decides whether a repository needs an MIT license
///
/// The policy is fail-open: a lookup that could not be completed
/// (`LicenseStatus::Unknown`) is treated like a missing license, so a
/// transient error leads to an upload attempt rather than a skip.
pub struct LicensePolicy;

impl LicensePolicy {
    pub fn decide(status: &LicenseStatus) -> LicenseDecision {
        match status {
            LicenseStatus::Present { .. } if status.is_mit() => LicenseDecision::Skip,
            LicenseStatus::Present { .. } => LicenseDecision::AddLicense,
            LicenseStatus::Absent => LicenseDecision::AddLicense,
            LicenseStatus::Unknown { .. } => LicenseDecision::AddLicense,
        }
    }
}
