mod license_policy;

pub use license_policy::{LicenseDecision, LicensePolicy};
