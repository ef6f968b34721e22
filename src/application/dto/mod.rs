/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_request;
mod audit_response;

pub use audit_request::{AuditRequest, AuditRequestBuilder, MAX_CONCURRENCY};
pub use audit_response::AuditResponse;
