/// Domain layer - repositories, license status, the generated license file,
/// and the pure rules that decide what happens to each repository.
pub mod domain;
pub mod policies;
pub mod services;
