use thiserror::Error;

/// Failures surfaced by hash and verify. The underlying cause is logged at
/// the failure site and deliberately not carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Failed to hash secret")]
    Hashing,

    #[error("Failed to compare secret with stored credential")]
    Comparison,
}
