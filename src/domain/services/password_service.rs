use crate::domain::{
    error::DomainError,
    models::{credential::HashedCredential, secret::PlainSecret},
};

/// Service for hashing secrets and verifying them against stored credentials.
///
/// Implementations hold only immutable parameters, so a clone can be moved
/// onto a blocking thread and used concurrently with the original.
pub trait PasswordHasher: Clone + Send + Sync + 'static {
    /// Hash a secret with a fresh random salt
    fn hash(&self, secret: &PlainSecret) -> Result<HashedCredential, DomainError>;

    /// Check a secret against a stored credential.
    /// A mismatch is `Ok(false)`; a malformed credential is `DomainError::Comparison`.
    fn verify(&self, secret: &PlainSecret, hashed: &HashedCredential) -> Result<bool, DomainError>;

    /// Whether a stored credential was produced with other parameters than
    /// this hasher would use now
    fn needs_rehash(&self, hashed: &HashedCredential) -> Result<bool, DomainError>;
}
