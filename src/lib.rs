//! Salted one-way hashing and verification of user secrets.
//!
//! [`hash`] and [`verify`] are the plain function contract used by an
//! authentication flow: bcrypt with cost 12, run off the async worker
//! threads. [`CredentialUsecase`] wraps any [`PasswordHasher`] the same way,
//! and [`HasherConfig`] builds one that can also hash with Argon2id and
//! verify credentials of either scheme.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use crate::{
    config::{ConfigError, HasherConfig},
    domain::{
        error::DomainError,
        models::{
            credential::{HashScheme, HashedCredential},
            secret::PlainSecret,
        },
        services::password_service::PasswordHasher,
    },
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        bcrypt_password_hasher::BcryptPasswordHasher,
        configured_password_hasher::ConfiguredPasswordHasher,
    },
    usecase::credential_usecase::CredentialUsecase,
};

/// Hash a secret with bcrypt (cost 12) and return the encoded credential.
///
/// Fails with [`DomainError::Hashing`] if the primitive cannot complete.
pub async fn hash(secret: &str) -> Result<String, DomainError> {
    CredentialUsecase::new(BcryptPasswordHasher::new())
        .hash(secret)
        .await
        .map(String::from)
}

/// Check a secret against an encoded credential.
///
/// A mismatch is `Ok(false)`. A value that is not a recognized bcrypt
/// encoding fails with [`DomainError::Comparison`].
pub async fn verify(secret: &str, hashed_credential: &str) -> Result<bool, DomainError> {
    CredentialUsecase::new(BcryptPasswordHasher::new())
        .verify(secret, &HashedCredential::from(hashed_credential.to_owned()))
        .await
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[tokio::test]
    async fn test_known_secret_positive() {
        let hashed = hash("Tr0ub4dor&3").await.unwrap();

        assert!(hashed.starts_with("$2b$12$"));
        assert_eq!(hashed.len(), 60);
        assert_eq!(verify("Tr0ub4dor&3", &hashed).await, Ok(true));
        assert_eq!(verify("wrongpass", &hashed).await, Ok(false));
    }

    #[tokio::test]
    async fn test_same_secret_hashes_differently_positive() {
        let first = hash("Tr0ub4dor&3").await.unwrap();
        let second = hash("Tr0ub4dor&3").await.unwrap();

        assert_ne!(first, second);
    }

    #[rstest]
    #[case("not-a-valid-encoding")]
    #[case("$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$RdescudvJCsgt3ub+b+dWRWJTmaaJObG")]
    #[tokio::test]
    async fn test_malformed_credential_negative(#[case] stored: &str) {
        assert_eq!(verify("Tr0ub4dor&3", stored).await, Err(DomainError::Comparison));
    }
}
