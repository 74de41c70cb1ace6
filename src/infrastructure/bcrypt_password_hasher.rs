use crate::domain::{
    error::DomainError,
    models::{
        credential::{HashScheme, HashedCredential},
        secret::PlainSecret,
    },
    services::password_service::PasswordHasher,
};

/// Work factor for new bcrypt hashes
pub const DEFAULT_COST: u32 = 12;
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher with an explicit work factor. Out-of-range costs are rejected
    /// by the primitive at hash time.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, secret: &PlainSecret) -> Result<HashedCredential, DomainError> {
        tracing::debug!(scheme = %HashScheme::Bcrypt, cost = self.cost, "Hashing secret");

        let hash = bcrypt::hash(secret.as_bytes(), self.cost).map_err(|e| {
            tracing::error!(error = %e, cost = self.cost, "bcrypt hashing failed");
            DomainError::Hashing
        })?;

        Ok(HashedCredential::new(hash))
    }

    fn verify(&self, secret: &PlainSecret, hashed: &HashedCredential) -> Result<bool, DomainError> {
        tracing::debug!(
            scheme = %HashScheme::Bcrypt,
            cost = ?hashed.bcrypt_cost(),
            "Verifying secret"
        );

        bcrypt::verify(secret.as_bytes(), hashed.as_str()).map_err(|e| {
            tracing::warn!(error = %e, "Stored bcrypt credential could not be compared");
            DomainError::Comparison
        })
    }

    fn needs_rehash(&self, hashed: &HashedCredential) -> Result<bool, DomainError> {
        match hashed.scheme() {
            Some(HashScheme::Bcrypt) => {
                let cost = hashed.bcrypt_cost().ok_or_else(|| {
                    tracing::warn!("Stored bcrypt credential is malformed");
                    DomainError::Comparison
                })?;
                Ok(cost < self.cost)
            }
            Some(_) => Ok(true),
            None => {
                tracing::warn!("Stored credential has an unrecognized encoding");
                Err(DomainError::Comparison)
            }
        }
    }
}
