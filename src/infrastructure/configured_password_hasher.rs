use crate::{
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
    },
};

/// Hashes with the configured primary scheme and verifies whichever scheme
/// the stored credential was produced with.
#[derive(Debug, Clone)]
pub struct ConfiguredPasswordHasher {
    primary: HashScheme,
    bcrypt: BcryptPasswordHasher,
    argon2: Argon2PasswordHasher,
}

impl ConfiguredPasswordHasher {
    pub fn new(
        primary: HashScheme,
        bcrypt: BcryptPasswordHasher,
        argon2: Argon2PasswordHasher,
    ) -> Self {
        Self {
            primary,
            bcrypt,
            argon2,
        }
    }

    pub fn primary(&self) -> HashScheme {
        self.primary
    }

    fn scheme_of(hashed: &HashedCredential) -> Result<HashScheme, DomainError> {
        hashed.scheme().ok_or_else(|| {
            tracing::warn!("Stored credential has an unrecognized encoding");
            DomainError::Comparison
        })
    }
}

impl Default for ConfiguredPasswordHasher {
    fn default() -> Self {
        Self::new(
            HashScheme::Bcrypt,
            BcryptPasswordHasher::default(),
            Argon2PasswordHasher::default(),
        )
    }
}

impl PasswordHasher for ConfiguredPasswordHasher {
    fn hash(&self, secret: &PlainSecret) -> Result<HashedCredential, DomainError> {
        match self.primary {
            HashScheme::Bcrypt => self.bcrypt.hash(secret),
            HashScheme::Argon2 => self.argon2.hash(secret),
        }
    }

    fn verify(&self, secret: &PlainSecret, hashed: &HashedCredential) -> Result<bool, DomainError> {
        match Self::scheme_of(hashed)? {
            HashScheme::Bcrypt => self.bcrypt.verify(secret, hashed),
            HashScheme::Argon2 => self.argon2.verify(secret, hashed),
        }
    }

    fn needs_rehash(&self, hashed: &HashedCredential) -> Result<bool, DomainError> {
        let scheme = Self::scheme_of(hashed)?;
        if scheme != self.primary {
            return Ok(true);
        }
        match scheme {
            HashScheme::Bcrypt => self.bcrypt.needs_rehash(hashed),
            HashScheme::Argon2 => self.argon2.needs_rehash(hashed),
        }
    }
}
