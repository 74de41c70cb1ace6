use argon2::{
    Algorithm, Argon2, Params, PasswordHash as Argon2Hash, Version,
    password_hash::{
        Error as Argon2Error, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::domain::{
    error::DomainError,
    models::{
        credential::{HashScheme, HashedCredential},
        secret::PlainSecret,
    },
    services::password_service::PasswordHasher,
};

/// Argon2id hasher. Verification accepts any Argon2 variant and takes its
/// parameters from the stored credential.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Parse a stored credential; one without salt or hash output is malformed.
    fn parse<'a>(hashed: &'a HashedCredential) -> Result<Argon2Hash<'a>, DomainError> {
        let parsed_hash = Argon2Hash::new(hashed.as_str()).map_err(|e| {
            tracing::warn!(error = %e, "Stored argon2 credential is malformed");
            DomainError::Comparison
        })?;

        if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
            tracing::warn!(
                has_salt = parsed_hash.salt.is_some(),
                has_hash = parsed_hash.hash.is_some(),
                "Stored argon2 credential is incomplete"
            );
            return Err(DomainError::Comparison);
        }

        Ok(parsed_hash)
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, secret: &PlainSecret) -> Result<HashedCredential, DomainError> {
        tracing::debug!(
            scheme = %HashScheme::Argon2,
            m_cost = self.params.m_cost(),
            t_cost = self.params.t_cost(),
            p_cost = self.params.p_cost(),
            "Hashing secret"
        );

        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(error = %e, "argon2 hashing failed");
                DomainError::Hashing
            })?
            .to_string();

        Ok(HashedCredential::new(hash))
    }

    fn verify(&self, secret: &PlainSecret, hashed: &HashedCredential) -> Result<bool, DomainError> {
        let parsed_hash = Self::parse(hashed)?;
        tracing::debug!(
            scheme = %HashScheme::Argon2,
            algorithm = %parsed_hash.algorithm,
            "Verifying secret"
        );

        match self.argon2().verify_password(secret.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(Argon2Error::Password) => Ok(false),
            Err(e) => {
                tracing::warn!(error = %e, "Stored argon2 credential could not be compared");
                Err(DomainError::Comparison)
            }
        }
    }

    fn needs_rehash(&self, hashed: &HashedCredential) -> Result<bool, DomainError> {
        match hashed.scheme() {
            Some(HashScheme::Argon2) => {}
            Some(_) => return Ok(true),
            None => {
                tracing::warn!("Stored credential has an unrecognized encoding");
                return Err(DomainError::Comparison);
            }
        }

        let parsed_hash = Self::parse(hashed)?;
        if parsed_hash.algorithm != Algorithm::Argon2id.ident() {
            return Ok(true);
        }

        let stored = Params::try_from(&parsed_hash).map_err(|e| {
            tracing::warn!(error = %e, "Stored argon2 credential has unreadable parameters");
            DomainError::Comparison
        })?;

        Ok(stored.m_cost() != self.params.m_cost()
            || stored.t_cost() != self.params.t_cost()
            || stored.p_cost() != self.params.p_cost())
    }
}
