//! Hasher configuration
//!
//! Deserializable settings for building a [`ConfiguredPasswordHasher`].
//! Where the values come from is up to the embedding application.

use argon2::Params;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::models::credential::HashScheme,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        bcrypt_password_hasher::{self, BcryptPasswordHasher},
        configured_password_hasher::ConfiguredPasswordHasher,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bcrypt cost must be between {min} and {max} (got {actual})")]
    BcryptCostOutOfRange { min: u32, max: u32, actual: u32 },

    #[error("Invalid argon2 parameters: {0}")]
    InvalidArgon2Params(String),
}

/// Password hasher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Scheme used for new hashes
    pub algorithm: HashScheme,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Argon2 memory size in KiB
    pub argon2_memory_kib: u32,
    /// Argon2 number of passes
    pub argon2_iterations: u32,
    /// Argon2 degree of parallelism
    pub argon2_parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: HashScheme::Bcrypt,
            bcrypt_cost: bcrypt_password_hasher::DEFAULT_COST,
            argon2_memory_kib: Params::DEFAULT_M_COST,
            argon2_iterations: Params::DEFAULT_T_COST,
            argon2_parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HasherConfig {
    /// Validate the settings and build the hasher
    pub fn build(&self) -> Result<ConfiguredPasswordHasher, ConfigError> {
        let cost_range = bcrypt_password_hasher::MIN_COST..=bcrypt_password_hasher::MAX_COST;
        if !cost_range.contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange {
                min: bcrypt_password_hasher::MIN_COST,
                max: bcrypt_password_hasher::MAX_COST,
                actual: self.bcrypt_cost,
            });
        }

        let params = Params::new(
            self.argon2_memory_kib,
            self.argon2_iterations,
            self.argon2_parallelism,
            None,
        )
        .map_err(|e| ConfigError::InvalidArgon2Params(e.to_string()))?;

        tracing::info!(
            algorithm = %self.algorithm,
            bcrypt_cost = self.bcrypt_cost,
            argon2_memory_kib = self.argon2_memory_kib,
            argon2_iterations = self.argon2_iterations,
            argon2_parallelism = self.argon2_parallelism,
            "Password hasher configured"
        );

        Ok(ConfiguredPasswordHasher::new(
            self.algorithm,
            BcryptPasswordHasher::with_cost(self.bcrypt_cost),
            Argon2PasswordHasher::with_params(params),
        ))
    }
}
