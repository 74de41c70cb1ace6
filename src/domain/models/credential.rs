use std::fmt;

use serde::{Deserialize, Serialize};

/// Password hashing primitive that produced a stored credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashScheme {
    Bcrypt,
    Argon2,
}

impl HashScheme {
    const BCRYPT_PREFIXES: [&'static str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];
    const ARGON2_PREFIXES: [&'static str; 3] = ["$argon2i$", "$argon2d$", "$argon2id$"];

    /// Recognize the scheme from the encoding prefix
    pub fn detect(encoded: &str) -> Option<Self> {
        if Self::BCRYPT_PREFIXES.iter().any(|p| encoded.starts_with(p)) {
            Some(Self::Bcrypt)
        } else if Self::ARGON2_PREFIXES.iter().any(|p| encoded.starts_with(p)) {
            Some(Self::Argon2)
        } else {
            None
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashScheme::Bcrypt => f.write_str("bcrypt"),
            HashScheme::Argon2 => f.write_str("argon2"),
        }
    }
}

const BCRYPT_SALT_AND_HASH_LEN: usize = 53;

/// Value object holding an encoded salt + hash, as persisted by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedCredential(String);

impl HashedCredential {
    /// Wrap an already encoded credential (e.g. loaded from a user record)
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn scheme(&self) -> Option<HashScheme> {
        HashScheme::detect(&self.0)
    }

    /// Work factor of a well-formed bcrypt credential, `None` for anything else.
    pub fn bcrypt_cost(&self) -> Option<u32> {
        if self.scheme()? != HashScheme::Bcrypt {
            return None;
        }
        // $2b$<cost>$<22 chars salt><31 chars hash>
        let mut parts = self.0.split('$').skip(2);
        let (cost, tail) = (parts.next()?, parts.next()?);
        if parts.next().is_some()
            || tail.len() != BCRYPT_SALT_AND_HASH_LEN
            || !tail.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'/')
        {
            return None;
        }
        cost.parse().ok()
    }
}

impl From<String> for HashedCredential {
    fn from(encoded: String) -> Self {
        Self::new(encoded)
    }
}

impl From<HashedCredential> for String {
    fn from(credential: HashedCredential) -> Self {
        credential.into_string()
    }
}
