use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Plaintext secret supplied by a caller.
///
/// Never persisted. The buffer is wiped when the value is dropped, there is
/// no `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainSecret(String);

impl PlainSecret {
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlainSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for PlainSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_owned())
    }
}

impl fmt::Debug for PlainSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainSecret([REDACTED])")
    }
}
