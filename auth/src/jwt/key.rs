use std::fmt;

use super::errors::JwtError;

/// Server-held secret used to sign and verify tokens.
///
/// Construction fails on an empty (or whitespace-only) secret, so a process can
/// never hand out tokens signed with a blank key.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Wrap a secret.
    ///
    /// # Errors
    /// * `EmptySigningKey` - Secret is empty or only whitespace
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, JwtError> {
        let secret = secret.as_ref();
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(JwtError::EmptySigningKey);
        }
        Ok(Self(secret.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Never print key material.
impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningKey").field(&"<redacted>").finish()
    }
}
