use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;
use super::key::SigningKey;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Signs with HS512 (HMAC with SHA-512).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler from a validated signing key.
    ///
    /// # Arguments
    /// * `key` - Secret key for signing tokens
    ///
    /// # Returns
    /// JwtHandler instance configured with HS512 algorithm
    pub fn new(key: &SigningKey) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            algorithm: Algorithm::HS512,
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature and the `exp` claim are both checked; `exp` is required.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Token is malformed, has a bad signature or lacks `exp`
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::Claims;

    fn handler(secret: &str) -> JwtHandler {
        JwtHandler::new(&SigningKey::new(secret).unwrap())
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let claims =
            Claims::for_user("user123", "alice", Utc::now(), Utc::now() + Duration::hours(24));

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_header_uses_hs512() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let claims =
            Claims::for_user("user123", "alice", Utc::now(), Utc::now() + Duration::hours(1));

        let token = handler.encode(&claims).unwrap();
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS512);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode::<Claims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = handler("secret1_at_least_32_bytes_long_key!");
        let handler2 = handler("secret2_at_least_32_bytes_long_key!");
        let claims =
            Claims::for_user("user123", "alice", Utc::now(), Utc::now() + Duration::hours(1));

        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let issued_at = Utc::now() - Duration::hours(48);
        let claims =
            Claims::for_user("user123", "alice", issued_at, issued_at + Duration::hours(24));

        let token = handler.encode(&claims).unwrap();

        assert_eq!(
            handler.decode::<Claims>(&token).unwrap_err(),
            JwtError::TokenExpired
        );
    }
}
