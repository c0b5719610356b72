use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SigningKey;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordHashing;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Built once at startup from an immutable [`SigningKey`] and shared read-only
/// between requests.
pub struct Authenticator {
    password_hasher: Box<dyn PasswordHashing>,
    jwt_handler: JwtHandler,
    token_lifetime: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Instant after which the token is rejected
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator using Argon2id with default cost.
    ///
    /// # Arguments
    /// * `signing_key` - Secret key for JWT signing
    /// * `token_lifetime` - Lifetime of issued tokens
    pub fn new(signing_key: &SigningKey, token_lifetime: Duration) -> Self {
        Self {
            password_hasher: Box::new(PasswordHasher::new()),
            jwt_handler: JwtHandler::new(signing_key),
            token_lifetime,
        }
    }

    /// Replace the password hashing algorithm.
    pub fn with_password_hasher(mut self, hasher: impl PasswordHashing) -> Self {
        self.password_hasher = Box::new(hasher);
        self
    }

    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate a JWT for the user.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Token subject
    /// * `username` - Username embedded in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(user_id, username)?)
    }

    /// Generate a JWT without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry is not representable, or signing failed
    pub fn issue_token(
        &self,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, JwtError> {
        self.issue_token_at(user_id, username, Utc::now())
    }

    fn issue_token_at(
        &self,
        user_id: impl ToString,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthenticationResult, JwtError> {
        let expires_at = issued_at
            .checked_add_signed(self.token_lifetime)
            .ok_or_else(|| {
                JwtError::EncodingFailed(format!(
                    "token lifetime of {} overflows the expiry timestamp",
                    self.token_lifetime
                ))
            })?;

        let claims = Claims::for_user(user_id, username, issued_at, expires_at);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Validate and decode a JWT.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
