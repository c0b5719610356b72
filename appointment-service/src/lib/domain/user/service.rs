use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Empty-field checks, done before any store access.
    fn parse_credentials(credentials: Credentials) -> Result<(Username, String), AuthError> {
        let username = Username::new(credentials.username)?;

        if credentials.password.is_empty() {
            return Err(AuthError::InvalidInput("Password is required".to_string()));
        }

        Ok((username, credentials.password))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<User, AuthError> {
        let (username, password) = Self::parse_credentials(credentials)?;

        // Fast path only; the store's unique constraint is authoritative and
        // `create` reports a lost race as UsernameTaken too.
        if self.repository.exists_by_username(&username).await? {
            tracing::info!(username = %username, "Registration rejected, username taken");
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self.authenticator.hash_password(&password)?;

        let user = User {
            id: UserId::new(),
            username,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let (username, password) = Self::parse_credentials(credentials)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let result = self
            .authenticator
            .authenticate(&password, &user.password_hash, user.id, user.username.as_str())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::InvalidPassword,
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(
                        user_id = %user.id,
                        error = %err,
                        "Stored password hash is unreadable"
                    );
                    AuthError::Password(err)
                }
                AuthenticationError::JwtError(err) => AuthError::Token(err),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AccessToken {
            token: result.access_token,
            expires_at: result.expires_at,
        })
    }
}
