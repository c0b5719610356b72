use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;
use crate::user::models::Username;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `credentials` - Requested username and plaintext password
    ///
    /// # Returns
    /// Stored user entity
    ///
    /// # Errors
    /// * `InvalidInput` - Username or password is empty
    /// * `UsernameTaken` - Username is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, credentials: Credentials) -> Result<User, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidInput` - Username or password is empty
    /// * `UserNotFound` - No user with this username
    /// * `InvalidPassword` - Password does not match
    /// * `Password` - Stored hash is corrupted
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;
}

/// Credential store for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// The store enforces username uniqueness itself.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;

    /// Check whether a username is already registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError>;
}
