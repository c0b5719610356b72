pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;

/// One-way salted password hashing.
///
/// Implementations must embed a fresh random salt in every digest, so hashing the
/// same plaintext twice yields two different digests that both verify.
pub trait PasswordHashing: Send + Sync + 'static {
    /// Produce a storable digest for `password`.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check `password` against a digest previously returned by [`hash`](Self::hash).
    ///
    /// Returns `Ok(false)` on mismatch. A digest that cannot be parsed is an error,
    /// not a mismatch.
    fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError>;
}
