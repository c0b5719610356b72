use thiserror::Error;

/// Failures of the doctor directory itself.
#[derive(Debug, Clone, Error)]
pub enum DoctorError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
