use async_trait::async_trait;

use super::errors::DoctorError;
use super::models::Doctor;
use super::models::DoctorId;

/// Read-only lookup of doctors owned by another system.
#[async_trait]
pub trait DoctorDirectory: Send + Sync + 'static {
    /// Retrieve doctor by identifier.
    ///
    /// # Returns
    /// Doctor if found, None otherwise
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError>;
}
