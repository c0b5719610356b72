use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorDirectory;

/// Doctor lookups against the `doctors` table.
///
/// The table is populated by whoever manages doctors; this service only reads it.
pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DoctorDirectory for PostgresDoctorRepository {
    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| Doctor {
            id: DoctorId(r.get("id")),
            name: r.get("name"),
        }))
    }
}
