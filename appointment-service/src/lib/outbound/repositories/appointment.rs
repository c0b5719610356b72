use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::PatientName;
use crate::domain::appointment::ports::AppointmentRepository;
use crate::domain::doctor::models::DoctorId;

pub struct PostgresAppointmentRepository {
    pool: PgPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_appointment(row: PgRow) -> Result<Appointment, AppointmentError> {
        let patient_name = PatientName::new(row.get("patient_name")).map_err(|e| {
            AppointmentError::DatabaseError(format!("Corrupted appointment row: {}", e))
        })?;

        Ok(Appointment {
            id: AppointmentId(row.get("id")),
            patient_name,
            patient_contact: row.get("patient_contact"),
            appointment_date_time: row.get("appointment_date_time"),
            doctor_id: DoctorId(row.get("doctor_id")),
        })
    }

    /// Doctor removed between validation and write.
    fn map_write_error(e: sqlx::Error) -> AppointmentError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation()
                && db_err.constraint() == Some("appointments_doctor_id_fkey")
            {
                return AppointmentError::InvalidDoctor;
            }
        }
        tracing::error!(error = %e, "Failed to write appointment");
        AppointmentError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        sqlx::query(
            r#"
            INSERT INTO appointments (id, patient_name, patient_contact, appointment_date_time, doctor_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(appointment.id.as_uuid())
        .bind(appointment.patient_name.as_str())
        .bind(&appointment.patient_contact)
        .bind(appointment.appointment_date_time)
        .bind(appointment.doctor_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(Self::map_write_error)?;

        Ok(appointment)
    }

    async fn find_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let row = sqlx::query(
            r#"
            SELECT id, patient_name, patient_contact, appointment_date_time, doctor_id
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_appointment).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, patient_name, patient_contact, appointment_date_time, doctor_id
            FROM appointments
            ORDER BY appointment_date_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_appointment).collect()
    }

    async fn update(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET patient_name = $2, patient_contact = $3, appointment_date_time = $4, doctor_id = $5
            WHERE id = $1
            "#,
        )
        .bind(appointment.id.as_uuid())
        .bind(appointment.patient_name.as_str())
        .bind(&appointment.patient_contact)
        .bind(appointment.appointment_date_time)
        .bind(appointment.doctor_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(Self::map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppointmentError::NotFound(appointment.id));
        }

        Ok(appointment)
    }

    async fn delete(&self, id: &AppointmentId) -> Result<(), AppointmentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppointmentError::NotFound(*id));
        }

        Ok(())
    }
}
