use async_trait::async_trait;

use super::errors::AppointmentError;
use super::models::Appointment;
use super::models::AppointmentDetails;
use super::models::AppointmentId;
use super::models::ScheduleAppointmentCommand;

/// Port for appointment domain service operations.
#[async_trait]
pub trait AppointmentServicePort: Send + Sync + 'static {
    /// Validate and store a new appointment.
    ///
    /// # Errors
    /// * `PastDate` - Appointment time is not after now
    /// * `InvalidDoctor` - Doctor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_appointment(
        &self,
        command: ScheduleAppointmentCommand,
    ) -> Result<Appointment, AppointmentError>;

    /// Retrieve appointment by identifier, with its doctor.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    /// * `Doctor` - Doctor lookup failed
    /// * `DatabaseError` - Database operation failed
    async fn get_appointment(
        &self,
        id: &AppointmentId,
    ) -> Result<AppointmentDetails, AppointmentError>;

    /// List every appointment with its doctor, ordered by appointment time.
    ///
    /// # Errors
    /// * `Doctor` - Doctor lookup failed
    /// * `DatabaseError` - Database operation failed
    async fn list_appointments(&self) -> Result<Vec<AppointmentDetails>, AppointmentError>;

    /// Validate and overwrite an existing appointment.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist (checked first)
    /// * `PastDate` - Appointment time is not after now
    /// * `InvalidDoctor` - Doctor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_appointment(
        &self,
        id: &AppointmentId,
        command: ScheduleAppointmentCommand,
    ) -> Result<Appointment, AppointmentError>;

    /// Delete an appointment.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_appointment(&self, id: &AppointmentId) -> Result<(), AppointmentError>;
}

/// Repository port for appointment persistence operations.
#[async_trait]
pub trait AppointmentRepository: Send + Sync + 'static {
    /// Persist a new appointment.
    ///
    /// # Errors
    /// * `InvalidDoctor` - Referenced doctor vanished (foreign key violation)
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;

    /// Retrieve appointment by identifier.
    ///
    /// # Returns
    /// Appointment if found, None otherwise
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AppointmentId)
        -> Result<Option<Appointment>, AppointmentError>;

    /// Retrieve all appointments ordered by appointment time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError>;

    /// Overwrite a stored appointment.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    /// * `InvalidDoctor` - Referenced doctor vanished (foreign key violation)
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;

    /// Remove appointment permanently.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AppointmentId) -> Result<(), AppointmentError>;
}
