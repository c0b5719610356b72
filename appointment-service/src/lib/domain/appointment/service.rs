use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use super::errors::AppointmentError;
use super::models::Appointment;
use super::models::AppointmentDetails;
use super::models::AppointmentId;
use super::models::ScheduleAppointmentCommand;
use super::ports::AppointmentRepository;
use super::ports::AppointmentServicePort;
use super::validator::AppointmentValidator;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorDirectory;

/// Concrete implementation of AppointmentServicePort.
///
/// Runs the same validation for create and update before touching the store.
pub struct AppointmentService<AR, DD>
where
    AR: AppointmentRepository,
    DD: DoctorDirectory,
{
    repository: Arc<AR>,
    doctors: Arc<DD>,
    validator: AppointmentValidator<DD>,
    clock: Arc<dyn Clock>,
}

impl<AR, DD> AppointmentService<AR, DD>
where
    AR: AppointmentRepository,
    DD: DoctorDirectory,
{
    pub fn new(repository: Arc<AR>, doctors: Arc<DD>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            validator: AppointmentValidator::new(Arc::clone(&doctors)),
            doctors,
            clock,
        }
    }

    async fn validate(&self, command: &ScheduleAppointmentCommand) -> Result<(), AppointmentError> {
        self.validator
            .validate(
                command.appointment_date_time,
                &command.doctor_id,
                self.clock.utc(),
            )
            .await
    }

    /// Attach doctors to appointments, looking each distinct doctor up once.
    async fn with_doctors(
        &self,
        appointments: Vec<Appointment>,
    ) -> Result<Vec<AppointmentDetails>, AppointmentError> {
        let mut doctors: HashMap<DoctorId, Option<Doctor>> = HashMap::new();
        let mut details = Vec::with_capacity(appointments.len());

        for appointment in appointments {
            let doctor = match doctors.get(&appointment.doctor_id) {
                Some(cached) => cached.clone(),
                None => {
                    let found = self.doctors.find_by_id(&appointment.doctor_id).await?;
                    doctors.insert(appointment.doctor_id, found.clone());
                    found
                }
            };

            if doctor.is_none() {
                tracing::warn!(
                    appointment_id = %appointment.id,
                    doctor_id = %appointment.doctor_id,
                    "Appointment references an unknown doctor"
                );
            }

            details.push(AppointmentDetails {
                appointment,
                doctor,
            });
        }

        Ok(details)
    }
}

#[async_trait]
impl<AR, DD> AppointmentServicePort for AppointmentService<AR, DD>
where
    AR: AppointmentRepository,
    DD: DoctorDirectory,
{
    async fn create_appointment(
        &self,
        command: ScheduleAppointmentCommand,
    ) -> Result<Appointment, AppointmentError> {
        self.validate(&command).await?;

        let appointment = self
            .repository
            .create(Appointment::schedule(command))
            .await?;

        tracing::info!(
            appointment_id = %appointment.id,
            doctor_id = %appointment.doctor_id,
            appointment_date_time = %appointment.appointment_date_time,
            "Appointment created"
        );

        Ok(appointment)
    }

    async fn get_appointment(
        &self,
        id: &AppointmentId,
    ) -> Result<AppointmentDetails, AppointmentError> {
        let appointment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppointmentError::NotFound(*id))?;

        let doctor = self.doctors.find_by_id(&appointment.doctor_id).await?;

        Ok(AppointmentDetails {
            appointment,
            doctor,
        })
    }

    async fn list_appointments(&self) -> Result<Vec<AppointmentDetails>, AppointmentError> {
        let appointments = self.repository.list_all().await?;
        self.with_doctors(appointments).await
    }

    async fn update_appointment(
        &self,
        id: &AppointmentId,
        command: ScheduleAppointmentCommand,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppointmentError::NotFound(*id))?;

        self.validate(&command).await?;

        appointment.reschedule(command);

        let updated = self.repository.update(appointment).await?;

        tracing::info!(appointment_id = %updated.id, "Appointment updated");

        Ok(updated)
    }

    async fn delete_appointment(&self, id: &AppointmentId) -> Result<(), AppointmentError> {
        self.repository.delete(id).await?;

        tracing::info!(appointment_id = %id, "Appointment deleted");

        Ok(())
    }
}
