use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::AppointmentIdError;
use super::errors::PatientNameError;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;

/// Appointment aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_name: PatientName,
    pub patient_contact: String,
    pub appointment_date_time: DateTime<Utc>,
    pub doctor_id: DoctorId,
}

impl Appointment {
    /// Create a new appointment with a fresh identifier.
    pub fn schedule(command: ScheduleAppointmentCommand) -> Self {
        Self {
            id: AppointmentId::new(),
            patient_name: command.patient_name,
            patient_contact: command.patient_contact,
            appointment_date_time: command.appointment_date_time,
            doctor_id: command.doctor_id,
        }
    }

    /// Replace every mutable field with the command's values.
    ///
    /// There is no partial update: fields absent from the request are not kept.
    pub fn reschedule(&mut self, command: ScheduleAppointmentCommand) {
        self.patient_name = command.patient_name;
        self.patient_contact = command.patient_contact;
        self.appointment_date_time = command.appointment_date_time;
        self.doctor_id = command.doctor_id;
    }
}

/// Appointment read together with the doctor it references.
///
/// `doctor` is `None` when the directory no longer knows the doctor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub doctor: Option<Doctor>,
}

/// Appointment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an appointment ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AppointmentIdError> {
        Uuid::parse_str(s)
            .map(AppointmentId)
            .map_err(|e| AppointmentIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Patient name value type
///
/// Non-blank string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientName(String);

impl PatientName {
    /// # Errors
    /// * `Empty` - Name is empty or only whitespace
    pub fn new(name: String) -> Result<Self, PatientNameError> {
        if name.trim().is_empty() {
            return Err(PatientNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Full set of client-supplied appointment fields.
///
/// Used for both creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleAppointmentCommand {
    pub patient_name: PatientName,
    pub patient_contact: String,
    pub appointment_date_time: DateTime<Utc>,
    pub doctor_id: DoctorId,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_patient_name_rejects_blank() {
        assert_eq!(PatientName::new(String::new()), Err(PatientNameError::Empty));
        assert_eq!(PatientName::new("   ".to_string()), Err(PatientNameError::Empty));
        assert!(PatientName::new("John Doe".to_string()).is_ok());
    }

    #[test]
    fn test_reschedule_overwrites_every_field() {
        let original = ScheduleAppointmentCommand {
            patient_name: PatientName::new("John Doe".to_string()).unwrap(),
            patient_contact: "555-0100".to_string(),
            appointment_date_time: Utc::now() + Duration::days(1),
            doctor_id: DoctorId::new(),
        };
        let mut appointment = Appointment::schedule(original);
        let id = appointment.id;

        let replacement = ScheduleAppointmentCommand {
            patient_name: PatientName::new("Jane Roe".to_string()).unwrap(),
            patient_contact: String::new(),
            appointment_date_time: Utc::now() + Duration::days(3),
            doctor_id: DoctorId::new(),
        };
        appointment.reschedule(replacement.clone());

        assert_eq!(appointment.id, id);
        assert_eq!(appointment.patient_name, replacement.patient_name);
        assert_eq!(appointment.patient_contact, "");
        assert_eq!(
            appointment.appointment_date_time,
            replacement.appointment_date_time
        );
        assert_eq!(appointment.doctor_id, replacement.doctor_id);
    }
}
