//! Serializable message types for the HTTP layer.
//!
//! Domain models stay free of serde; these types own the wire shape.
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentDetails;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::PatientName;
use crate::domain::appointment::models::ScheduleAppointmentCommand;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;

/// Body accepted by both appointment creation and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_contact: String,
    pub appointment_date_time: DateTime<Utc>,
    pub doctor_id: Uuid,
}

impl AppointmentRequest {
    pub fn try_into_command(self) -> Result<ScheduleAppointmentCommand, AppointmentError> {
        Ok(ScheduleAppointmentCommand {
            patient_name: PatientName::new(self.patient_name)?,
            patient_contact: self.patient_contact,
            appointment_date_time: self.appointment_date_time,
            doctor_id: DoctorId(self.doctor_id),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentData {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_contact: String,
    pub appointment_date_time: DateTime<Utc>,
    pub doctor_id: Uuid,
    /// Present on reads; omitted when the doctor is unknown or not loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorData>,
}

impl From<&Appointment> for AppointmentData {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.as_uuid(),
            patient_name: appointment.patient_name.as_str().to_string(),
            patient_contact: appointment.patient_contact.clone(),
            appointment_date_time: appointment.appointment_date_time,
            doctor_id: appointment.doctor_id.as_uuid(),
            doctor: None,
        }
    }
}

impl From<&AppointmentDetails> for AppointmentData {
    fn from(details: &AppointmentDetails) -> Self {
        Self {
            doctor: details.doctor.as_ref().map(DoctorData::from),
            ..Self::from(&details.appointment)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorData {
    pub id: Uuid,
    pub name: String,
}

impl From<&Doctor> for DoctorData {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.as_uuid(),
            name: doctor.name.clone(),
        }
    }
}

/// Parse an appointment id taken from the request path.
pub fn parse_appointment_id(raw: &str) -> Result<AppointmentId, AppointmentError> {
    Ok(AppointmentId::from_string(raw)?)
}
