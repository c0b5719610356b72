use thiserror::Error;

use super::models::AppointmentId;
use crate::domain::doctor::errors::DoctorError;

/// Error type for AppointmentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppointmentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for PatientName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatientNameError {
    #[error("Patient name is required")]
    Empty,
}

/// Top-level error type for all appointment operations.
///
/// Display strings of `PastDate` and `InvalidDoctor` are returned to clients verbatim.
#[derive(Debug, Clone, Error)]
pub enum AppointmentError {
    #[error("Invalid appointment ID: {0}")]
    InvalidAppointmentId(#[from] AppointmentIdError),

    #[error("Invalid patient name: {0}")]
    InvalidPatientName(#[from] PatientNameError),

    #[error("Appointment date must be in the future")]
    PastDate,

    #[error("Invalid doctor ID")]
    InvalidDoctor,

    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    // Infrastructure errors
    #[error("Doctor directory error: {0}")]
    Doctor(#[from] DoctorError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
