use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use crate::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::AppointmentData;
use crate::inbound::http::messages::AppointmentRequest;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_appointment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<AppointmentRequest>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let command = body.try_into_command()?;

    tracing::debug!(
        user_id = %auth_user.user_id,
        doctor_id = %command.doctor_id,
        "Booking appointment"
    );

    state
        .appointment_service
        .create_appointment(command)
        .await
        .map_err(ApiError::from)
        .map(|ref appointment| ApiSuccess::new(StatusCode::CREATED, appointment.into()))
}
