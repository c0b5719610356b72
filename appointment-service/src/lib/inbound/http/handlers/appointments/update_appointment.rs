use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::messages::parse_appointment_id;
use crate::inbound::http::messages::AppointmentRequest;
use crate::inbound::http::router::AppState;

/// Overwrites the appointment wholesale; responds with an empty 204.
///
/// A missing appointment is reported before any problem with the body.
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AppointmentRequest>,
) -> Result<StatusCode, ApiError> {
    let appointment_id = parse_appointment_id(&id)?;
    let command = match body.try_into_command() {
        Ok(command) => command,
        Err(err) => {
            state
                .appointment_service
                .get_appointment(&appointment_id)
                .await?;
            return Err(err.into());
        }
    };

    state
        .appointment_service
        .update_appointment(&appointment_id, command)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
