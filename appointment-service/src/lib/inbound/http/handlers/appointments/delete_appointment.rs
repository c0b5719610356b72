use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::messages::parse_appointment_id;
use crate::inbound::http::router::AppState;

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let appointment_id = parse_appointment_id(&id)?;

    state
        .appointment_service
        .delete_appointment(&appointment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
