use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::parse_appointment_id;
use crate::inbound::http::messages::AppointmentData;
use crate::inbound::http::router::AppState;

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let appointment_id = parse_appointment_id(&id)?;

    state
        .appointment_service
        .get_appointment(&appointment_id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}
