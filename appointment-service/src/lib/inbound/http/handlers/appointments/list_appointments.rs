use axum::extract::State;
use axum::http::StatusCode;

use crate::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::AppointmentData;
use crate::inbound::http::router::AppState;

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AppointmentData>>, ApiError> {
    let details = state.appointment_service.list_appointments().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        details.iter().map(AppointmentData::from).collect(),
    ))
}
