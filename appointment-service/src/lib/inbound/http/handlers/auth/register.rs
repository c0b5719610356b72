use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::models::Credentials;
use crate::user::ports::AuthServicePort;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<String>, ApiError> {
    state
        .auth_service
        .register(Credentials::new(body.username, body.password))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, REGISTERED_MESSAGE.to_string()))
}

/// Missing fields deserialize as empty and are rejected by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}
