use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub password: String,
}

// ── POST /api/login ───────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;

    match state.access.capability_for(&payload.password) {
        Some(role) => {
            info!(?role, "Login succeeded");
            Ok((StatusCode::OK, Json(json!({ "role": role }))))
        }
        None => {
            warn!("Login failed");
            Err(AppError::Unauthorized)
        }
    }
}
