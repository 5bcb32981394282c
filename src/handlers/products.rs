use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::{auth::AdminAccess, error::AppResult, models::ProductInput, AppState};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Value>)> {
    let products = state.engine.list_products().await;
    debug!(count = products.len(), "Listed products");

    Ok((
        StatusCode::OK,
        Json(json!({
            "data": products,
            "count": products.len(),
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(id) = id?;
    let product = state.engine.get_product(id).await?;
    Ok((StatusCode::OK, Json(json!({ "data": product }))))
}

// ── Create (admin) ────────────────────────────────────────────────────────────

pub async fn create_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let product = state.engine.create_product(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": product })),
    ))
}

// ── Update (admin) ────────────────────────────────────────────────────────────

pub async fn update_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let product = state.engine.update_product(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "data": product })),
    ))
}

// ── Delete (admin) ────────────────────────────────────────────────────────────

pub async fn delete_product(
    _admin: AdminAccess,
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(id) = id?;
    state.engine.delete_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "id": id })),
    ))
}
