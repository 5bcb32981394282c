use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    auth::{AdminAccess, Capability},
    error::AppResult,
    models::{PlaceOrderRequest, ResolveOrderRequest},
    AppState,
};

// ── POST /api/orders ──────────────────────────────────────────────────────────

pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    state.access.require(&payload.password, Capability::Client)?;

    let order = state
        .engine
        .place_order(payload.product_id, &payload.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": order })),
    ))
}

// ── GET /api/orders/:user_id ──────────────────────────────────────────────────

pub async fn approved_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let orders = state.engine.approved_orders_for(&user_id).await;

    Ok((
        StatusCode::OK,
        Json(json!({
            "data": orders,
            "count": orders.len(),
        })),
    ))
}

// ── GET /api/admin/orders ─────────────────────────────────────────────────────

pub async fn pending_orders(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let orders = state.engine.pending_orders().await;

    Ok((
        StatusCode::OK,
        Json(json!({
            "data": orders,
            "count": orders.len(),
        })),
    ))
}

// ── GET /api/admin/orders/:id ─────────────────────────────────────────────────

pub async fn get_order(
    _admin: AdminAccess,
    State(state): State<AppState>,
    order_id: Result<Path<u64>, PathRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(order_id) = order_id?;
    let order = state.engine.get_order(order_id).await?;
    Ok((StatusCode::OK, Json(json!({ "data": order }))))
}

// ── PUT /api/admin/orders/:id ─────────────────────────────────────────────────

pub async fn resolve_order(
    _admin: AdminAccess,
    State(state): State<AppState>,
    order_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ResolveOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Path(order_id) = order_id?;
    let Json(payload) = payload?;
    let order = state.engine.resolve_order(order_id, payload.status).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "data": order })),
    ))
}
