use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Coarse classes callers react to: fix the input, fetch a fresh reference,
/// or re-read state and decide whether to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
}

/// Failures raised by the catalog, the ledger and the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("product {0} not found")]
    ProductNotFound(u64),

    #[error("order {0} not found")]
    OrderNotFound(u64),

    #[error("product {0} is out of stock")]
    OutOfStock(u64),

    #[error("product {0} has no stock left to approve the order")]
    InsufficientStock(u64),

    #[error("order {0} was already processed")]
    AlreadyProcessed(u64),
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::InvalidInput(_) => ErrorKind::InvalidInput,
            InventoryError::ProductNotFound(_) | InventoryError::OrderNotFound(_) => {
                ErrorKind::NotFound
            }
            InventoryError::OutOfStock(_)
            | InventoryError::InsufficientStock(_)
            | InventoryError::AlreadyProcessed(_) => ErrorKind::Conflict,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            InventoryError::InvalidInput(_) => "invalid_input",
            InventoryError::ProductNotFound(_) => "product_not_found",
            InventoryError::OrderNotFound(_) => "order_not_found",
            InventoryError::OutOfStock(_) => "out_of_stock",
            InventoryError::InsufficientStock(_) => "insufficient_stock",
            InventoryError::AlreadyProcessed(_) => "already_processed",
        }
    }
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("{0}")]
    BadRequest(String),

    /// Login attempt with a password that grants nothing.
    #[error("incorrect password")]
    Unauthorized,

    /// Missing or wrong credential for the requested capability.
    #[error("not authorized")]
    Forbidden,
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Inventory(err) => {
                let status = match err.kind() {
                    ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::Conflict => StatusCode::CONFLICT,
                };
                (status, err.code())
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
        };

        (
            status,
            Json(json!({
                "error": code,
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
