use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

/// An admin's verdict on a pending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl From<Decision> for OrderStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => OrderStatus::Approved,
            Decision::Rejected => OrderStatus::Rejected,
        }
    }
}

/// A purchase request. Name and price are copied from the product when the
/// order is placed and do not follow later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: u64,
    pub product_id: u64,
    pub product_name: String,
    pub product_price: f64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Pending order joined with the product's live stock for the admin queue.
#[derive(Debug, Clone, Serialize)]
pub struct PendingOrder {
    #[serde(flatten)]
    pub order: Order,
    /// `0` when the product has been deleted since the order was placed.
    pub product_stock: u32,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceOrderRequest {
    pub password: String,
    pub product_id: u64,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveOrderRequest {
    pub status: Decision,
}
