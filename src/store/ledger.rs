use chrono::Utc;
use indexmap::IndexMap;

use crate::error::InventoryError;
use crate::models::{Order, OrderStatus};

/// Owns every [`Order`] in creation order and hands out order ids.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: IndexMap<u64, Order>,
    last_id: u64,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        product_id: u64,
        product_name: String,
        product_price: f64,
        user_id: String,
    ) -> Order {
        self.last_id += 1;
        let order = Order {
            order_id: self.last_id,
            product_id,
            product_name,
            product_price,
            user_id,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        };
        self.orders.insert(order.order_id, order.clone());
        order
    }

    pub fn list_pending(&self) -> Vec<Order> {
        self.orders
            .values()
            .filter(|o| o.status == OrderStatus::Pending)
            .cloned()
            .collect()
    }

    pub fn list_approved_for_user(&self, user_id: &str) -> Vec<Order> {
        self.orders
            .values()
            .filter(|o| o.status == OrderStatus::Approved && o.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn get(&self, order_id: u64) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// Moves a pending order into `status`. Terminal orders are never touched.
    pub fn set_status(
        &mut self,
        order_id: u64,
        status: OrderStatus,
    ) -> Result<Order, InventoryError> {
        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or(InventoryError::OrderNotFound(order_id))?;
        if order.status.is_terminal() {
            return Err(InventoryError::AlreadyProcessed(order_id));
        }
        order.status = status;
        Ok(order.clone())
    }

    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }
}
