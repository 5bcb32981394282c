//! Order/stock consistency.
//!
//! The catalog and the ledger live behind a single mutex, so every operation
//! here, reads included, sees both stores in a state no other operation is
//! halfway through. The guard is only held across in-memory work and is never
//! kept over an `.await` on anything else.
//!
//! Placing an order does not reserve stock. Any number of pending orders may
//! target the last unit, and approval is the only step that consumes stock.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::InventoryError;
use crate::models::{Decision, Order, PendingOrder, Product, ProductInput};
use crate::store::{CatalogStore, OrderLedger};

struct Stores {
    catalog: CatalogStore,
    ledger: OrderLedger,
}

pub struct InventoryEngine {
    stores: Mutex<Stores>,
}

impl Default for InventoryEngine {
    fn default() -> Self {
        Self::new(CatalogStore::new(), OrderLedger::new())
    }
}

impl InventoryEngine {
    pub fn new(catalog: CatalogStore, ledger: OrderLedger) -> Self {
        Self {
            stores: Mutex::new(Stores { catalog, ledger }),
        }
    }

    // ── Orders ────────────────────────────────────────────────────────────────

    pub async fn place_order(
        &self,
        product_id: u64,
        user_id: &str,
    ) -> Result<Order, InventoryError> {
        let mut stores = self.stores.lock().await;

        let product = stores
            .catalog
            .get(product_id)
            .ok_or(InventoryError::ProductNotFound(product_id))?;
        if !product.in_stock() {
            warn!(product_id, "Order refused: product out of stock");
            return Err(InventoryError::OutOfStock(product_id));
        }
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(InventoryError::InvalidInput(
                "user_id must not be empty".to_string(),
            ));
        }

        let (name, price) = (product.name.clone(), product.price);
        let order = stores
            .ledger
            .append(product_id, name, price, user_id.to_string());

        info!(
            order_id = order.order_id,
            product_id,
            user_id = %order.user_id,
            "Placed order"
        );
        Ok(order)
    }

    pub async fn resolve_order(
        &self,
        order_id: u64,
        decision: Decision,
    ) -> Result<Order, InventoryError> {
        let mut stores = self.stores.lock().await;

        let order = stores
            .ledger
            .get(order_id)
            .ok_or(InventoryError::OrderNotFound(order_id))?;
        if order.status.is_terminal() {
            warn!(order_id, status = ?order.status, "Order already processed");
            return Err(InventoryError::AlreadyProcessed(order_id));
        }
        let product_id = order.product_id;

        if decision == Decision::Approved {
            // Fails without side effects, leaving the order pending.
            let remaining = stores.catalog.decrement_stock(product_id).map_err(|err| {
                warn!(order_id, product_id, error = %err, "Approval refused");
                err
            })?;
            debug!(product_id, remaining, "Stock committed");
        }

        // Pending was checked under this same guard, so this cannot be refused.
        let order = stores.ledger.set_status(order_id, decision.into())?;

        info!(order_id, product_id, status = ?order.status, "Resolved order");
        Ok(order)
    }

    pub async fn get_order(&self, order_id: u64) -> Result<Order, InventoryError> {
        let stores = self.stores.lock().await;
        stores
            .ledger
            .get(order_id)
            .cloned()
            .ok_or(InventoryError::OrderNotFound(order_id))
    }

    /// Pending orders joined with each product's live stock.
    pub async fn pending_orders(&self) -> Vec<PendingOrder> {
        let stores = self.stores.lock().await;
        let pending: Vec<PendingOrder> = stores
            .ledger
            .list_pending()
            .into_iter()
            .map(|order| {
                let product_stock = stores
                    .catalog
                    .get(order.product_id)
                    .map_or(0, |p| p.stock);
                PendingOrder {
                    order,
                    product_stock,
                }
            })
            .collect();
        debug!(
            pending = pending.len(),
            total = stores.ledger.len(),
            "Listed pending orders"
        );
        pending
    }

    pub async fn approved_orders_for(&self, user_id: &str) -> Vec<Order> {
        let stores = self.stores.lock().await;
        stores.ledger.list_approved_for_user(user_id)
    }

    // ── Catalog ───────────────────────────────────────────────────────────────

    pub async fn create_product(&self, input: ProductInput) -> Result<Product, InventoryError> {
        let product = self.stores.lock().await.catalog.create(input)?;
        info!(id = product.id, name = %product.name, stock = product.stock, "Created product");
        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: u64,
        input: ProductInput,
    ) -> Result<Product, InventoryError> {
        let product = self.stores.lock().await.catalog.update(id, input)?;
        info!(id, stock = product.stock, "Updated product");
        Ok(product)
    }

    /// Pending orders that reference the product are left as they are.
    pub async fn delete_product(&self, id: u64) -> Result<Product, InventoryError> {
        let product = self.stores.lock().await.catalog.delete(id)?;
        info!(id, "Deleted product");
        Ok(product)
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.stores.lock().await.catalog.list()
    }

    pub async fn get_product(&self, id: u64) -> Result<Product, InventoryError> {
        self.stores
            .lock()
            .await
            .catalog
            .get(id)
            .cloned()
            .ok_or(InventoryError::ProductNotFound(id))
    }

    pub async fn product_count(&self) -> usize {
        self.stores.lock().await.catalog.len()
    }
}
