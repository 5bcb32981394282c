use indexmap::IndexMap;

use crate::error::InventoryError;
use crate::models::{Product, ProductInput};

/// Owns every [`Product`]. Iteration follows insertion order.
///
/// Ids come from a high-water mark rather than the current maximum, so an id
/// stays retired after its product is deleted, even if it was the newest one.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: IndexMap<u64, Product>,
    last_id: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates before allocating, so a rejected input never consumes an id.
    pub fn create(&mut self, input: ProductInput) -> Result<Product, InventoryError> {
        let fields = input.validate()?;

        let id = self.last_id + 1;
        let product = Product {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            images: fields.images,
            stock: fields.stock,
        };
        self.last_id = id;
        self.products.insert(id, product.clone());
        Ok(product)
    }

    pub fn update(&mut self, id: u64, input: ProductInput) -> Result<Product, InventoryError> {
        let fields = input.validate()?;
        let product = self
            .products
            .get_mut(&id)
            .ok_or(InventoryError::ProductNotFound(id))?;
        product.apply(fields);
        Ok(product.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Product, InventoryError> {
        // shift_remove keeps the remaining entries in insertion order
        self.products
            .shift_remove(&id)
            .ok_or(InventoryError::ProductNotFound(id))
    }

    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Takes one unit out of stock and returns what is left. Leaves the
    /// product untouched when it is missing or already at zero.
    pub fn decrement_stock(&mut self, id: u64) -> Result<u32, InventoryError> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(InventoryError::ProductNotFound(id))?;
        product.stock = product
            .stock
            .checked_sub(1)
            .ok_or(InventoryError::InsufficientStock(id))?;
        Ok(product.stock)
    }

    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }
}
