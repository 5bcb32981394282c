use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Catalog entry. `stock` is only ever lowered by order approval or replaced
/// wholesale by an admin edit, so it can never go below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Replace every editable field, keeping `id`.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.images = fields.images;
        self.stock = fields.stock;
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of both the create and the edit request. Unknown keys are refused.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Signed so a negative value reaches validation instead of failing to parse.
    pub stock: i64,
}

/// Validated product fields, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub stock: u32,
}

impl ProductInput {
    pub fn validate(self) -> Result<ProductFields, InventoryError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(InventoryError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(InventoryError::InvalidInput(
                "price must be > 0".to_string(),
            ));
        }
        if self.stock < 0 {
            return Err(InventoryError::InvalidInput(
                "stock must be >= 0".to_string(),
            ));
        }
        let stock = u32::try_from(self.stock)
            .map_err(|_| InventoryError::InvalidInput("stock is too large".to_string()))?;

        Ok(ProductFields {
            name,
            description: self.description.trim().to_string(),
            price: self.price,
            images: self.images,
            stock,
        })
    }
}
