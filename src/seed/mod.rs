use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::engine::InventoryEngine;
use crate::error::InventoryError;
use crate::models::{Product, ProductInput};

static ADJECTIVES: &[&str] = &[
    "Premium", "Deluxe", "Ultra", "Pro", "Classic", "Elite", "Smart", "Eco",
    "Compact", "Portable", "Heavy-Duty", "Lightweight", "Advanced", "Basic",
    "Signature", "Exclusive", "Standard", "Mini", "Turbo", "Silent",
];

static NOUNS: &[&str] = &[
    "Widget", "Gadget", "Device", "Module", "Kit", "Bundle", "Console",
    "Panel", "Sensor", "Controller", "Adapter", "Monitor", "Scanner",
    "Receiver", "Amplifier", "Filter", "Regulator", "Indicator",
];

/// Adjective + noun + serial suffix.
fn random_product_name(rng: &mut impl Rng, serial: usize) -> String {
    let adj = ADJECTIVES.choose(rng).unwrap_or(&"Standard");
    let noun = NOUNS.choose(rng).unwrap_or(&"Widget");
    format!("{} {} #{:04}", adj, noun, serial)
}

fn random_input(rng: &mut impl Rng, serial: usize) -> ProductInput {
    let name = random_product_name(rng, serial);
    ProductInput {
        description: format!("Demo listing for {}", name),
        name,
        // whole cents between 0.99 and 999.99
        price: f64::from(rng.gen_range(99_u32..=99_999)) / 100.0,
        images: Vec::new(),
        stock: rng.gen_range(0..=25),
    }
}

/// Fills the catalog with `count` random products through the normal create path.
pub async fn seed_catalog(
    engine: &InventoryEngine,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Product>, InventoryError> {
    info!("Seeding {} products...", count);

    let mut created = Vec::with_capacity(count);
    for serial in 1..=count {
        created.push(engine.create_product(random_input(rng, serial)).await?);
    }

    info!(
        seeded = created.len(),
        total = engine.product_count().await,
        "Seeding complete"
    );
    Ok(created)
}
