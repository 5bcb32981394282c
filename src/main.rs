use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

mod auth;
mod config;
mod engine;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::auth::AccessGuard;
use crate::config::Config;
use crate::engine::InventoryEngine;

/// Shared application state. Cheap to clone, everything sits behind `Arc`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub engine: Arc<InventoryEngine>,
    pub access: Arc<AccessGuard>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,storefront_service=debug")
            }),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Storefront service starting (in-memory catalog and order ledger)");

    let engine = Arc::new(InventoryEngine::default());
    if config.seed_count > 0 {
        let mut rng = StdRng::from_entropy();
        seed::seed_catalog(&engine, config.seed_count, &mut rng).await?;
    }

    let state = AppState {
        engine,
        access: Arc::new(AccessGuard::from_config(&config)),
    };

    let app = build_router(state, &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!(static_dir = %config.static_dir, "Serving storefront pages");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Session ─────────────────────────────────────────────────────────
        .route("/api/login", post(handlers::session::login))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product))
        .route(
            "/api/admin/products",
            post(handlers::products::create_product),
        )
        .route(
            "/api/admin/products/:id",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )

        // ── Orders ──────────────────────────────────────────────────────────
        .route("/api/orders", post(handlers::orders::place_order))
        .route(
            "/api/orders/:user_id",
            get(handlers::orders::approved_orders),
        )
        .route("/api/admin/orders", get(handlers::orders::pending_orders))
        .route(
            "/api/admin/orders/:id",
            get(handlers::orders::get_order).put(handlers::orders::resolve_order),
        )

        // ── Storefront pages ────────────────────────────────────────────────
        .fallback_service(ServeDir::new(static_dir))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
