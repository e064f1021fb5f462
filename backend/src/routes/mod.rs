//! Route definitions for the Perishable Inventory Analytics Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Forecast & risk summaries
        .nest("/forecasts", forecast_routes())
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/summaries", get(handlers::get_all_summaries))
        .route(
            "/products/:product_id/summary",
            get(handlers::get_product_summary),
        )
}
