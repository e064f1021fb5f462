//! Health check handler
//!
//! Reports liveness of the analytics server and reachability of the
//! inventory store it reads from.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Result of the inventory store probe
    pub store: &'static str,
}

/// Probe the inventory store and report overall health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_ok = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(&state.db)
        .await
        .is_ok();

    Json(report(store_ok))
}

fn report(store_ok: bool) -> HealthResponse {
    HealthResponse {
        status: if store_ok { "healthy" } else { "degraded" },
        service: "perishable-inventory-analytics",
        version: env!("CARGO_PKG_VERSION"),
        store: if store_ok { "reachable" } else { "unreachable" },
    }
}
