//! HTTP handlers for forecast and summary endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use shared::ProductSummary;

use crate::error::AppResult;
use crate::services::{ForecastService, StockStore};
use crate::AppState;

fn forecast_service(state: AppState) -> ForecastService {
    ForecastService::new(
        StockStore::new(state.db),
        state.ml,
        state.config.forecast.clone(),
    )
}

/// Get the analytics summary for one product
pub async fn get_product_summary(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ProductSummary>> {
    let service = forecast_service(state);
    let summary = service.get_product_summary(product_id).await?;
    Ok(Json(summary))
}

/// Get summaries for all products, ranked by priority descending
pub async fn get_all_summaries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductSummary>>> {
    let service = forecast_service(state);
    let summaries = service.get_all_summaries().await?;
    Ok(Json(summaries))
}
