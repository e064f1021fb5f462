//! Forecast orchestration service
//!
//! Gathers one read-only snapshot per product, runs the pure engine over it
//! and merges the optional ML augmentation. Batch assembly fans out one task
//! per product with a collection barrier before the final ranking; one
//! product's failure never cancels the others.

use chrono::{NaiveDate, Utc};
use tokio::task::JoinSet;

use shared::{
    ml_weighted_priority, rank_summaries, summarize, ForecastPolicy, ProductSnapshot,
    ProductSummary,
};

use crate::error::AppResult;
use crate::external::MlForecastClient;

use super::store::StockStore;

/// Forecasting & risk service for product summaries
#[derive(Clone)]
pub struct ForecastService {
    store: StockStore,
    ml: Option<MlForecastClient>,
    policy: ForecastPolicy,
}

impl ForecastService {
    pub fn new(store: StockStore, ml: Option<MlForecastClient>, policy: ForecastPolicy) -> Self {
        Self { store, ml, policy }
    }

    /// Assemble the full analytics summary for one product
    pub async fn get_product_summary(&self, product_id: i64) -> AppResult<ProductSummary> {
        let today = Utc::now().date_naive();
        let snapshot = self.fetch_snapshot(product_id, today).await?;
        let mut summary = summarize(&snapshot, &self.policy, today);

        if let Some(ml) = &self.ml {
            match ml.predict(product_id).await {
                Ok(prediction) => {
                    summary.ml_priority_score = Some(ml_weighted_priority(&prediction));
                    summary.ml_predictions = Some(prediction);
                }
                Err(e) => {
                    tracing::warn!(product_id, error = %e, "ML prediction failed, continuing without it");
                    summary.ml_error = Some(e.to_string());
                }
            }
        }

        Ok(summary)
    }

    /// Assemble summaries for every product, ranked by priority descending
    ///
    /// Products are analyzed as independent tasks; failures are logged and
    /// the product skipped. Ties in priority keep original product order.
    pub async fn get_all_summaries(&self) -> AppResult<Vec<ProductSummary>> {
        let product_ids = self.store.product_ids().await?;

        let mut tasks = JoinSet::new();
        for product_id in product_ids {
            let service = self.clone();
            tasks.spawn(async move { (product_id, service.get_product_summary(product_id).await) });
        }

        let mut summaries = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(summary))) => summaries.push(summary),
                Ok((product_id, Err(e))) => {
                    tracing::warn!(product_id, error = %e, "skipping product summary");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "summary task failed");
                }
            }
        }

        Ok(rank_summaries(summaries))
    }

    /// Read everything the engine needs about one product in a single pass
    async fn fetch_snapshot(&self, product_id: i64, today: NaiveDate) -> AppResult<ProductSnapshot> {
        let metadata = self.store.product_metadata(product_id).await?;
        let current_stock = self.store.stock_of(product_id).await?;

        let since = today - chrono::Days::new(self.policy.window_days.max(0) as u64);
        let daily_outflow = self.store.outflow_series(product_id, since).await?;

        let oldest_expiry = self.store.oldest_lot_expiry(product_id).await?;
        let expired = self.store.expired_lots(product_id, today).await?;
        let expiring_soon = self
            .store
            .soon_expiring_lots(product_id, today, self.policy.expiring_soon_days)
            .await?;

        Ok(ProductSnapshot {
            product_id,
            name: metadata.name,
            unit: metadata.unit,
            unit_price: metadata.unit_price,
            current_stock,
            daily_outflow,
            oldest_expiry,
            expired,
            expiring_soon,
        })
    }
}
