//! ML Forecast Client
//!
//! Client for the optional machine-learning prediction microservice. The
//! service supplies richer stockout/overstock scores merged into product
//! summaries; any failure here degrades the summary, never aborts it.

use reqwest::Client;
use serde::Deserialize;
use shared::MlPrediction;
use std::time::Duration;

use crate::config::MlConfig;
use crate::error::{AppError, AppResult};

/// Client for the ML forecast microservice
#[derive(Clone)]
pub struct MlForecastClient {
    api_endpoint: String,
    api_key: Option<String>,
    http_client: Client,
}

/// Response from the prediction API
#[derive(Debug, Deserialize)]
struct PredictResponse {
    stockout_score: f64,
    overstock_score: f64,
    coverage_days: f64,
    demand_14d: f64,
    trend: String,
    recommendation: String,
    confidence: f64,
}

impl From<PredictResponse> for MlPrediction {
    fn from(r: PredictResponse) -> Self {
        MlPrediction {
            stockout_score: r.stockout_score,
            overstock_score: r.overstock_score,
            coverage_days: r.coverage_days,
            demand_14d: r.demand_14d,
            trend: r.trend,
            recommendation: r.recommendation,
            confidence: r.confidence,
        }
    }
}

impl MlForecastClient {
    /// Create a new ML forecast client
    pub fn new(api_endpoint: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint,
            api_key,
            http_client,
        })
    }

    /// Create a client from configuration; None when no endpoint is set
    pub fn from_config(config: &MlConfig) -> Option<Self> {
        let endpoint = config.endpoint.clone()?;
        Self::new(
            endpoint,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
        .ok()
    }

    /// Fetch the prediction for one product
    pub async fn predict(&self, product_id: i64) -> AppResult<MlPrediction> {
        let url = format!("{}/predict/{}", self.api_endpoint, product_id);

        let mut request = self.http_client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::MlForecastError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::MlForecastError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: PredictResponse = response
            .json()
            .await
            .map_err(|e| AppError::MlForecastError(format!("Failed to parse response: {}", e)))?;

        Ok(result.into())
    }
}
