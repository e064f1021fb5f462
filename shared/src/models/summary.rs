//! Product summary and ML augmentation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Alert, ForecastPoint, Trend};

/// Aggregated analytics output for one product
///
/// Assembled per request from the engine outputs; the optional ML fields are
/// merged in when the external prediction service is configured and answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_id: i64,
    pub product_name: String,
    pub unit: String,
    pub unit_price: Option<Decimal>,
    pub current_stock: Decimal,
    pub average_daily_consumption: Decimal,
    /// Days until stock reaches zero, or -1 when no stockout is foreseen
    /// within the horizon
    pub days_until_stockout: i64,
    pub trend: Trend,
    /// Overstock risk percentage, 0-100
    pub overstock_risk: u8,
    pub alerts: Vec<Alert>,
    /// Priority score for operator attention, 0-100
    pub priority_score: u8,
    pub forecast_7d: Vec<ForecastPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_predictions: Option<MlPrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_priority_score: Option<u8>,
    /// Error text from the ML collaborator, attached instead of failing the
    /// summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_error: Option<String>,
}

/// Prediction returned by the optional ML forecasting service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlPrediction {
    pub stockout_score: f64,
    pub overstock_score: f64,
    pub coverage_days: f64,
    pub demand_14d: f64,
    pub trend: String,
    pub recommendation: String,
    pub confidence: f64,
}
