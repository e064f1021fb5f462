//! Forecast policy constants
//!
//! Every heuristic threshold of the engine lives here with a documented
//! default, so deployments can tune the policy from configuration without
//! touching the algorithms.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Tunable thresholds for the forecasting & risk engine
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastPolicy {
    /// Trailing window of outflow history fed to the estimators (days)
    pub window_days: i64,

    /// Forecast horizon for stockout prediction and demand projection (days)
    pub horizon_days: i64,

    /// Length of the forecast slice embedded in a product summary (days)
    pub summary_forecast_days: i64,

    /// Minimum distinct days of outflow data required to classify a trend
    pub min_trend_days: usize,

    /// Percent change above which the trend is growing
    pub growth_threshold_pct: Decimal,

    /// Percent change below which the trend is declining
    pub decline_threshold_pct: Decimal,

    /// Safety stock expressed in days of average consumption
    pub safety_stock_days: i64,

    /// Minimum stock expressed in days of average consumption
    pub minimum_stock_days: i64,

    /// Stock ceiling expressed in days of average consumption; stock above
    /// it counts as surplus
    pub maximum_stock_days: i64,

    /// Risk points added when the trend is declining
    pub declining_trend_penalty: i64,

    /// Risk points added when the oldest lot expires within
    /// `near_expiry_days`
    pub near_expiry_penalty: i64,

    /// Days before expiration of the oldest lot that raise overstock risk
    pub near_expiry_days: i64,

    /// Days ahead checked by the expiring-soon alert (inclusive)
    pub expiring_soon_days: i64,

    /// Stockout alert fires when the predicted days are at or below this
    pub stockout_alert_days: i64,

    /// Stockout alert escalates to danger at or below this many days
    pub urgent_stockout_days: i64,

    /// Demand multiplier applied when the trend is growing
    pub growth_factor: Decimal,

    /// Demand multiplier applied when the trend is declining
    pub decline_factor: Decimal,

    /// Confidence of the first projected day (percent)
    pub confidence_max: i32,

    /// Confidence floor over any horizon (percent)
    pub confidence_min: i32,

    /// Confidence lost per projected day (percent)
    pub confidence_decay_per_day: i32,
}

impl Default for ForecastPolicy {
    fn default() -> Self {
        Self {
            window_days: 30,
            horizon_days: 30,
            summary_forecast_days: 7,
            min_trend_days: 7,
            growth_threshold_pct: Decimal::from(10),
            decline_threshold_pct: Decimal::from(-10),
            safety_stock_days: 7,
            minimum_stock_days: 14,
            maximum_stock_days: 30,
            declining_trend_penalty: 15,
            near_expiry_penalty: 15,
            near_expiry_days: 14,
            expiring_soon_days: 2,
            stockout_alert_days: 7,
            urgent_stockout_days: 3,
            growth_factor: Decimal::new(115, 2),
            decline_factor: Decimal::new(85, 2),
            confidence_max: 95,
            confidence_min: 50,
            confidence_decay_per_day: 2,
        }
    }
}
