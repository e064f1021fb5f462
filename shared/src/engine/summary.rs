//! Per-product summary assembly

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DailyOutflow, LotTally, ProductSummary, DEFAULT_UNIT};

use super::alerts::{generate_alerts, AlertContext};
use super::consumption::{classify_trend, moving_average};
use super::policy::ForecastPolicy;
use super::priority::priority_score;
use super::projection::project_demand;
use super::risk::{days_until_stockout, overstock_risk};

/// Everything the engine needs to know about one product, read from the
/// inventory store in a single pass
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub product_id: i64,
    pub name: String,
    pub unit: Option<String>,
    pub unit_price: Option<Decimal>,
    /// Sum of lot quantities with quantity > 0
    pub current_stock: Decimal,
    /// Per-day outflow totals over the trailing window, chronological
    pub daily_outflow: Vec<DailyOutflow>,
    /// Expiration of the earliest-expiring lot with stock, if any
    pub oldest_expiry: Option<NaiveDate>,
    pub expired: LotTally,
    pub expiring_soon: LotTally,
}

/// Assemble the full analytics summary for one product
///
/// A single side-effect-free pipeline: the moving average and trend are
/// computed once and shared by the stockout, overstock, alert, priority and
/// projection steps. The caller merges ML augmentation separately.
pub fn summarize(
    snapshot: &ProductSnapshot,
    policy: &ForecastPolicy,
    today: NaiveDate,
) -> ProductSummary {
    let stock = snapshot.current_stock;

    let window_total = moving_average(
        &snapshot.daily_outflow,
        snapshot.product_id,
        stock,
        policy,
    );
    // The window total over window_days recovers a daily rate in both the
    // real-data and fallback branches; see moving_average.
    let daily_rate = window_total
        .checked_div(Decimal::from(policy.window_days))
        .unwrap_or(Decimal::ZERO);

    let trend = classify_trend(&snapshot.daily_outflow, snapshot.product_id, stock, policy);

    let stockout_days = days_until_stockout(stock, daily_rate, policy.horizon_days);

    let (risk, risk_reason) = overstock_risk(
        stock,
        daily_rate,
        trend,
        snapshot.oldest_expiry,
        today,
        policy,
    );

    let alerts = generate_alerts(
        &AlertContext {
            expired: snapshot.expired,
            expiring_soon: snapshot.expiring_soon,
            days_until_stockout: stockout_days,
            overstock_risk: risk,
            overstock_reason: risk_reason,
            trend,
        },
        policy,
    );

    let forecast_7d = project_demand(
        snapshot.product_id,
        stock,
        daily_rate,
        trend,
        policy.summary_forecast_days,
        today,
        policy,
    );

    ProductSummary {
        product_id: snapshot.product_id,
        product_name: snapshot.name.clone(),
        unit: snapshot
            .unit
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        unit_price: snapshot.unit_price,
        current_stock: stock,
        average_daily_consumption: daily_rate,
        days_until_stockout: stockout_days,
        trend,
        overstock_risk: risk,
        priority_score: priority_score(stockout_days, risk, trend),
        alerts,
        forecast_7d,
        ml_predictions: None,
        ml_priority_score: None,
        ml_error: None,
    }
}
