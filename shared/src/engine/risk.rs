//! Stockout prediction and overstock risk scoring

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Trend;

use super::policy::ForecastPolicy;

/// Sentinel for "no stockout foreseen within the horizon"
pub const NO_STOCKOUT: i64 = -1;

/// Risk assigned when stock sits idle with no measurable consumption
const IDLE_STOCK_RISK: i64 = 80;

/// Base risk once stock exceeds the ceiling
const SURPLUS_BASE_RISK: i64 = 40;

/// Cap on the surplus-proportional part of the risk
const SURPLUS_RISK_SPAN: i64 = 60;

/// Days until the stock of a product reaches zero
///
/// Returns `NO_STOCKOUT` when there is no measurable consumption or the
/// stockout falls beyond the horizon, 0 when the product is already out,
/// and floor(stock / daily_rate) otherwise.
pub fn days_until_stockout(current_stock: Decimal, daily_rate: Decimal, horizon_days: i64) -> i64 {
    if daily_rate <= Decimal::ZERO {
        return NO_STOCKOUT;
    }
    if current_stock <= Decimal::ZERO {
        return 0;
    }

    let days = match current_stock.checked_div(daily_rate) {
        Some(d) => d,
        None => return NO_STOCKOUT,
    };

    if days > Decimal::from(horizon_days) {
        return NO_STOCKOUT;
    }

    days.floor().to_i64().unwrap_or(NO_STOCKOUT)
}

/// Overstock risk percentage and its reasons
///
/// Thresholds are multiples of the average daily consumption: safety,
/// minimum and maximum stock in days of cover. Stock above the ceiling is
/// scored against the surplus ratio, then bumped for declining demand and
/// for an oldest lot close to expiration. Always within [0, 100].
pub fn overstock_risk(
    current_stock: Decimal,
    daily_rate: Decimal,
    trend: Trend,
    oldest_expiry: Option<NaiveDate>,
    today: NaiveDate,
    policy: &ForecastPolicy,
) -> (u8, String) {
    if daily_rate <= Decimal::ZERO {
        if current_stock > Decimal::ZERO {
            return (
                IDLE_STOCK_RISK as u8,
                "No recent consumption with stock on hand".to_string(),
            );
        }
        return (0, "No stock and no consumption".to_string());
    }

    let maximum = StockThresholds::from_daily_rate(daily_rate, policy).maximum;

    if current_stock <= maximum {
        return (0, format!("Stock within normal ceiling (<= max {})", trunc(maximum)));
    }

    let surplus = current_stock - maximum;
    let surplus_ratio = surplus.checked_div(maximum).unwrap_or(Decimal::ZERO);
    let surplus_points = (surplus_ratio * Decimal::from(100))
        .trunc()
        .to_i64()
        .unwrap_or(SURPLUS_RISK_SPAN);

    let mut risk = SURPLUS_BASE_RISK + surplus_points.min(SURPLUS_RISK_SPAN);
    let mut reasons = vec![
        format!("Stock {} > max {}", trunc(current_stock), trunc(maximum)),
        format!("Surplus {}", trunc(surplus)),
    ];

    if trend == Trend::Declining {
        risk += policy.declining_trend_penalty;
        reasons.push("Declining demand".to_string());
    }

    if let Some(expiry) = oldest_expiry {
        let days_left = (expiry - today).num_days();
        if days_left < policy.near_expiry_days {
            risk += policy.near_expiry_penalty;
            reasons.push(format!("Expires in {} days", days_left));
        }
    }

    (risk.clamp(0, 100) as u8, reasons.join(" + "))
}

/// Safety / minimum / alert / maximum stock levels in units, derived from
/// the average daily consumption
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockThresholds {
    pub safety: Decimal,
    pub minimum: Decimal,
    pub alert: Decimal,
    pub maximum: Decimal,
}

impl StockThresholds {
    pub fn from_daily_rate(daily_rate: Decimal, policy: &ForecastPolicy) -> Self {
        let safety = daily_rate * Decimal::from(policy.safety_stock_days);
        let minimum = daily_rate * Decimal::from(policy.minimum_stock_days);
        Self {
            safety,
            minimum,
            alert: minimum + safety,
            maximum: daily_rate * Decimal::from(policy.maximum_stock_days),
        }
    }
}

fn trunc(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(0)
}
