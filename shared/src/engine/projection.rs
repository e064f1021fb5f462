//! Day-by-day demand projection

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{ForecastPoint, Trend};

use super::consumption::fallback_profile;
use super::policy::ForecastPolicy;

/// Project demand per day over the horizon, starting tomorrow
///
/// The projected quantity is the trend-adjusted daily rate, constant across
/// the horizon; only confidence varies, decaying with distance from today.
/// A non-positive daily rate substitutes the fallback profile (rate and
/// trend) so the projection is never empty or zeroed-out.
pub fn project_demand(
    product_id: i64,
    current_stock: Decimal,
    daily_rate: Decimal,
    trend: Trend,
    horizon_days: i64,
    today: NaiveDate,
    policy: &ForecastPolicy,
) -> Vec<ForecastPoint> {
    let (daily, trend) = if daily_rate <= Decimal::ZERO {
        fallback_profile(product_id, current_stock)
    } else {
        (daily_rate, trend)
    };

    let factor = match trend {
        Trend::Growing => policy.growth_factor,
        Trend::Declining => policy.decline_factor,
        Trend::Stable => Decimal::ONE,
    };
    let projected = daily * factor;

    (1..=horizon_days.max(0))
        .map(|day| ForecastPoint {
            date: today + Days::new(day as u64),
            projected_quantity: projected,
            confidence: (policy.confidence_max - policy.confidence_decay_per_day * day as i32)
                .max(policy.confidence_min),
        })
        .collect()
}
