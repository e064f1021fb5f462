//! Consumption estimation: fallback profile, moving average and trend

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{DailyOutflow, Trend};

use super::policy::ForecastPolicy;

/// Synthetic daily consumption profile for products without usable history
///
/// Pure and deterministic: the same (product_id, stock) pair always yields
/// the same (rate, trend), which keeps downstream estimates reproducible
/// across runs. The base rate is 1 to 12 units per day.
pub fn fallback_profile(product_id: i64, current_stock: Decimal) -> (Decimal, Trend) {
    let seed = (product_id.wrapping_mul(37)).rem_euclid(100);

    let raw = Decimal::from(seed.rem_euclid(10)) + current_stock / Decimal::from(50);
    let base_daily = raw.trunc().to_i64().unwrap_or(0).clamp(1, 12);

    let trend = match product_id.rem_euclid(3) {
        0 => Trend::Growing,
        1 => Trend::Stable,
        _ => Trend::Declining,
    };

    (Decimal::from(base_daily), trend)
}

/// Moving average of daily outflow over the trailing window
///
/// With fewer than 2 days of data the fallback profile engages and the
/// result is `base_rate * window_days`, a window total. With real data the
/// result is the mean of the per-day totals. Callers divide by
/// `window_days` in both branches to recover a daily rate; that convention
/// is load-bearing and must not change independently of this function.
pub fn moving_average(
    series: &[DailyOutflow],
    product_id: i64,
    current_stock: Decimal,
    policy: &ForecastPolicy,
) -> Decimal {
    if series.len() < 2 {
        let (base_daily, _) = fallback_profile(product_id, current_stock);
        return base_daily * Decimal::from(policy.window_days);
    }

    let total: Decimal = series.iter().map(|d| d.total).sum();
    match total.checked_div(Decimal::from(series.len() as i64)) {
        Some(mean) => mean,
        None => Decimal::ZERO,
    }
}

/// Classify the consumption trend over the trailing window
///
/// Splits the chronologically ordered per-day totals in half (odd counts put
/// the extra day in the later half) and compares period means. Requires
/// `min_trend_days` distinct days of data; otherwise the fallback trend
/// engages. A zero earlier-half mean reads as stable.
pub fn classify_trend(
    series: &[DailyOutflow],
    product_id: i64,
    current_stock: Decimal,
    policy: &ForecastPolicy,
) -> Trend {
    if series.len() < policy.min_trend_days {
        let (_, trend) = fallback_profile(product_id, current_stock);
        return trend;
    }

    let mid = series.len() / 2;
    let earlier = &series[..mid];
    let later = &series[mid..];

    let earlier_mean = match mean(earlier) {
        Some(m) => m,
        None => return Trend::Stable,
    };
    let later_mean = match mean(later) {
        Some(m) => m,
        None => return Trend::Stable,
    };

    if earlier_mean <= Decimal::ZERO {
        return Trend::Stable;
    }

    let pct_change = match (later_mean - earlier_mean).checked_div(earlier_mean) {
        Some(ratio) => ratio * Decimal::from(100),
        None => return Trend::Stable,
    };

    if pct_change > policy.growth_threshold_pct {
        Trend::Growing
    } else if pct_change < policy.decline_threshold_pct {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean(series: &[DailyOutflow]) -> Option<Decimal> {
    if series.is_empty() {
        return None;
    }
    let total: Decimal = series.iter().map(|d| d.total).sum();
    total.checked_div(Decimal::from(series.len() as i64))
}
