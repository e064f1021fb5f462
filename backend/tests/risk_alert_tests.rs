//! Risk scoring, alert generation and ranking tests
//!
//! Tests for the decision-support half of the engine including:
//! - Overstock risk bounds and reasons
//! - Priority score bounds
//! - Alert generation scenarios
//! - Summary ranking order and tie stability

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::{
    generate_alerts, ml_weighted_priority, overstock_risk, priority_score, rank_summaries,
    summarize, Alert, AlertContext, AlertKind, AlertLevel, DailyOutflow, ForecastPolicy, LotTally,
    MlPrediction, ProductSnapshot, ProductSummary, Trend, NO_STOCKOUT,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn policy() -> ForecastPolicy {
    ForecastPolicy::default()
}

fn snapshot(product_id: i64, stock: i64) -> ProductSnapshot {
    ProductSnapshot {
        product_id,
        name: format!("Product {}", product_id),
        unit: Some("kg".to_string()),
        unit_price: None,
        current_stock: Decimal::from(stock),
        daily_outflow: Vec::new(),
        oldest_expiry: None,
        expired: LotTally::default(),
        expiring_soon: LotTally::default(),
    }
}

fn steady_outflow(per_day: i64, days: usize) -> Vec<DailyOutflow> {
    let start = today() - Days::new(days as u64);
    (0..days)
        .map(|i| DailyOutflow {
            date: start + Days::new(i as u64),
            total: Decimal::from(per_day),
        })
        .collect()
}

fn alert_of(alerts: &[Alert], kind: AlertKind) -> Option<&Alert> {
    alerts.iter().find(|a| a.kind == kind)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Scenario: stock 500 against a daily rate of 10 exceeds the 300-unit
    /// ceiling; risk is positive and the reason lists stock, max and surplus
    #[test]
    fn test_overstock_scenario_surplus() {
        let (risk, reason) = overstock_risk(
            Decimal::from(500),
            Decimal::from(10),
            Trend::Stable,
            None,
            today(),
            &policy(),
        );
        assert!(risk > 0);
        assert!(reason.contains("Stock 500"));
        assert!(reason.contains("max 300"));
        assert!(reason.contains("Surplus 200"));
    }

    /// Idle stock with no consumption still scores high
    #[test]
    fn test_overstock_idle_stock() {
        let (risk, reason) = overstock_risk(
            Decimal::from(10),
            Decimal::ZERO,
            Trend::Stable,
            None,
            today(),
            &policy(),
        );
        assert_eq!(risk, 80);
        assert!(reason.contains("No recent consumption"));
    }

    /// Priority bounds at the extremes
    #[test]
    fn test_priority_extremes() {
        // Imminent stockout on a growing product maxes out
        assert_eq!(priority_score(1, 0, Trend::Growing), 100);
        // Heavy overstock on a declining product bottoms out at 15
        assert_eq!(priority_score(NO_STOCKOUT, 100, Trend::Declining), 15);
    }

    /// Scenario: stock of 1 with no outflow history engages the fallback;
    /// a stockout alert appears when the predicted days are within a week
    #[test]
    fn test_scenario_tight_stock_no_history() {
        let snap = snapshot(13, 1);
        let summary = summarize(&snap, &policy(), today());

        // Fallback rate is at least 1/day, so days is in [0, horizon]
        assert!(summary.days_until_stockout >= 0);
        assert!(summary.days_until_stockout <= policy().horizon_days);
        if summary.days_until_stockout <= policy().stockout_alert_days {
            assert!(alert_of(&summary.alerts, AlertKind::Stockout).is_some());
        }
    }

    /// Scenario: one lot expired yesterday, one expiring tomorrow; both
    /// alerts fire for the same product
    #[test]
    fn test_scenario_expired_and_expiring_lots() {
        let mut snap = snapshot(4, 10);
        snap.expired = LotTally { lots: 1, quantity: 5 };
        snap.expiring_soon = LotTally { lots: 1, quantity: 5 };
        snap.oldest_expiry = Some(today() - Days::new(1));

        let summary = summarize(&snap, &policy(), today());
        let expired = alert_of(&summary.alerts, AlertKind::Expired).unwrap();
        assert_eq!(expired.level, AlertLevel::Danger);
        let expiring = alert_of(&summary.alerts, AlertKind::ExpiringSoon).unwrap();
        assert_eq!(expiring.level, AlertLevel::Warning);
    }

    /// A steadily consumed, comfortably stocked product raises no overstock
    /// or stockout alert
    #[test]
    fn test_quiet_product_summary() {
        let mut snap = snapshot(1, 200);
        // Real history: mean total 300/day over the window -> daily rate 10
        snap.daily_outflow = steady_outflow(300, 20);
        let summary = summarize(&snap, &policy(), today());

        assert_eq!(summary.average_daily_consumption, Decimal::from(10));
        assert_eq!(summary.days_until_stockout, 20);
        assert_eq!(summary.overstock_risk, 0);
        assert!(alert_of(&summary.alerts, AlertKind::Overstock).is_none());
        assert!(alert_of(&summary.alerts, AlertKind::Stockout).is_none());
        assert_eq!(summary.trend, Trend::Stable);
    }

    /// Declining trend stacks an extra risk bump and its own info alert
    #[test]
    fn test_declining_product_alerts() {
        let mut snap = snapshot(1, 2000);
        let mut series = steady_outflow(600, 10);
        for point in series.iter_mut().skip(5) {
            point.total = Decimal::from(60);
        }
        snap.daily_outflow = series;
        let summary = summarize(&snap, &policy(), today());

        assert_eq!(summary.trend, Trend::Declining);
        assert!(alert_of(&summary.alerts, AlertKind::DecliningDemand).is_some());
        // The declining bump is visible in the overstock reason
        assert!(summary.overstock_risk > 0);
    }

    /// Ranking sorts by priority descending and keeps product order on ties
    #[test]
    fn test_ranking_order_and_stability() {
        let mut summaries = Vec::new();
        for (id, priority) in [(1, 40), (2, 90), (3, 40), (4, 70)] {
            let mut summary = summarize(&snapshot(id, 10), &policy(), today());
            summary.priority_score = priority;
            summaries.push(summary);
        }

        let ranked = rank_summaries(summaries);
        let order: Vec<(i64, u8)> = ranked
            .iter()
            .map(|s| (s.product_id, s.priority_score))
            .collect();
        assert_eq!(order, vec![(2, 90), (4, 70), (1, 40), (3, 40)]);
    }

    /// ML blend favors stockout urgency over overstock headroom
    #[test]
    fn test_ml_weighted_priority() {
        let prediction = MlPrediction {
            stockout_score: 50.0,
            overstock_score: 50.0,
            coverage_days: 10.0,
            demand_14d: 70.0,
            trend: "stable".to_string(),
            recommendation: "hold".to_string(),
            confidence: 0.9,
        };
        // 0.6 * 50 + 0.4 * 50 = 50
        assert_eq!(ml_weighted_priority(&prediction), 50);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn stock_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=100_000i64).prop_map(Decimal::from)
    }

    fn rate_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=10_000i64).prop_map(|n| Decimal::new(n, 1))
    }

    fn trend_strategy() -> impl Strategy<Value = Trend> {
        prop_oneof![
            Just(Trend::Growing),
            Just(Trend::Stable),
            Just(Trend::Declining)
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Overstock risk is always within [0, 100]
        #[test]
        fn prop_overstock_risk_bounded(
            stock in stock_strategy(),
            rate in rate_strategy(),
            trend in trend_strategy(),
            expiry_offset in 0i64..=60
        ) {
            let (risk, reason) = overstock_risk(
                stock,
                rate,
                trend,
                Some(today() + Days::new(expiry_offset as u64)),
                today(),
                &policy(),
            );
            prop_assert!(risk <= 100);
            prop_assert!(!reason.is_empty());
        }

        /// Priority score is always within [0, 100]
        #[test]
        fn prop_priority_bounded(
            days in -1i64..=60,
            risk in 0u8..=100,
            trend in trend_strategy()
        ) {
            let score = priority_score(days, risk, trend);
            prop_assert!(score <= 100);
        }

        /// ML-weighted priority is always within [0, 100]
        #[test]
        fn prop_ml_priority_bounded(
            stockout in 0.0f64..=100.0,
            overstock in 0.0f64..=100.0
        ) {
            let prediction = MlPrediction {
                stockout_score: stockout,
                overstock_score: overstock,
                coverage_days: 0.0,
                demand_14d: 0.0,
                trend: String::new(),
                recommendation: String::new(),
                confidence: 0.0,
            };
            prop_assert!(ml_weighted_priority(&prediction) <= 100);
        }

        /// Ranked output is sorted by priority descending, ties by product id
        #[test]
        fn prop_ranking_sorted(priorities in prop::collection::vec(0u8..=100, 1..20)) {
            let summaries: Vec<ProductSummary> = priorities
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let mut summary = summarize(&snapshot(i as i64 + 1, 10), &policy(), today());
                    summary.priority_score = *p;
                    summary
                })
                .collect();

            let ranked = rank_summaries(summaries);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority_score >= pair[1].priority_score);
                if pair[0].priority_score == pair[1].priority_score {
                    prop_assert!(pair[0].product_id < pair[1].product_id);
                }
            }
        }

        /// Alerts never contradict their inputs: stockout alert only when
        /// days are in range, overstock alert only above the warning bar
        #[test]
        fn prop_alert_consistency(
            days in -1i64..=40,
            risk in 0u8..=100,
            trend in trend_strategy()
        ) {
            let ctx = AlertContext {
                expired: LotTally::default(),
                expiring_soon: LotTally::default(),
                days_until_stockout: days,
                overstock_risk: risk,
                overstock_reason: "reason".to_string(),
                trend,
            };
            let alerts = generate_alerts(&ctx, &policy());

            let has_stockout = alerts.iter().any(|a| a.kind == AlertKind::Stockout);
            prop_assert_eq!(has_stockout, days != NO_STOCKOUT && days <= 7);

            let has_overstock = alerts.iter().any(|a| a.kind == AlertKind::Overstock);
            prop_assert_eq!(has_overstock, risk > 40);
        }

        /// A summary always carries in-range scores, whatever the inputs
        #[test]
        fn prop_summary_scores_bounded(
            product_id in 0i64..=10_000,
            stock in 0i64..=100_000,
            totals in prop::collection::vec(0i64..=500, 0..40)
        ) {
            let mut snap = snapshot(product_id, stock);
            let start = today() - Days::new(totals.len() as u64);
            snap.daily_outflow = totals
                .iter()
                .enumerate()
                .map(|(i, t)| DailyOutflow {
                    date: start + Days::new(i as u64),
                    total: Decimal::from(*t),
                })
                .collect();

            let summary = summarize(&snap, &policy(), today());
            prop_assert!(summary.overstock_risk <= 100);
            prop_assert!(summary.priority_score <= 100);
            prop_assert!(summary.days_until_stockout >= NO_STOCKOUT);
            prop_assert!(summary.days_until_stockout <= policy().horizon_days);
            prop_assert_eq!(summary.forecast_7d.len() as i64, policy().summary_forecast_days);
        }
    }
}
