//! Priority scoring and summary ranking

use crate::models::{MlPrediction, ProductSummary, Trend};

use super::risk::NO_STOCKOUT;

/// Neutral starting score
const BASE_SCORE: i64 = 50;

/// Urgency ladder for stockout proximity: (days at or below, bonus)
const URGENCY_LADDER: [(i64, i64); 3] = [(3, 40), (7, 25), (14, 10)];

/// Trend adjustments
const GROWING_BONUS: i64 = 15;
const DECLINING_PENALTY: i64 = 10;

/// Fold stockout urgency, overstock penalty and trend into one 0-100 score
pub fn priority_score(days_until_stockout: i64, overstock_risk: u8, trend: Trend) -> u8 {
    let mut score = BASE_SCORE;

    if days_until_stockout != NO_STOCKOUT {
        for (cutoff, bonus) in URGENCY_LADDER {
            if days_until_stockout <= cutoff {
                score += bonus;
                break;
            }
        }
    }

    score -= overstock_risk as i64 / 4;

    score += match trend {
        Trend::Growing => GROWING_BONUS,
        Trend::Declining => -DECLINING_PENALTY,
        Trend::Stable => 0,
    };

    score.clamp(0, 100) as u8
}

/// ML-weighted alternate priority: stockout urgency dominates, overstock
/// headroom contributes the rest
pub fn ml_weighted_priority(prediction: &MlPrediction) -> u8 {
    let score = prediction.stockout_score * 0.6 + (100.0 - prediction.overstock_score) * 0.4;
    (score as i64).clamp(0, 100) as u8
}

/// Order summaries for operator attention: priority descending, ties in
/// original product order
pub fn rank_summaries(mut summaries: Vec<ProductSummary>) -> Vec<ProductSummary> {
    summaries.sort_by_key(|s| s.product_id);
    summaries.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    summaries
}
