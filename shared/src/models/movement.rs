//! Stock movement models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock movement recorded against a lot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    pub lot_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub moved_on: NaiveDate,
    /// Actor who recorded the movement, when known
    pub recorded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Kind of stock movement
///
/// Only outflows feed consumption analysis. Stores label kinds with free
/// text ("Outflow - sale", "OUTFLOW adjustment"...), so classification is a
/// case-insensitive prefix test on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Inflow,
    Outflow,
    Adjustment,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Inflow => "inflow",
            MovementKind::Outflow => "outflow",
            MovementKind::Adjustment => "adjustment",
        }
    }

    /// Classify a raw movement label from the store
    ///
    /// Matching is a case-insensitive starts-with test, so decorated labels
    /// such as "Outflow - spoilage" still count as outflows.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if starts_with_ignore_case(trimmed, "outflow") {
            Some(MovementKind::Outflow)
        } else if starts_with_ignore_case(trimmed, "inflow") {
            Some(MovementKind::Inflow)
        } else if starts_with_ignore_case(trimmed, "adjustment") {
            Some(MovementKind::Adjustment)
        } else {
            None
        }
    }

    /// True when a raw label denotes an outbound movement
    pub fn is_outflow_label(label: &str) -> bool {
        matches!(Self::from_label(label), Some(MovementKind::Outflow))
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// One day of aggregated outbound quantity for a product
///
/// Produced by the store's outflow series query, chronologically ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyOutflow {
    pub date: NaiveDate,
    pub total: Decimal,
}
