//! Lot models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A physical lot of a product, the sole source of current stock
///
/// A product's current stock is the sum of quantities over its lots with
/// quantity > 0; exhausted lots never count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub received_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Lot {
    /// Status derived from the on-hand quantity, never persisted
    pub fn status(&self) -> LotStatus {
        LotStatus::from_quantity(self.quantity)
    }
}

/// Lot availability status derived from quantity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LotStatus {
    Available,
    Low,
    Exhausted,
}

impl LotStatus {
    /// `available` above 20 units, `low` from 1 to 20, `exhausted` at 0
    pub fn from_quantity(quantity: i64) -> Self {
        match quantity {
            q if q > 20 => LotStatus::Available,
            q if q > 0 => LotStatus::Low,
            _ => LotStatus::Exhausted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LotStatus::Available => "available",
            LotStatus::Low => "low",
            LotStatus::Exhausted => "exhausted",
        }
    }
}

/// Count and total quantity over a set of lots (expired, expiring soon)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LotTally {
    pub lots: i64,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(LotStatus::from_quantity(21), LotStatus::Available);
        assert_eq!(LotStatus::from_quantity(20), LotStatus::Low);
        assert_eq!(LotStatus::from_quantity(1), LotStatus::Low);
        assert_eq!(LotStatus::from_quantity(0), LotStatus::Exhausted);
    }

    #[test]
    fn status_label() {
        assert_eq!(LotStatus::Available.as_str(), "available");
        assert_eq!(LotStatus::Low.as_str(), "low");
        assert_eq!(LotStatus::Exhausted.as_str(), "exhausted");
    }
}
