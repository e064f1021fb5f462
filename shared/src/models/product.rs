//! Product model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tracked product in the perishable-goods supply chain
///
/// Products are owned by the external inventory store; the analytics engine
/// only reads them. Current stock is never stored on the product itself but
/// derived from its lots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit of measure (defaults to "kg" when absent)
    pub unit: Option<String>,
    pub unit_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Default unit of measure used when a product carries none
pub const DEFAULT_UNIT: &str = "kg";
