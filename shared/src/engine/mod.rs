//! Forecasting & risk engine
//!
//! Pure, stateless computations turning a product's stock and outflow
//! history into consumption estimates, risk scores, alerts and a priority
//! ranking. Data insufficiency is resolved by a deterministic fallback
//! profile, never surfaced as an error; nothing here performs I/O or panics
//! on degenerate input.

mod alerts;
mod consumption;
mod policy;
mod priority;
mod projection;
mod risk;
mod summary;

pub use alerts::{generate_alerts, AlertContext};
pub use consumption::{classify_trend, fallback_profile, moving_average};
pub use policy::ForecastPolicy;
pub use priority::{ml_weighted_priority, priority_score, rank_summaries};
pub use projection::project_demand;
pub use risk::{days_until_stockout, overstock_risk, StockThresholds, NO_STOCKOUT};
pub use summary::{summarize, ProductSnapshot};
