//! Business logic services for the Perishable Inventory Analytics Platform

pub mod forecast;
pub mod store;

pub use forecast::ForecastService;
pub use store::StockStore;
