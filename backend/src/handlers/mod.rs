//! HTTP handlers for the Perishable Inventory Analytics Platform

pub mod forecast;
pub mod health;

pub use forecast::*;
pub use health::*;
