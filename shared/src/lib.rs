//! Shared types and forecasting engine for the Perishable Inventory
//! Analytics Platform
//!
//! This crate contains the domain models and the pure forecasting & risk
//! computations shared between the backend and any other component of the
//! system. Nothing in here performs I/O; the backend feeds the engine with
//! data read from the inventory store.

pub mod engine;
pub mod models;

pub use engine::*;
pub use models::*;
