//! Domain models for the Perishable Inventory Analytics Platform

mod alert;
mod forecast;
mod lot;
mod movement;
mod product;
mod summary;

pub use alert::*;
pub use forecast::*;
pub use lot::*;
pub use movement::*;
pub use product::*;
pub use summary::*;
