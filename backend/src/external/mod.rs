//! Clients for external services

pub mod ml_forecast;

pub use ml_forecast::MlForecastClient;
