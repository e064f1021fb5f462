//! Alert models

use serde::{Deserialize, Serialize};

/// A transient, actionable alert for one product
///
/// Alerts are derived per request and carry a suggested action for the
/// operator; they are richer than (and independent of) any alert record the
/// inventory store may persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub level: AlertLevel,
    pub message: String,
    pub action: String,
}

/// What an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Expired,
    ExpiringSoon,
    Stockout,
    Overstock,
    DecliningDemand,
    GrowingDemand,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Expired => "expired",
            AlertKind::ExpiringSoon => "expiring_soon",
            AlertKind::Stockout => "stockout",
            AlertKind::Overstock => "overstock",
            AlertKind::DecliningDemand => "declining_demand",
            AlertKind::GrowingDemand => "growing_demand",
        }
    }
}

/// Severity level of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Danger,
    Warning,
    Info,
    Success,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Danger => "danger",
            AlertLevel::Warning => "warning",
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
        }
    }
}
