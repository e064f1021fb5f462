//! Alert generation from expiry, stockout, overstock and trend signals

use crate::models::{Alert, AlertKind, AlertLevel, LotTally, Trend};

use super::policy::ForecastPolicy;
use super::risk::NO_STOCKOUT;

/// Overstock risk above which the alert escalates to danger
const OVERSTOCK_DANGER_RISK: u8 = 60;

/// Overstock risk above which a warning alert fires
const OVERSTOCK_WARNING_RISK: u8 = 40;

/// Signals evaluated by the alert generator, gathered in one pass
#[derive(Debug, Clone)]
pub struct AlertContext {
    pub expired: LotTally,
    pub expiring_soon: LotTally,
    pub days_until_stockout: i64,
    pub overstock_risk: u8,
    pub overstock_reason: String,
    pub trend: Trend,
}

/// Emit the alerts for one product
///
/// Conditions are evaluated independently; several alerts can fire at once
/// and none mutates the underlying data.
pub fn generate_alerts(ctx: &AlertContext, policy: &ForecastPolicy) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if ctx.expired.lots > 0 {
        alerts.push(Alert {
            kind: AlertKind::Expired,
            level: AlertLevel::Danger,
            message: format!(
                "{} expired lot(s) in stock ({} units)",
                ctx.expired.lots, ctx.expired.quantity
            ),
            action: "Remove expired lots".to_string(),
        });
    }

    if ctx.expiring_soon.lots > 0 {
        alerts.push(Alert {
            kind: AlertKind::ExpiringSoon,
            level: AlertLevel::Warning,
            message: format!(
                "{} lot(s) expiring within {} days ({} units)",
                ctx.expiring_soon.lots, policy.expiring_soon_days, ctx.expiring_soon.quantity
            ),
            action: "Sell off quickly".to_string(),
        });
    }

    let days = ctx.days_until_stockout;
    if days != NO_STOCKOUT && days <= policy.stockout_alert_days {
        let level = if days <= policy.urgent_stockout_days {
            AlertLevel::Danger
        } else {
            AlertLevel::Warning
        };
        alerts.push(Alert {
            kind: AlertKind::Stockout,
            level,
            message: format!("Stockout likely in {} day(s)", days),
            action: "Trigger a replenishment order".to_string(),
        });
    }

    if ctx.overstock_risk > OVERSTOCK_DANGER_RISK {
        alerts.push(Alert {
            kind: AlertKind::Overstock,
            level: AlertLevel::Danger,
            message: format!(
                "Overstock risk ({}%): {}",
                ctx.overstock_risk, ctx.overstock_reason
            ),
            action: "Promote or cut the next order".to_string(),
        });
    } else if ctx.overstock_risk > OVERSTOCK_WARNING_RISK {
        alerts.push(Alert {
            kind: AlertKind::Overstock,
            level: AlertLevel::Warning,
            message: format!(
                "Overstock risk ({}%): {}",
                ctx.overstock_risk, ctx.overstock_reason
            ),
            action: "Monitor".to_string(),
        });
    }

    if ctx.trend == Trend::Declining {
        alerts.push(Alert {
            kind: AlertKind::DecliningDemand,
            level: AlertLevel::Info,
            message: "Demand for this product is declining".to_string(),
            action: "Reduce production or promote".to_string(),
        });
    }

    if ctx.trend == Trend::Growing {
        alerts.push(Alert {
            kind: AlertKind::GrowingDemand,
            level: AlertLevel::Success,
            message: "Demand for this product is growing".to_string(),
            action: "Increase production".to_string(),
        });
    }

    alerts
}
