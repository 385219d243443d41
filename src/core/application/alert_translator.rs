//! Translates VPLEX SNMP traps into canonical alerts.

use crate::core::domain::{
    error::{VplexError, VplexResult},
    model::alert::{Alert, Category, EventType, ResourceType, Severity},
    ports::TrapPayload,
};
use std::time::{SystemTime, UNIX_EPOCH};

pub const OID_SEVERITY: &str = "1.3.6.1.6.3.1.1.4.1.0";
pub const OID_COMPONENT: &str = "1.3.6.1.4.1.1139.21.1.3";
pub const OID_SYMPTOM_TEXT: &str = "1.3.6.1.4.1.1139.21.1.4";
pub const OID_SYMPTOM_ID: &str = "1.3.6.1.4.1.1139.103.1.18.1.3";

/// Placeholder id for traps that carry no symptom id.
const DEFAULT_ALERT_ID: &str = "0";

fn severity_of(trap_oid: Option<&str>) -> Severity {
    match trap_oid {
        Some("1.3.6.1.4.1.1139.21.0.1") => Severity::Critical,
        Some("1.3.6.1.4.1.1139.21.0.2") => Severity::Major,
        Some("1.3.6.1.4.1.1139.21.0.3") => Severity::Warning,
        _ => Severity::Informational,
    }
}

fn required<'a>(trap: &'a TrapPayload, oid: &str, field: &str) -> VplexResult<&'a str> {
    trap.get(oid).map(String::as_str).ok_or_else(|| {
        VplexError::InvalidAlertPayload(format!(
            "Failed to build alert model: '{}' (OID {}) missing in alert message",
            field, oid
        ))
    })
}

/// Translates a trap, stamping it with the current wall-clock time.
///
/// # Errors
/// `InvalidAlertPayload` when the component or symptom text OID is absent.
pub fn translate_alert(trap: &TrapPayload) -> VplexResult<Alert> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() * 1000)
        .unwrap_or_default();
    translate_alert_at(trap, now_ms)
}

/// Translates a trap using `occur_time` (epoch milliseconds) as its timestamp.
pub fn translate_alert_at(trap: &TrapPayload, occur_time: u64) -> VplexResult<Alert> {
    let alert_name = required(trap, OID_COMPONENT, "alert_name")?;
    let description = required(trap, OID_SYMPTOM_TEXT, "description")?;
    Ok(Alert {
        alert_id: trap
            .get(OID_SYMPTOM_ID)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ALERT_ID)
            .to_string(),
        alert_name: alert_name.to_string(),
        severity: severity_of(trap.get(OID_SEVERITY).map(String::as_str)),
        category: Category::Fault,
        event_type: EventType::EquipmentAlarm,
        occur_time,
        description: description.to_string(),
        resource_type: ResourceType::Storage,
        location: String::new(),
    })
}
