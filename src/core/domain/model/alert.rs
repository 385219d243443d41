//! Canonical alert record produced from one SNMP trap.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Severity {
    Critical,
    Major,
    Warning,
    Informational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Category {
    Fault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum EventType {
    EquipmentAlarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ResourceType {
    Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Alert {
    pub alert_id: String,
    pub alert_name: String,
    pub severity: Severity,
    pub category: Category,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Milliseconds since the UNIX epoch.
    pub occur_time: u64,
    pub description: String,
    pub resource_type: ResourceType,
    pub location: String,
}
