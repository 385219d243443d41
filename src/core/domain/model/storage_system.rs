//! Canonical storage system record reported to the monitoring platform.

use serde::{Deserialize, Serialize};

/// Health of an inventory object as the platform understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStatus {
    Normal,
    Offline,
}

/// One VPLEX system, identified by its first cluster.
///
/// Capacities are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSystem {
    pub name: String,
    pub vendor: String,
    pub description: String,
    pub status: StorageStatus,
    pub serial_number: String,
    pub firmware_version: String,
    pub model: String,
    pub location: String,
    /// Sum of the back-end storage volumes.
    pub raw_capacity: u64,
    /// Sum of the local devices.
    pub total_capacity: u64,
    /// Sum of the exported virtual volumes.
    pub used_capacity: u64,
    pub free_capacity: u64,
    pub subscribed_capacity: u64,
}
