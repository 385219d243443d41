//! Canonical pool record. VPLEX local devices play the role of pools.

use crate::core::domain::model::storage_system::StorageStatus;
use serde::{Deserialize, Serialize};

/// Kind of storage a pool serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Block,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoragePool {
    pub name: String,
    pub storage_id: String,
    pub native_storage_pool_id: String,
    pub description: String,
    pub status: StorageStatus,
    pub storage_type: StorageType,
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub free_capacity: u64,
    pub subscribed_capacity: u64,
}
