//! Canonical volume record built from a VPLEX virtual volume.

use crate::core::domain::model::storage_system::StorageStatus;
use serde::{Deserialize, Serialize};

/// Provisioning type of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeType {
    Thin,
    Thick,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Volume {
    pub name: String,
    pub storage_id: String,
    pub description: String,
    pub status: StorageStatus,
    /// The VPD83 identifier, e.g. `VPD83T3:60001440000000103029208322b81b8c`.
    pub native_volume_id: String,
    /// Name of the supporting device (the pool).
    pub native_storage_pool_id: String,
    /// The VPD83 identifier without its `VPD83T3:` prefix.
    pub wwn: String,
    #[serde(rename = "type")]
    pub volume_type: VolumeType,
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub free_capacity: u64,
    pub compressed: bool,
    pub deduplicated: bool,
}
