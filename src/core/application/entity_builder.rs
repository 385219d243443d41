//! Maps flattened attributes onto the platform's canonical records.

use crate::core::{
    application::{
        normalizer::{
            classify_status, classify_volume_type, derive_free_capacity, parse_capacity_bytes,
            wwn_from_vpd_id,
        },
        walker::FlatAttributes,
    },
    domain::{
        error::VplexResult,
        model::{
            driver_config::ThinProvisioningRule,
            storage_pool::{StoragePool, StorageType},
            storage_system::StorageSystem,
            volume::Volume,
        },
    },
};

pub const VENDOR: &str = "DELL EMC";
pub const STORAGE_DESCRIPTION: &str = "EMC VPlex Storage";
pub const POOL_DESCRIPTION: &str = "EMC VPlex Pool";
pub const VOLUME_DESCRIPTION: &str = "EMC VPlex volume";

/// Byte totals gathered across every cluster of a system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacitySummary {
    /// Back-end storage volumes.
    pub raw: u64,
    /// Local devices.
    pub total: u64,
    /// Virtual volumes.
    pub used: u64,
}

impl CapacitySummary {
    pub fn add(&mut self, other: CapacitySummary) {
        self.raw = self.raw.saturating_add(other.raw);
        self.total = self.total.saturating_add(other.total);
        self.used = self.used.saturating_add(other.used);
    }
}

/// Parses the mandatory `capacity` attribute of a device, volume or storage volume.
pub fn capacity_of(attrs: &FlatAttributes) -> VplexResult<u64> {
    Ok(parse_capacity_bytes(attrs.require_text("capacity")?)?)
}

/// Builds the system record from its identity cluster. `name` is required;
/// a cluster without `top-level-assembly` gets an empty serial number.
pub fn build_storage_system(
    attrs: &FlatAttributes,
    capacity: &CapacitySummary,
) -> VplexResult<StorageSystem> {
    Ok(StorageSystem {
        name: attrs.require_text("name")?.to_string(),
        vendor: VENDOR.to_string(),
        description: STORAGE_DESCRIPTION.to_string(),
        status: classify_status(attrs.text("operational-status")),
        serial_number: attrs
            .text("top-level-assembly")
            .unwrap_or_default()
            .to_string(),
        firmware_version: String::new(),
        model: String::new(),
        location: String::new(),
        raw_capacity: capacity.raw,
        total_capacity: capacity.total,
        used_capacity: capacity.used,
        free_capacity: derive_free_capacity(capacity.total, capacity.used),
        subscribed_capacity: 0,
    })
}

/// Builds a pool from a local device. A device is entirely consumed by the
/// virtual volume built on it, so used equals total.
pub fn build_pool(attrs: &FlatAttributes, storage_id: &str) -> VplexResult<StoragePool> {
    let name = attrs.require_text("name")?;
    let total = capacity_of(attrs)?;
    let used = total;
    Ok(StoragePool {
        name: name.to_string(),
        storage_id: storage_id.to_string(),
        native_storage_pool_id: name.to_string(),
        description: POOL_DESCRIPTION.to_string(),
        status: classify_status(attrs.text("operational-status")),
        storage_type: StorageType::Block,
        total_capacity: total,
        used_capacity: used,
        free_capacity: derive_free_capacity(total, used),
        subscribed_capacity: 0,
    })
}

/// Builds a volume from a virtual volume. Virtual volumes are fully allocated
/// on their supporting device, so used equals total.
///
/// `name`, `capacity` and `vpd-id` are required since the vpd-id is the
/// volume's identity. A volume without `supporting-device` gets an empty pool id.
pub fn build_volume(
    attrs: &FlatAttributes,
    storage_id: &str,
    thin_rule: ThinProvisioningRule,
) -> VplexResult<Volume> {
    let name = attrs.require_text("name")?;
    let vpd_id = attrs.require_text("vpd-id")?;
    let total = capacity_of(attrs)?;
    let used = total;
    Ok(Volume {
        name: name.to_string(),
        storage_id: storage_id.to_string(),
        description: VOLUME_DESCRIPTION.to_string(),
        status: classify_status(attrs.text("operational-status")),
        native_volume_id: vpd_id.to_string(),
        native_storage_pool_id: attrs
            .text("supporting-device")
            .unwrap_or_default()
            .to_string(),
        wwn: wwn_from_vpd_id(vpd_id).to_string(),
        volume_type: classify_volume_type(
            attrs.text("thin-capable"),
            attrs.text("thin-enabled"),
            thin_rule,
        ),
        total_capacity: total,
        used_capacity: used,
        free_capacity: derive_free_capacity(total, used),
        compressed: false,
        deduplicated: false,
    })
}
