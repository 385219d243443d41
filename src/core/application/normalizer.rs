//! Converts raw attribute strings into canonical values. No I/O.

use crate::core::domain::{
    error::ValidationError,
    model::{driver_config::ThinProvisioningRule, storage_system::StorageStatus, volume::VolumeType},
};

/// Operational states the platform treats as healthy. Matched case-sensitively.
const NORMAL_STATUSES: [&str; 9] = [
    "ok",
    "stressed",
    "starting",
    "in-service",
    "completed",
    "online",
    "success",
    "write-protected",
    "vendor-reserved",
];

/// Extracts the first run of decimal digits, e.g. `"907373133824B"` → `907373133824`.
///
/// Blank input yields `0`. The unit suffix is not interpreted.
///
/// # Errors
/// A format error when non-blank input holds no digits, or when the digits
/// overflow `u64`.
pub fn parse_capacity_bytes(raw: &str) -> Result<u64, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return Err(ValidationError::Format(format!(
            "Capacity '{}' contains no digits",
            raw
        )));
    }
    digits.parse::<u64>().map_err(|e| {
        ValidationError::Format(format!("Capacity '{}' is out of range: {}", raw, e))
    })
}

/// Maps an operational status onto NORMAL/OFFLINE. Missing means OFFLINE.
pub fn classify_status(raw: Option<&str>) -> StorageStatus {
    match raw {
        Some(status) if NORMAL_STATUSES.contains(&status) => StorageStatus::Normal,
        _ => StorageStatus::Offline,
    }
}

/// Decides thin vs thick from the `thin-capable` and `thin-enabled` attributes.
pub fn classify_volume_type(
    thin_capable: Option<&str>,
    thin_enabled: Option<&str>,
    rule: ThinProvisioningRule,
) -> VolumeType {
    if thin_capable != Some("true") {
        return VolumeType::Thick;
    }
    let thin = match rule {
        ThinProvisioningRule::PositiveMatch => thin_enabled == Some("available"),
        ThinProvisioningRule::NotUnavailable => thin_enabled != Some("unavailable"),
    };
    if thin {
        VolumeType::Thin
    } else {
        VolumeType::Thick
    }
}

/// `total - used`, clamped at zero.
pub fn derive_free_capacity(total: u64, used: u64) -> u64 {
    total.saturating_sub(used)
}

/// Strips the `VPD83T3:` designator from a VPD identifier to obtain the WWN.
pub fn wwn_from_vpd_id(vpd_id: &str) -> &str {
    vpd_id
        .split_once(':')
        .map(|(_, wwn)| wwn)
        .unwrap_or(vpd_id)
}
