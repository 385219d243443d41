//! Tunables of one driver instance.

use crate::core::domain::value_object::serde_helpers::duration_secs;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Socket timeout used by every management call unless configured otherwise.
pub const DEFAULT_SOCKET_TIMEOUT: Duration = Duration::from_secs(30);

/// How `thin-capable`/`thin-enabled` are combined into a provisioning type.
///
/// Firmware revisions disagree on which `thin-enabled` value disqualifies a
/// volume, so the rule is explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThinProvisioningRule {
    /// Thin iff `thin-capable == "true"` and `thin-enabled == "available"`.
    #[default]
    PositiveMatch,
    /// Thin iff `thin-capable == "true"` and `thin-enabled != "unavailable"`.
    NotUnavailable,
}

/// Client-side request rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Connect and read timeout of every request.
    #[serde(with = "duration_secs")]
    pub socket_timeout: Duration,
    pub thin_rule: ThinProvisioningRule,
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            socket_timeout: DEFAULT_SOCKET_TIMEOUT,
            thin_rule: ThinProvisioningRule::default(),
            rate_limit: None,
        }
    }
}
