//! Serde helpers for custom serialization.

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

/// Serialization and deserialization for `Duration` as whole seconds.
pub mod duration_secs {
    use super::*;

    /// Serialize a `Duration` as a u64 number of seconds.
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    /// Deserialize a u64 number of seconds into a `Duration`, rejecting zero.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        if secs == 0 {
            return Err(serde::de::Error::custom("timeout must be at least one second"));
        }
        Ok(Duration::from_secs(secs))
    }
}
