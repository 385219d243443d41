//! Domain ports: the boundaries between the driver logic and the outside world.
//!
//! [`VplexApi`] is what the driver needs from the array; [`StorageDriver`] is what
//! the monitoring platform needs from the driver.

use crate::core::domain::{
    error::VplexResult,
    model::{
        alert::Alert, context_node::ResponseEnvelope, storage_pool::StoragePool,
        storage_system::StorageSystem, volume::Volume,
    },
};
use async_trait::async_trait;
use std::collections::HashMap;

/// An SNMP trap as delivered by the platform: OID → value.
pub type TrapPayload = HashMap<String, String>;

/// Read access to the array's management tree.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VplexApi: Send + Sync {
    /// Fetches the context document at `path` (relative to `/vplex`).
    async fn get_context(&self, path: &str) -> VplexResult<ResponseEnvelope>;

    /// Drops the current session and logs in again.
    async fn reset_session(&self) -> VplexResult<()>;

    /// Drops the current session without logging in again.
    async fn close_session(&self);
}

/// Contract the monitoring platform invokes on every registered driver.
///
/// Operations are independent, idempotent reads; the platform serializes them
/// per array.
#[async_trait]
pub trait StorageDriver: Send + Sync {
    async fn get_storage(&self) -> VplexResult<StorageSystem>;

    async fn list_storage_pools(&self) -> VplexResult<Vec<StoragePool>>;

    async fn list_volumes(&self) -> VplexResult<Vec<Volume>>;

    fn parse_alert(&self, trap: &TrapPayload) -> VplexResult<Alert>;

    async fn add_trap_config(&self, trap_config: &serde_json::Value) -> VplexResult<()>;

    async fn remove_trap_config(&self, trap_config: &serde_json::Value) -> VplexResult<()>;

    async fn clear_alert(&self, sequence_number: &str) -> VplexResult<()>;

    async fn reset_connection(&self) -> VplexResult<()>;

    async fn close_connection(&self);
}
