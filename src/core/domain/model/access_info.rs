//! Access information handed over by the platform when a driver is registered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// REST endpoint and credentials of one array.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RestAccess {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for RestAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestAccess")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessInfo {
    pub storage_id: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub rest: RestAccess,
    #[serde(default)]
    pub extra_attributes: HashMap<String, String>,
}
