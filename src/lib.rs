mod auth;
mod core;
mod inventory;


pub use crate::core::domain::{
    error::{ValidationError, VplexError, VplexResult},
    model::{
        access_info::{AccessInfo, RestAccess},
        alert::{Alert, Category, EventType, ResourceType, Severity},
        context_node::{
            Attribute, AttributeValue, ChildRef, ContextNode, ContextPayload, ResponseBody,
            ResponseEnvelope,
        },
        driver_config::{
            DEFAULT_SOCKET_TIMEOUT, DriverConfig, RateLimitConfig, ThinProvisioningRule,
        },
        storage_pool::{StoragePool, StorageType},
        storage_system::{StorageStatus, StorageSystem},
        volume::{Volume, VolumeType},
        vplex_connection::VplexConnection,
    },
    ports::{StorageDriver, TrapPayload, VplexApi},
    value_object::{
        BASE_CONTEXT, VplexHost, VplexPassword, VplexSession, VplexUrl, VplexUsername,
    },
};
pub use crate::core::{
    application::{
        normalizer::{
            classify_status, classify_volume_type, derive_free_capacity, parse_capacity_bytes,
        },
        walker::{FlatAttributes, children_of_type, flatten_attributes, flatten_children},
    },
    infrastructure::api_client::ApiClient,
};

use crate::{
    core::{
        application::alert_translator::translate_alert,
        domain::value_object::{validate_host, validate_password, validate_username},
    },
    inventory::application::service::inventory_service::InventoryService,
};
use async_trait::async_trait;
use tracing::debug;

const DEFAULT_PORT: u16 = 443;

/// A driver for one Dell EMC VPLEX array.
///
/// The driver polls the array's management interface and hands back canonical
/// inventory records and alerts. It owns exactly one API client (and therefore one
/// session); nothing is shared between drivers.
///
/// # Examples
///
/// ```no_run
/// use vplex_driver::{StorageDriver, VplexDriver, VplexResult};
///
/// #[tokio::main]
/// async fn main() -> VplexResult<()> {
///     let driver = VplexDriver::builder()
///         .host("vplex.example.com")
///         .port(443)
///         .credentials("service", "password")
///         .storage_id("12345")
///         .build()?;
///
///     let storage = driver.get_storage().await?;
///     println!("{} ({})", storage.name, storage.serial_number);
///     for volume in driver.list_volumes().await? {
///         println!("{} {:?}", volume.name, volume.volume_type);
///     }
///     Ok(())
/// }
/// ```
pub struct VplexDriver<A: VplexApi = ApiClient> {
    api: A,
    storage_id: String,
    config: DriverConfig,
}

/// Builder for VplexDriver configuration
#[derive(Debug)]
pub struct VplexDriverBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    storage_id: Option<String>,
    secure: bool,
    accept_invalid_certs: bool,
    config: DriverConfig,
}

impl Default for VplexDriverBuilder {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            username: None,
            password: None,
            storage_id: None,
            secure: true,
            accept_invalid_certs: true,
            config: DriverConfig::default(),
        }
    }
}

fn required(value: Option<String>, field: &str) -> VplexResult<String> {
    value.ok_or_else(|| {
        VplexError::from(ValidationError::Field {
            field: field.to_string(),
            message: format!("{} is required", field),
        })
    })
}

impl VplexDriverBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Identifier the platform assigned to this array; copied onto pools and volumes.
    pub fn storage_id(mut self, storage_id: impl Into<String>) -> Self {
        self.storage_id = Some(storage_id.into());
        self
    }

    /// Use https (default) or plain http.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Management servers usually present self-signed certificates, so this defaults to `true`.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds the builder from the access-info document the platform registers.
    pub fn from_access_info(self, access_info: AccessInfo) -> Self {
        let AccessInfo {
            storage_id, rest, ..
        } = access_info;
        self.host(rest.host)
            .port(rest.port)
            .credentials(rest.username, rest.password)
            .storage_id(storage_id)
    }

    /// Validates every field and builds the driver. No request is sent.
    ///
    /// # Errors
    /// `VplexError::Validation` when a field is missing or invalid,
    /// `VplexError::Connection` when the HTTP client cannot be created.
    pub fn build(self) -> VplexResult<VplexDriver> {
        let host = required(self.host, "host")?;
        validate_host(&host)?;
        let port = self.port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(ValidationError::Field {
                field: "port".to_string(),
                message: "Port cannot be 0".to_string(),
            }
            .into());
        }
        let username = required(self.username, "username")?;
        validate_username(&username)?;
        let password = required(self.password, "password")?;
        validate_password(&password)?;
        let storage_id = required(self.storage_id, "storage_id")?;

        let host = VplexHost::new_unchecked(host);
        let url = VplexUrl::new(&host, port, self.secure)?;
        let connection = VplexConnection::new(
            host,
            port,
            VplexUsername::new_unchecked(username),
            VplexPassword::new_unchecked(password),
            self.secure,
            self.accept_invalid_certs,
            url,
        );

        let api = ApiClient::new(connection, &self.config)?;
        debug!(
            "VPLEX driver for {} targets {}",
            storage_id,
            api.connection().vplex_url().as_str()
        );
        Ok(VplexDriver::with_api(api, storage_id, self.config))
    }
}

impl VplexDriver {
    /// Creates a new builder for VplexDriver configuration
    pub fn builder() -> VplexDriverBuilder {
        VplexDriverBuilder::default()
    }

    /// Builds a driver straight from the platform's access-info document.
    pub fn from_access_info(access_info: AccessInfo, config: DriverConfig) -> VplexResult<Self> {
        Self::builder()
            .from_access_info(access_info)
            .config(config)
            .build()
    }
}

impl<A: VplexApi> VplexDriver<A> {
    /// Wraps any implementation of the API port, e.g. a test double.
    pub fn with_api(api: A, storage_id: impl Into<String>, config: DriverConfig) -> Self {
        Self {
            api,
            storage_id: storage_id.into(),
            config,
        }
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn inventory(&self) -> InventoryService<'_, A> {
        InventoryService::new(&self.api, &self.storage_id, self.config.thin_rule)
    }
}

#[async_trait]
impl<A: VplexApi> StorageDriver for VplexDriver<A> {
    async fn get_storage(&self) -> VplexResult<StorageSystem> {
        self.inventory().get_storage().await
    }

    async fn list_storage_pools(&self) -> VplexResult<Vec<StoragePool>> {
        self.inventory().list_storage_pools().await
    }

    async fn list_volumes(&self) -> VplexResult<Vec<Volume>> {
        self.inventory().list_volumes().await
    }

    fn parse_alert(&self, trap: &TrapPayload) -> VplexResult<Alert> {
        translate_alert(trap)
    }

    // Trap destinations are configured on the array itself.
    async fn add_trap_config(&self, _trap_config: &serde_json::Value) -> VplexResult<()> {
        debug!("add_trap_config is a no-op for {}", self.storage_id);
        Ok(())
    }

    async fn remove_trap_config(&self, _trap_config: &serde_json::Value) -> VplexResult<()> {
        debug!("remove_trap_config is a no-op for {}", self.storage_id);
        Ok(())
    }

    async fn clear_alert(&self, sequence_number: &str) -> VplexResult<()> {
        debug!(
            "clear_alert({}) is a no-op for {}",
            sequence_number, self.storage_id
        );
        Ok(())
    }

    async fn reset_connection(&self) -> VplexResult<()> {
        self.api.reset_session().await
    }

    async fn close_connection(&self) {
        self.api.close_session().await
    }
}
