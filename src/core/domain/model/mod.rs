pub mod access_info;
pub mod alert;
pub mod context_node;
pub mod driver_config;
pub mod storage_pool;
pub mod storage_system;
pub mod volume;
pub mod vplex_connection;
