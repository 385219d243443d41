pub(crate) mod serde_helpers;
mod vplex_host;
mod vplex_password;
mod vplex_session;
mod vplex_url;
mod vplex_username;

pub use vplex_host::VplexHost;
pub use vplex_password::VplexPassword;
pub use vplex_session::VplexSession;
pub use vplex_url::{BASE_CONTEXT, VplexUrl};
pub use vplex_username::VplexUsername;

// Re-export validation functions for internal use
pub(crate) use vplex_host::validate_host;
pub(crate) use vplex_password::validate_password;
pub(crate) use vplex_url::validate_url;
pub(crate) use vplex_username::validate_username;
