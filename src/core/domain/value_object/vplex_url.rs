use crate::core::domain::{
    error::{ValidationError, VplexResult},
    value_object::vplex_host::VplexHost,
};
use std::net::Ipv6Addr;

/// Fixed context every management URI hangs off.
pub const BASE_CONTEXT: &str = "/vplex";

const MAX_URL_LENGTH: usize = 2083;

/// A validated base URL of a VPLEX management server, e.g. `https://10.0.0.5:443/`.
///
/// Management paths are resolved against [`BASE_CONTEXT`] through [`VplexUrl::endpoint`].
#[derive(Debug, Clone)]
pub struct VplexUrl(String);

impl VplexUrl {
    /// Builds the base URL from a validated host and port.
    pub fn new(host: &VplexHost, port: u16, secure: bool) -> VplexResult<Self> {
        let scheme = if secure { "https" } else { "http" };
        let host = if host.as_str().parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", host.as_str())
        } else {
            host.as_str().to_string()
        };
        let url = format!("{}://{}:{}/", scheme, host, port);
        validate_url(&url)?;
        Ok(Self(url))
    }

    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a management path (relative to `/vplex`) into a full URL.
    ///
    /// # Errors
    /// Returns a validation error when `path` is empty.
    pub fn endpoint(&self, path: &str) -> Result<String, ValidationError> {
        if path.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "path".to_string(),
                message: "Management path cannot be empty".to_string(),
            });
        }
        let trimmed = path.trim_start_matches('/');
        let relative = match trimmed.strip_prefix(BASE_CONTEXT.trim_start_matches('/')) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => trimmed,
        };
        let base = self.0.trim_end_matches('/');
        if relative.is_empty() {
            Ok(format!("{}{}", base, BASE_CONTEXT))
        } else {
            Ok(format!("{}{}/{}", base, BASE_CONTEXT, relative))
        }
    }
}

/// Validates a base URL: parseable, http(s), bounded length.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }
    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    match parsed.scheme() {
        "https" | "http" => Ok(()),
        other => Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: https, http",
            other
        ))),
    }
}
