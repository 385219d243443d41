use thiserror::Error;

/// The main error type for VPLEX driver operations.
///
/// This enum represents all possible errors that can occur while talking to
/// the management endpoint and while normalizing its responses.
#[derive(Error, Debug)]
pub enum VplexError {
    /// The array could not be reached, or the socket timed out.
    ///
    /// # Fields
    /// * `0` - A description of the transport failure
    #[error("Transport timeout: {0}")]
    TransportTimeout(String),

    /// The configured credentials were rejected.
    ///
    /// # Fields
    /// * `0` - The server's explanation, if any
    #[error("Invalid username or password: {0}")]
    InvalidCredentials(String),

    /// Any non-200, non-authentication response.
    ///
    /// # Fields
    /// * `status` - The raw HTTP status code
    /// * `body` - The raw response body, kept for diagnostics
    #[error("Bad response from server ({status}): {body}")]
    BadResponse { status: u16, body: String },

    /// The array reported itself as unavailable (HTTP 503).
    #[error("Invalid results: {0}")]
    InvalidResults(String),

    /// The payload did not have the expected structure.
    ///
    /// # Fields
    /// * `field` - The missing or invalid field
    /// * `node_type` - The `type` of the context node being walked
    #[error("Malformed response: '{field}' missing or invalid on node of type '{node_type}'")]
    MalformedResponse { field: String, node_type: String },

    /// A trap payload lacked the fields needed to build a complete alert.
    #[error("Invalid alert payload: {0}")]
    InvalidAlertPayload(String),

    /// The HTTP client itself could not be constructed.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents validation failures with detailed context
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl VplexError {
    pub(crate) fn malformed(field: impl Into<String>, node_type: impl Into<String>) -> Self {
        VplexError::MalformedResponse {
            field: field.into(),
            node_type: node_type.into(),
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a VplexError
pub type VplexResult<T> = Result<T, VplexError>;
