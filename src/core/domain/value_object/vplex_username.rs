use crate::core::domain::error::ValidationError;

/// A validated management account name.
#[derive(Debug, Clone)]
pub struct VplexUsername(String);

impl VplexUsername {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a username. It travels as a raw HTTP header value, so it must be
/// printable ASCII without surrounding whitespace.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.len() > 64 {
        return Err(ValidationError::Format(format!(
            "Username length must not exceed 64 characters (got {})",
            username.len()
        )));
    }
    if username.trim() != username {
        return Err(ValidationError::Format(
            "Username cannot start or end with whitespace".to_string(),
        ));
    }
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '@';
    if !username.chars().all(allowed) {
        return Err(ValidationError::Format(
            "Username contains invalid characters. Allowed: alphanumeric, -, _, ., @".to_string(),
        ));
    }
    Ok(())
}
