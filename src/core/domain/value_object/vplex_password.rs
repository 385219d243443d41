use crate::core::domain::error::ValidationError;

/// A management password (plaintext, sent as a header on every request).
#[derive(Clone)]
pub struct VplexPassword(String);

impl VplexPassword {
    /// Creates a new password without validation.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for VplexPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VplexPassword(***)")
    }
}

/// Validates a password. The array dictates its own policy, so only what the
/// header transport cannot carry is rejected here.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    if password.len() > 128 {
        return Err(ValidationError::Format(
            "Password cannot exceed 128 characters".to_string(),
        ));
    }
    if password.chars().any(|c| c.is_control() || !c.is_ascii()) {
        return Err(ValidationError::Format(
            "Password must be printable ASCII".to_string(),
        ));
    }
    Ok(())
}
