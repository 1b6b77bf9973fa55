use crate::error::{RelayError, Result};

pub const EMPTY_MESSAGE: &str = "Message cannot be empty";

/// Accepts any message with at least one non-whitespace character. The
/// message itself is never altered; trimming is only for the check.
pub fn validate_message(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(RelayError::Validation(EMPTY_MESSAGE));
    }
    Ok(())
}
