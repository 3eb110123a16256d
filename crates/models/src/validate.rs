//! Shared field validators used by the entity modules.

use crate::errors::ModelError;

/// Trim `value` and ensure it is non-empty and at most `max_len` characters.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(ModelError::Validation(format!("{field} must be at most {max_len} characters")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts() {
        assert_eq!(required_text("name", "  Books ", 10).unwrap(), "Books");
    }

    #[test]
    fn rejects_blank() {
        let err = required_text("name", "   ", 10).unwrap_err();
        assert_eq!(err.to_string(), "validation error: name required");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(required_text("name", "Москва", 6).is_ok());
        assert!(required_text("name", "Москва!", 6).is_err());
    }
}
