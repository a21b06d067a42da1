//! Centralized input validation.

use crate::matching::error::EngineError;

/// Normalize a free-text label for lookups: trimmed and lowercased.
///
/// # Examples
///
/// ```
/// use craft_advisor::utils::validation::normalize_label;
///
/// assert_eq!(normalize_label("  Flying "), "flying");
/// assert_eq!(normalize_label("Raspberry Pi 4"), "raspberry pi 4");
/// ```
#[must_use]
pub fn normalize_label(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Require a non-blank text field, returning it trimmed.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` naming `field` if `value` is empty or
/// only whitespace.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, EngineError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Require a non-empty list.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` naming `field` if `items` is empty.
pub fn require_items<T>(field: &str, items: &[T]) -> Result<(), EngineError> {
    if items.is_empty() {
        return Err(EngineError::InvalidInput(format!(
            "{field} list is required"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("concept1", "  robot\n").unwrap(), "robot");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        for blank in ["", "   ", "\t\n"] {
            let err = require_text("concept1", blank).unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput(_)));
            assert!(err.to_string().contains("concept1"));
        }
    }

    #[test]
    fn test_require_items() {
        assert!(require_items("components", &["arduino"]).is_ok());

        let empty: [&str; 0] = [];
        let err = require_items("components", &empty).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: components list is required");
    }
}
