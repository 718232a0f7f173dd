pub mod activities;
pub mod trips;

use crate::error::AppError;

/// Required text field: present and non-blank after trimming.
fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} must not be blank"))),
    }
}

fn normalize_optional(input: Option<String>) -> Option<String> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_missing_and_blank() {
        assert!(require_text(None, "name").is_err());
        assert!(require_text(Some("".into()), "name").is_err());
        assert!(require_text(Some("   ".into()), "name").is_err());
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text(Some("  Lisbon ".into()), "name").unwrap(), "Lisbon");
    }

    #[test]
    fn normalize_optional_maps_blank_to_none() {
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(normalize_optional(Some(" x ".into())), Some("x".into()));
        assert_eq!(normalize_optional(None), None);
    }
}
