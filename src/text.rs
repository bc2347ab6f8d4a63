//! Text Helpers
//!
//! Input cleanup done before text reaches the store.

/// Trim user input; `None` when nothing is left
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Text to show for a todo, or `placeholder` when it is blank
pub fn display_text<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_input("  buy milk \n"), Some("buy milk".to_string()));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_input(""), None);
        assert_eq!(normalize_input("   "), None);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(display_text(" padded ", "(Click to edit)"), " padded ");
        assert_eq!(display_text("  ", "(Click to edit)"), "(Click to edit)");
    }
}
