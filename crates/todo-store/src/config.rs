//! Store Configuration

use serde::{Deserialize, Serialize};

/// Validation and notification policy of a [`crate::TodoStore`]
///
/// The default is permissive: any text is stored verbatim and removing an
/// absent key still notifies the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Reject empty or whitespace-only text in `add` and `update_text`
    pub reject_blank_text: bool,
    /// Notify the observer when `remove` finds nothing to remove
    pub notify_on_missing_remove: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reject_blank_text: false,
            notify_on_missing_remove: true,
        }
    }
}

impl StoreConfig {
    /// Blank text rejected, no notification for no-op removals
    pub fn strict() -> Self {
        Self {
            reject_blank_text: true,
            notify_on_missing_remove: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let config = StoreConfig::default();
        assert!(!config.reject_blank_text);
        assert!(config.notify_on_missing_remove);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"reject_blank_text":true}"#).unwrap();
        assert!(config.reject_blank_text);
        assert!(config.notify_on_missing_remove);
    }
}
