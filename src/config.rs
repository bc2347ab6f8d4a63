//! UI Configuration
//!
//! Labels and messages for the widget, plus the store policy. Read from an
//! optional JSON `<script id="todo-config">` element in the host page.

use leptos::prelude::document;
use serde::{Deserialize, Serialize};
use todo_store::StoreConfig;

/// Id of the page element holding the JSON configuration
const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub add_button_label: String,
    pub input_placeholder: String,
    pub save_button_label: String,
    pub delete_button_label: String,
    /// Shown instead of the list when there are no todos
    pub empty_message: String,
    /// Shown in place of a blank todo's text
    pub edit_placeholder: String,
    pub empty_task_alert: String,
    pub empty_edit_alert: String,
    pub store: StoreConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            add_button_label: "Add Todo".to_string(),
            input_placeholder: "Enter your task here...".to_string(),
            save_button_label: "Save Todo".to_string(),
            delete_button_label: "Delete".to_string(),
            empty_message: r#"No todos. Tap the "Add Todo" button to create one."#.to_string(),
            edit_placeholder: "(Click to edit)".to_string(),
            empty_task_alert: "Please enter a task!".to_string(),
            empty_edit_alert: "Todo cannot be empty!".to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the host page, falling back to defaults
    pub fn from_page() -> Self {
        let raw = document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        let Some(raw) = raw else {
            log::debug!("[CONFIG] No #{} element, using defaults", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("[CONFIG] Loaded {:?}", config);
                config
            }
            Err(err) => {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }
}
