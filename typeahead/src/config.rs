//! Construction-time configuration.

use serde::Deserialize;
use serde::Serialize;

/// Default input placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Default cap on listed rows before the panel scrolls.
pub const DEFAULT_MAX_VISIBLE_ROWS: u16 = 10;

/// Plain-data settings for an [`Autocomplete`](crate::Autocomplete).
///
/// Everything except the callbacks and overrides, so it can be loaded from a
/// settings file.
///
/// ```
/// use typeahead::AutocompleteConfig;
///
/// let config: AutocompleteConfig =
///     serde_json::from_str(r#"{"label": "Currency", "multiple": true}"#).unwrap();
///
/// assert_eq!(config.placeholder, "Search...");
/// assert!(config.multiple);
/// assert!(config.require_query);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Caption above the input.
    pub label: String,
    /// Hint text in the empty input.
    pub placeholder: String,
    /// Helper text below the input.
    pub description: Option<String>,
    /// Rejects text entry when set.
    pub disabled: bool,
    /// Shows the loading placeholder when set.
    pub loading: bool,
    /// Keeps the panel open after a row is activated.
    pub multiple: bool,
    /// Only show the panel while the trimmed query is non-empty.
    pub require_query: bool,
    /// Height cap of the panel, in rows.
    pub max_visible_rows: u16,
}

impl AutocompleteConfig {
    /// Config with the given label and defaults for everything else.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            description: None,
            disabled: false,
            loading: false,
            multiple: false,
            require_query: true,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }
}
