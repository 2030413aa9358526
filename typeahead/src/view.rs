//! Render snapshot of an autocomplete.

use crate::panel::Panel;

/// Everything needed to draw the widget for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub input_id: String,
    /// Caption above the input.
    pub label: String,
    pub placeholder: String,
    /// Helper text below the input.
    pub description: Option<String>,
    /// Current query text.
    pub text: String,
    pub disabled: bool,
    /// Loading indicator next to the input, shown whether or not the panel is.
    pub spinner: bool,
    pub panel: Panel,
}

impl View {
    /// Text to draw inside the input: the query, or the placeholder when empty.
    pub fn input_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    /// Whether the input shows the placeholder.
    pub fn shows_placeholder(&self) -> bool {
        self.text.is_empty()
    }
}
