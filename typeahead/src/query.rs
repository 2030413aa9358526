//! Query state: the typed text and the open flag.

/// The widget-owned part of the autocomplete state.
///
/// Starts as an empty query with the panel closed. Nothing is validated and
/// nothing is throttled: every change is visible to the next render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    query: String,
    open: bool,
}

impl QueryState {
    /// Create the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the open flag is set.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the query is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Replace the query. Typing always (re)opens the panel.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.open = true;
    }

    /// Set the open flag explicitly.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Back to the mount-time defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
