//! What the floating panel shows.

/// Shown while the host reports that candidates are loading.
pub const LOADING_TEXT: &str = "Loading...";

/// Shown when a non-blank query matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results were found";

/// Shown when nothing matches and the panel may open on a blank query.
pub const NO_OPTIONS_TEXT: &str = "No options";

/// Panel state machine position.
///
/// Derived from the open flag, the loading flag, and the current matches.
/// Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Panel hidden.
    Closed,
    /// Panel shows the loading placeholder.
    OpenLoading,
    /// Panel shows the empty placeholder.
    OpenEmpty,
    /// Panel lists matches.
    OpenResults,
}

impl PanelState {
    /// Whether the panel is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self, PanelState::Closed)
    }
}

/// Why the panel has nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// A non-blank query matched nothing.
    NoResults,
    /// Nothing to list and no query distinction is drawn.
    NoOptions,
}

impl EmptyReason {
    /// Placeholder text for this reason.
    pub fn text(&self) -> &'static str {
        match self {
            EmptyReason::NoResults => NO_RESULTS_TEXT,
            EmptyReason::NoOptions => NO_OPTIONS_TEXT,
        }
    }
}

/// One rendered match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position of the match in the visible list.
    pub index: usize,
    /// Rendered text.
    pub label: String,
}

/// Panel contents for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Panel not shown.
    Hidden,
    /// Loading placeholder.
    Loading,
    /// Empty placeholder.
    Empty(EmptyReason),
    /// One row per visible match, in match order.
    Results(Vec<Row>),
}

impl Panel {
    /// The state machine position this panel corresponds to.
    pub fn state(&self) -> PanelState {
        match self {
            Panel::Hidden => PanelState::Closed,
            Panel::Loading => PanelState::OpenLoading,
            Panel::Empty(_) => PanelState::OpenEmpty,
            Panel::Results(_) => PanelState::OpenResults,
        }
    }

    /// Whether the panel is shown.
    pub fn is_shown(&self) -> bool {
        !matches!(self, Panel::Hidden)
    }

    /// Rendered rows, empty unless listing results.
    pub fn rows(&self) -> &[Row] {
        match self {
            Panel::Results(rows) => rows,
            _ => &[],
        }
    }

    /// Placeholder text, if the panel shows one.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Panel::Loading => Some(LOADING_TEXT),
            Panel::Empty(reason) => Some(reason.text()),
            _ => None,
        }
    }

    /// Number of lines the panel content occupies.
    pub fn line_count(&self) -> usize {
        match self {
            Panel::Hidden => 0,
            Panel::Loading | Panel::Empty(_) => 1,
            Panel::Results(rows) => rows.len(),
        }
    }
}
