//! Autocomplete widget - a text input with a filtered floating panel of matches.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::AutocompleteConfig;
use crate::error::{ActivationError, BuildError};
use crate::filter::{FilterFn, substring_filter};
use crate::floating::{Anchored, FloatingAdapter, Rect, Roles, Size};
use crate::item::AutocompleteItem;
use crate::panel::{EmptyReason, Panel, PanelState, Row};
use crate::query::QueryState;
use crate::selection::Selection;
use crate::view::View;

/// Called with the activated item when a row is activated.
pub type ChangeFn<T> = Box<dyn FnMut(&T)>;

/// Called with the new query on every accepted keystroke.
pub type InputChangeFn = Box<dyn FnMut(&str)>;

/// Renders one visible match as a row label.
pub type RenderFn<T> = Box<dyn Fn(&T) -> String>;

/// Unique identifier for an Autocomplete widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutocompleteId(usize);

impl AutocompleteId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for AutocompleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "autocomplete-{}", self.0)
    }
}

/// A search-as-you-type selection control.
///
/// The widget owns the query and the open flag. Everything else (candidate
/// list, loading and disabled flags, committed value) belongs to the host,
/// which pushes it in with the `set_*` methods whenever it changes. The
/// visible matches are recomputed from scratch on every read.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use typeahead::{Autocomplete, Panel};
///
/// let picked = Rc::new(RefCell::new(None));
/// let sink = Rc::clone(&picked);
///
/// let mut widget = Autocomplete::builder()
///     .label("Fruit")
///     .options(vec!["Apple".to_string(), "Banana".to_string()])
///     .on_change(move |fruit: &String| *sink.borrow_mut() = Some(fruit.clone()))
///     .build()
///     .unwrap();
///
/// widget.input("nan");
/// assert!(matches!(widget.panel(), Panel::Results(ref rows) if rows.len() == 1));
///
/// widget.activate(0).unwrap();
/// assert_eq!(picked.borrow().as_deref(), Some("Banana"));
/// assert!(!widget.is_open());
/// ```
pub struct Autocomplete<T> {
    id: AutocompleteId,
    config: AutocompleteConfig,
    options: Vec<T>,
    value: Selection<T>,
    query: QueryState,
    on_change: ChangeFn<T>,
    on_input_change: Option<InputChangeFn>,
    filter_options: Option<FilterFn<T>>,
    render_option: Option<RenderFn<T>>,
    floating: Box<dyn FloatingAdapter>,
}

impl<T> Autocomplete<T> {
    /// Start building an autocomplete.
    pub fn builder() -> AutocompleteBuilder<T> {
        AutocompleteBuilder::new()
    }

    /// Get the unique ID for this autocomplete.
    pub fn id(&self) -> AutocompleteId {
        self.id
    }

    /// Element id of the text input.
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    /// Element id of the floating panel.
    pub fn panel_id(&self) -> String {
        format!("{}-panel", self.id)
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Host-owned props
    // -------------------------------------------------------------------------

    /// Current candidate list.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Replace the candidate list.
    pub fn set_options(&mut self, options: Vec<T>) {
        log::debug!("{} options replaced count={}", self.id, options.len());
        self.options = options;
    }

    pub fn is_loading(&self) -> bool {
        self.config.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.config.loading != loading {
            log::debug!("{} loading={}", self.id, loading);
            self.config.loading = loading;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Disabling rejects text entry but leaves an open panel open.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Committed value, as last set by the host.
    pub fn value(&self) -> &Selection<T> {
        &self.value
    }

    pub fn set_value(&mut self, value: Selection<T>) {
        self.value = value;
    }

    // -------------------------------------------------------------------------
    // Query and open flag
    // -------------------------------------------------------------------------

    /// Current query text.
    pub fn query(&self) -> &str {
        self.query.query()
    }

    /// Whether the open flag is set.
    ///
    /// The panel may still be hidden while the query is blank, see
    /// [`is_panel_shown`](Self::is_panel_shown).
    pub fn is_open(&self) -> bool {
        self.query.is_open()
    }

    /// Whether the floating panel is shown.
    pub fn is_panel_shown(&self) -> bool {
        self.query.is_open() && !(self.config.require_query && self.query.is_blank())
    }

    /// Open or close the panel explicitly.
    pub fn set_open(&mut self, open: bool) {
        if self.query.is_open() != open {
            log::debug!("{} open={}", self.id, open);
        }
        self.query.set_open(open);
    }

    /// Reset the query and open flag to their mount-time defaults.
    pub fn remount(&mut self) {
        log::debug!("{} remount", self.id);
        self.query.reset();
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Text entry: replace the query, open the panel, notify the host.
    ///
    /// Returns false and does nothing while disabled.
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        if self.config.disabled {
            log::debug!("{} input rejected (disabled)", self.id);
            return false;
        }

        self.query.set_query(text);
        log::debug!("{} input query={:?}", self.id, self.query.query());

        if let Some(ref mut handler) = self.on_input_change {
            handler(self.query.query());
        }
        true
    }

    /// Click or focus on the input.
    ///
    /// Opens the panel; closes it instead when it is already open and the
    /// adapter toggles on press. Ignored while disabled.
    pub fn press_input(&mut self) {
        if self.config.disabled {
            return;
        }
        let open = self.query.is_open();
        if open && self.floating.interactions().toggle_on_press {
            self.set_open(false);
        } else if !open {
            self.set_open(true);
        }
    }

    /// Press outside the widget.
    pub fn press_outside(&mut self) {
        if self.floating.interactions().dismiss_on_outside_press {
            self.set_open(false);
        }
    }

    /// Escape key.
    pub fn escape(&mut self) {
        if self.floating.interactions().dismiss_on_escape {
            self.set_open(false);
        }
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    /// Accessibility roles for the input and the panel.
    pub fn roles(&self) -> Roles {
        self.floating
            .roles(&self.input_id(), &self.panel_id(), self.is_panel_shown())
    }
}

impl<T: AutocompleteItem + Clone> Autocomplete<T> {
    /// Build directly from a config and a change callback.
    pub fn from_config(
        config: AutocompleteConfig,
        on_change: impl FnMut(&T) + 'static,
    ) -> Result<Self, BuildError> {
        Self::builder().config(config).on_change(on_change).build()
    }

    /// The current matches: the filter applied to the query and candidates.
    pub fn visible_matches(&self) -> Vec<T> {
        let query = self.query.query();
        match self.filter_options {
            Some(ref filter) => filter(query, &self.options),
            None => substring_filter(query, &self.options),
        }
    }

    /// Current position in the panel state machine.
    pub fn panel_state(&self) -> PanelState {
        if !self.is_panel_shown() {
            PanelState::Closed
        } else if self.config.loading {
            PanelState::OpenLoading
        } else if self.visible_matches().is_empty() {
            PanelState::OpenEmpty
        } else {
            PanelState::OpenResults
        }
    }

    /// What the panel shows right now.
    pub fn panel(&self) -> Panel {
        if !self.is_panel_shown() {
            return Panel::Hidden;
        }
        if self.config.loading {
            return Panel::Loading;
        }

        let matches = self.visible_matches();
        if matches.is_empty() {
            let reason = if self.config.require_query {
                EmptyReason::NoResults
            } else {
                EmptyReason::NoOptions
            };
            return Panel::Empty(reason);
        }

        let rows = matches
            .iter()
            .enumerate()
            .map(|(index, item)| Row {
                index,
                label: self.render(item),
            })
            .collect();
        Panel::Results(rows)
    }

    /// Row label for an item.
    pub fn render(&self, item: &T) -> String {
        match self.render_option {
            Some(ref render) => render(item),
            None => item.shape().default_label().to_string(),
        }
    }

    /// Activate the row at `row` in the panel.
    ///
    /// Reports the item to `on_change`, then closes the panel unless the
    /// widget is multi-select. Works while disabled.
    pub fn activate(&mut self, row: usize) -> Result<(), ActivationError> {
        if !self.is_panel_shown() {
            return Err(ActivationError::PanelHidden);
        }
        if self.config.loading {
            return Err(ActivationError::Loading);
        }

        let mut matches = self.visible_matches();
        if row >= matches.len() {
            return Err(ActivationError::NoSuchRow {
                row,
                len: matches.len(),
            });
        }

        let item = matches.swap_remove(row);
        log::debug!(
            "{} activate row={} label={:?} multiple={}",
            self.id,
            row,
            self.render(&item),
            self.config.multiple
        );

        (self.on_change)(&item);

        if !self.config.multiple {
            self.set_open(false);
        }
        Ok(())
    }

    /// Where the panel goes, given the input's rectangle and the viewport.
    ///
    /// `None` while the panel is hidden. The panel is as wide as the input
    /// and as tall as its content, up to `max_visible_rows`.
    pub fn placement(&self, anchor: Rect, viewport: Rect) -> Option<Rect> {
        let panel = self.panel();
        if !panel.is_shown() {
            return None;
        }
        let lines = panel.line_count().min(self.config.max_visible_rows as usize) as u16;
        let content = Size::new(anchor.width, lines.max(1));
        Some(self.floating.place(anchor, content, viewport))
    }

    /// Snapshot of everything a renderer needs.
    pub fn view(&self) -> View {
        View {
            input_id: self.input_id(),
            label: self.config.label.clone(),
            placeholder: self.config.placeholder.clone(),
            description: self.config.description.clone(),
            text: self.query.query().to_string(),
            disabled: self.config.disabled,
            spinner: self.config.loading,
            panel: self.panel(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("options", &self.options)
            .field("value", &self.value)
            .field("query", &self.query)
            .field("custom_filter", &self.filter_options.is_some())
            .field("custom_render", &self.render_option.is_some())
            .finish_non_exhaustive()
    }
}

/// Typestate marker: builder still needs `on_change`.
pub struct NeedsOnChange;

/// Typestate marker: builder has its `on_change` callback.
pub struct HasOnChange<T>(ChangeFn<T>);

/// An autocomplete builder.
///
/// Uses typestate pattern to enforce `on_change()` is called before `build()`.
pub struct AutocompleteBuilder<T, C = NeedsOnChange> {
    on_change: C,
    config: AutocompleteConfig,
    options: Vec<T>,
    value: Selection<T>,
    on_input_change: Option<InputChangeFn>,
    filter_options: Option<FilterFn<T>>,
    render_option: Option<RenderFn<T>>,
    floating: Option<Box<dyn FloatingAdapter>>,
}

impl<T> Default for AutocompleteBuilder<T, NeedsOnChange> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AutocompleteBuilder<T, NeedsOnChange> {
    /// Create a new autocomplete builder.
    pub fn new() -> Self {
        Self {
            on_change: NeedsOnChange,
            config: AutocompleteConfig::default(),
            options: Vec::new(),
            value: Selection::None,
            on_input_change: None,
            filter_options: None,
            render_option: None,
            floating: None,
        }
    }

    /// Set the change callback. Required before calling `build()`.
    pub fn on_change(
        self,
        handler: impl FnMut(&T) + 'static,
    ) -> AutocompleteBuilder<T, HasOnChange<T>> {
        AutocompleteBuilder {
            on_change: HasOnChange(Box::new(handler)),
            config: self.config,
            options: self.options,
            value: self.value,
            on_input_change: self.on_input_change,
            filter_options: self.filter_options,
            render_option: self.render_option,
            floating: self.floating,
        }
    }
}

impl<T, C> AutocompleteBuilder<T, C> {
    /// Replace all plain settings at once.
    pub fn config(mut self, config: AutocompleteConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the caption shown above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    /// Set the placeholder text shown when input is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Set the helper text shown below the input.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Mark the autocomplete as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Start in the loading state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Keep the panel open after activation.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.config.multiple = multiple;
        self
    }

    /// Only show the panel for a non-blank query.
    pub fn require_query(mut self, require_query: bool) -> Self {
        self.config.require_query = require_query;
        self
    }

    /// Cap the panel height, in rows.
    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.config.max_visible_rows = rows;
        self
    }

    /// Set the initial candidate list.
    pub fn options(mut self, options: Vec<T>) -> Self {
        self.options = options;
        self
    }

    /// Set the initial committed value.
    pub fn value(mut self, value: impl Into<Selection<T>>) -> Self {
        self.value = value.into();
        self
    }

    /// Called with the query on every accepted keystroke.
    pub fn on_input_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_input_change = Some(Box::new(handler));
        self
    }

    /// Replace the default substring filter.
    pub fn filter_options(mut self, filter: impl Fn(&str, &[T]) -> Vec<T> + 'static) -> Self {
        self.filter_options = Some(Box::new(filter));
        self
    }

    /// Replace the default row rendering.
    pub fn render_option(mut self, render: impl Fn(&T) -> String + 'static) -> Self {
        self.render_option = Some(Box::new(render));
        self
    }

    /// Use a custom floating panel adapter instead of [`Anchored`].
    pub fn floating(mut self, adapter: impl FloatingAdapter + 'static) -> Self {
        self.floating = Some(Box::new(adapter));
        self
    }
}

impl<T: AutocompleteItem + Clone> AutocompleteBuilder<T, HasOnChange<T>> {
    /// Build the autocomplete. The query starts empty and the panel closed.
    pub fn build(self) -> Result<Autocomplete<T>, BuildError> {
        if self.config.label.trim().is_empty() {
            return Err(BuildError::MissingLabel);
        }

        let widget = Autocomplete {
            id: AutocompleteId::new(),
            config: self.config,
            options: self.options,
            value: self.value,
            query: QueryState::new(),
            on_change: self.on_change.0,
            on_input_change: self.on_input_change,
            filter_options: self.filter_options,
            render_option: self.render_option,
            floating: self
                .floating
                .unwrap_or_else(|| Box::new(Anchored::default())),
        };

        log::debug!(
            "{} built label={:?} options_count={} multiple={} require_query={}",
            widget.id,
            widget.config.label,
            widget.options.len(),
            widget.config.multiple,
            widget.config.require_query
        );

        Ok(widget)
    }
}
