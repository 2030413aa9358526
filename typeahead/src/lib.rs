//! Search-as-you-type selection widget.
//!
//! The host supplies candidates (plain strings or ordered records), the
//! widget filters them against the typed query and lists the matches in a
//! floating panel; activating a row reports the item back to the host.
//! Rendering and positioning are left to the host through [`View`] and
//! [`FloatingAdapter`].

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod filter;
pub mod floating;
pub mod item;
pub mod panel;
pub mod query;
pub mod record;
pub mod selection;
pub mod view;

pub use autocomplete::{
    Autocomplete, AutocompleteBuilder, AutocompleteId, ChangeFn, HasOnChange, InputChangeFn,
    NeedsOnChange, RenderFn,
};
pub use config::AutocompleteConfig;
pub use error::{ActivationError, BuildError};
pub use filter::{FilterFn, FilterMatch};
pub use floating::{Anchored, FloatingAdapter, Interactions, Placement, Rect, Roles, Size};
pub use item::{AutocompleteItem, Candidate, Shape};
pub use panel::{EmptyReason, Panel, PanelState, Row};
pub use query::QueryState;
pub use record::{Record, Value};
pub use selection::Selection;
pub use view::View;

pub mod prelude {
    pub use crate::autocomplete::Autocomplete;
    pub use crate::config::AutocompleteConfig;
    pub use crate::error::{ActivationError, BuildError};
    pub use crate::filter::{fuzzy_filter, substring_filter};
    pub use crate::floating::{Anchored, FloatingAdapter, Placement, Rect, Size};
    pub use crate::item::{AutocompleteItem, Candidate, Shape};
    pub use crate::panel::{Panel, PanelState, Row};
    pub use crate::record::{Record, Value};
    pub use crate::selection::Selection;
}
