//! Host-side helpers for feeding an autocomplete from an async source.
//!
//! The widget never waits on anything. These pieces live on the host side of
//! the input-change callback: [`debounce`] holds back keystrokes until the
//! query settles, [`Sequencer`] tags each request so late responses can be
//! recognised, and [`AsyncSearch`] combines both around a fetch function.

pub mod debounce;
pub mod error;
pub mod search;
pub mod sequence;

pub use debounce::{Debounced, Debouncer, debounce};
pub use error::SearchError;
pub use search::{AsyncSearch, Notifier, SearchEvent};
pub use sequence::{Sequencer, Ticket};
