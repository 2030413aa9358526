//! Error types.

use thiserror::Error;

/// Errors from [`AutocompleteBuilder::build`](crate::AutocompleteBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The label is empty or whitespace.
    #[error("autocomplete requires a label")]
    MissingLabel,
}

/// Why a row activation was refused.
///
/// Activation only ever commits an item that is currently rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// The panel is not shown.
    #[error("panel is not shown")]
    PanelHidden,
    /// The panel shows the loading placeholder.
    #[error("panel is loading")]
    Loading,
    /// No row at that position.
    #[error("no row {row} (panel lists {len})")]
    NoSuchRow { row: usize, len: usize },
}
