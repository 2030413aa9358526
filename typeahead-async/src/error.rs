//! Error types.

use thiserror::Error;

/// Errors from the async search helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The background task has stopped; no more values will arrive.
    #[error("search task has stopped")]
    Closed,
}
