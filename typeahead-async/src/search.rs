//! Async search coordinator.
//!
//! Wires an autocomplete's input-change notifications to a host fetch
//! function: the query is debounced, every settled query gets a [`Ticket`],
//! fetches run concurrently, and responses for anything but the latest
//! ticket are dropped. The widget itself stays synchronous; the host pulls
//! [`SearchEvent`]s and applies them between renders.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use typeahead::Autocomplete;

use crate::debounce::{Debouncer, spawn_debounce};
use crate::error::SearchError;
use crate::sequence::{Sequencer, Ticket};

/// Progress of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<T> {
    /// A settled query is being fetched.
    Started { ticket: Ticket, query: String },
    /// The fetch returned candidates.
    Finished { ticket: Ticket, options: Vec<T> },
    /// The fetch failed.
    Failed { ticket: Ticket, message: String },
}

impl<T> SearchEvent<T> {
    /// The request this event belongs to.
    pub fn ticket(&self) -> Ticket {
        match self {
            SearchEvent::Started { ticket, .. }
            | SearchEvent::Finished { ticket, .. }
            | SearchEvent::Failed { ticket, .. } => *ticket,
        }
    }

    /// Push this event into the widget's host-owned props.
    ///
    /// A failure shows up as an empty candidate list with loading cleared.
    pub fn apply(self, widget: &mut Autocomplete<T>) {
        match self {
            SearchEvent::Started { .. } => widget.set_loading(true),
            SearchEvent::Finished { options, .. } => {
                widget.set_options(options);
                widget.set_loading(false);
            }
            SearchEvent::Failed { .. } => {
                widget.set_options(Vec::new());
                widget.set_loading(false);
            }
        }
    }
}

/// Handle for feeding query text into an [`AsyncSearch`].
///
/// Cheap to clone, meant to be moved into the widget's `on_input_change`.
#[derive(Debug, Clone)]
pub struct Notifier {
    input: Debouncer<String>,
}

impl Notifier {
    /// Report the latest typed text.
    pub fn notify(&self, text: &str) {
        log::trace!("search notify query={:?}", text);
        self.input.set(text.to_string());
    }

    /// Returns true once the search it feeds has shut down.
    pub fn is_closed(&self) -> bool {
        self.input.is_closed()
    }
}

/// Debounced, sequenced async search.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use typeahead::Autocomplete;
/// use typeahead_async::AsyncSearch;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let all = vec!["Euro".to_string(), "US Dollar".to_string()];
/// let mut search = AsyncSearch::spawn(Duration::from_millis(10), move |query: String| {
///     let all = all.clone();
///     async move {
///         let needle = query.to_lowercase();
///         Ok::<_, String>(
///             all.into_iter()
///                 .filter(|c| c.to_lowercase().contains(&needle))
///                 .collect::<Vec<String>>(),
///         )
///     }
/// });
///
/// let notifier = search.notifier();
/// let mut widget = Autocomplete::builder()
///     .label("Currency")
///     .on_input_change(move |text| notifier.notify(text))
///     .on_change(|_: &String| {})
///     .build()
///     .unwrap();
///
/// widget.input("eu");
/// search.next_event().await.unwrap().apply(&mut widget); // started
/// search.next_event().await.unwrap().apply(&mut widget); // finished
///
/// assert_eq!(widget.visible_matches(), vec!["Euro".to_string()]);
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncSearch<T> {
    notifier: Notifier,
    sequencer: Sequencer,
    events: mpsc::UnboundedReceiver<SearchEvent<T>>,
    task: JoinHandle<()>,
    debounce_task: JoinHandle<()>,
}

impl<T: Send + 'static> AsyncSearch<T> {
    /// Start the search task.
    ///
    /// `fetch` is called with each query that stays unchanged for `delay`.
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut, E>(delay: Duration, fetch: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let (input, mut settled, debounce_task) = spawn_debounce(String::new(), delay);
        let (tx, events) = mpsc::unbounded_channel();
        let sequencer = Sequencer::new();
        let fetch = Arc::new(fetch);

        let task_sequencer = sequencer.clone();
        let task = tokio::spawn(async move {
            while let Ok(query) = settled.changed().await {
                let ticket = task_sequencer.issue();
                log::debug!("search {} started query={:?}", ticket, query);

                let started = SearchEvent::Started {
                    ticket,
                    query: query.clone(),
                };
                if tx.send(started).is_err() {
                    break;
                }

                let fetch = Arc::clone(&fetch);
                let tx = tx.clone();
                let sequencer = task_sequencer.clone();
                tokio::spawn(async move {
                    let result = fetch(query).await;

                    if !sequencer.is_current(ticket) {
                        log::debug!("search {} stale response dropped", ticket);
                        return;
                    }

                    let event = match result {
                        Ok(options) => {
                            log::debug!("search {} finished count={}", ticket, options.len());
                            SearchEvent::Finished { ticket, options }
                        }
                        Err(e) => {
                            log::warn!("search {} failed: {}", ticket, e);
                            SearchEvent::Failed {
                                ticket,
                                message: e.to_string(),
                            }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
        });

        Self {
            notifier: Notifier { input },
            sequencer,
            events,
            task,
            debounce_task,
        }
    }
}

impl<T> AsyncSearch<T> {
    /// A handle for reporting typed text.
    pub fn notifier(&self) -> Notifier {
        self.notifier.clone()
    }

    /// Report the latest typed text.
    pub fn notify(&self, text: &str) -> Result<(), SearchError> {
        if self.task.is_finished() {
            return Err(SearchError::Closed);
        }
        self.notifier.notify(text);
        Ok(())
    }

    /// The latest issued ticket, if any query has settled.
    pub fn latest(&self) -> Option<Ticket> {
        self.sequencer.latest()
    }

    /// Wait for the next event belonging to the latest request.
    ///
    /// Events for superseded requests are skipped.
    pub async fn next_event(&mut self) -> Result<SearchEvent<T>, SearchError> {
        loop {
            let event = self.events.recv().await.ok_or(SearchError::Closed)?;
            if self.sequencer.is_current(event.ticket()) {
                return Ok(event);
            }
            log::debug!("search {} superseded, skipping event", event.ticket());
        }
    }
}

impl<T> Drop for AsyncSearch<T> {
    fn drop(&mut self) {
        // Notifier clones held by the widget keep the debounce input open
        self.debounce_task.abort();
        self.task.abort();
    }
}
