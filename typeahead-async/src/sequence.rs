//! Request sequencing for discarding out-of-order responses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// The raw sequence number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing tickets.
///
/// Only the most recently issued ticket is current; a response carrying any
/// older ticket is stale and should be dropped. Cheap to clone: clones share
/// the counter.
///
/// # Example
///
/// ```
/// use typeahead_async::Sequencer;
///
/// let sequencer = Sequencer::new();
/// let first = sequencer.issue();
/// let second = sequencer.issue();
///
/// assert!(!sequencer.is_current(first));
/// assert!(sequencer.is_current(second));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    latest: Arc<AtomicU64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, making every earlier ticket stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is the latest one issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// The latest ticket, if any has been issued.
    pub fn latest(&self) -> Option<Ticket> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }
}
