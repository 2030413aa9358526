//! Debounced values.
//!
//! A [`Debouncer`] takes raw values as fast as they come; the paired
//! [`Debounced`] only sees a value once `delay` has passed without a newer
//! one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::SearchError;

/// Input side of a debounced value. Cheap to clone.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Debouncer<T> {
    /// Feed a new raw value, restarting the quiet period.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Returns true once the timer task has stopped listening.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Output side of a debounced value.
#[derive(Debug)]
pub struct Debounced<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Debounced<T> {
    /// The last settled value (the initial value until something settles).
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next settled value.
    ///
    /// Fails once every [`Debouncer`] has been dropped and the last pending
    /// value has been delivered.
    pub async fn changed(&mut self) -> Result<T, SearchError> {
        self.rx.changed().await.map_err(|_| SearchError::Closed)?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

/// Create a debounced value.
///
/// Must be called from within a tokio runtime: the quiet-period timer runs on
/// a spawned task, which ends when every [`Debouncer`] or the [`Debounced`]
/// is dropped.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use typeahead_async::debounce;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (input, mut output) = debounce(String::new(), Duration::from_millis(10));
///
/// input.set("e".to_string());
/// input.set("eu".to_string());
///
/// assert_eq!(output.changed().await.unwrap(), "eu");
/// # }
/// ```
pub fn debounce<T>(initial: T, delay: Duration) -> (Debouncer<T>, Debounced<T>)
where
    T: Clone + Send + Sync + 'static,
{
    let (input, output, _task) = spawn_debounce(initial, delay);
    (input, output)
}

/// Like [`debounce`], also returning the timer task so an owner can abort it.
pub(crate) fn spawn_debounce<T>(
    initial: T,
    delay: Duration,
) -> (Debouncer<T>, Debounced<T>, JoinHandle<()>)
where
    T: Clone + Send + Sync + 'static,
{
    let (raw_tx, raw_rx) = watch::channel(initial.clone());
    let (out_tx, out_rx) = watch::channel(initial);

    let task = tokio::spawn(run(raw_rx, out_tx, delay));

    (
        Debouncer {
            tx: Arc::new(raw_tx),
        },
        Debounced { rx: out_rx },
        task,
    )
}

async fn run<T: Clone>(mut raw: watch::Receiver<T>, out: watch::Sender<T>, delay: Duration) {
    while raw.changed().await.is_ok() {
        let mut closed = false;

        // Restart the timer on every change until the input goes quiet
        loop {
            tokio::select! {
                changed = raw.changed(), if !closed => {
                    if changed.is_err() {
                        closed = true;
                    }
                }
                _ = tokio::time::sleep(delay) => break,
            }
        }

        let value = raw.borrow_and_update().clone();
        if out.send(value).is_err() || closed {
            break;
        }
    }

    log::trace!("debounce task finished");
}
