//! Last-writer-wins debouncing of a single value.
//!
//! A [`Debouncer`] holds the latest *settled* value in a one-slot
//! [`watch`] channel. Feeding it input arms a [`Timer`]; feeding it again
//! before the timer fires replaces that timer. Subscribers are only woken
//! when a settled value actually differs from the previous one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::DebounceError;
use crate::timer::Timer;

/// Delays a changing value until it has been stable for a fixed window.
///
/// # Guarantees
///
/// - At most one timer is outstanding at any time.
/// - The output never holds an intermediate value that was superseded
///   within the window.
/// - Dropping the debouncer (or calling [`cancel`](Self::cancel)) discards
///   any pending value; nothing is published afterwards.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fg_debounce::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), fg_debounce::DebounceError> {
/// let mut debouncer = Debouncer::new(0_u32, Duration::from_millis(10));
/// debouncer.input(3)?;
/// assert!(debouncer.is_pending());
/// assert_eq!(debouncer.current(), 0);
///
/// tokio::time::sleep(Duration::from_millis(30)).await;
/// assert_eq!(debouncer.current(), 3);
/// # Ok(())
/// # }
/// ```
pub struct Debouncer<T> {
    /// Stability window.
    delay: Duration,

    /// Settled output. Shared with the outstanding timer's callback.
    output: Arc<watch::Sender<T>>,

    /// The single outstanding timer, if any.
    pending: Option<Timer>,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates a debouncer whose output starts at `initial`.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        let (output, _) = watch::channel(initial);
        Self {
            delay,
            output: Arc::new(output),
            pending: None,
        }
    }

    /// Feeds a new input value.
    ///
    /// Cancels the outstanding timer, if any, and arms a fresh one for the
    /// full delay.
    ///
    /// # Errors
    ///
    /// Returns [`DebounceError::NoRuntime`] if called outside a tokio runtime.
    pub fn input(&mut self, value: T) -> Result<(), DebounceError> {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
            tracing::trace!("superseded pending debounce timer");
        }

        let output = Arc::clone(&self.output);
        let timer = Timer::start(self.delay, move || {
            let changed = output.send_if_modified(|current| {
                if *current == value {
                    false
                } else {
                    *current = value;
                    true
                }
            });
            tracing::trace!(changed, "debounce window elapsed");
        })?;

        self.pending = Some(timer);
        Ok(())
    }

    /// Returns a receiver for settled values.
    ///
    /// The receiver treats the current output as already seen, so its first
    /// [`changed`](watch::Receiver::changed) resolves on the next settled
    /// value that differs from it.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.subscribe()
    }

    /// Returns a copy of the current settled value.
    #[must_use]
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }
}

impl<T> Debouncer<T> {
    /// Returns the stability window.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns `true` if an input is waiting for its window to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(Timer::is_pending)
    }

    /// Returns when the pending input is due, or `None` if nothing is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .filter(|timer| timer.is_pending())
            .map(Timer::deadline)
    }

    /// Discards any pending input without publishing it.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if self.pending.as_ref().is_some_and(Timer::is_pending) {
            tracing::debug!("dropping debouncer with a pending value");
        }
        self.cancel();
    }
}
