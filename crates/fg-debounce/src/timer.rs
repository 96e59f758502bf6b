//! One-shot cancellable timers.
//!
//! A [`Timer`] runs a callback once its deadline passes unless it has been
//! cancelled first. The handle owns the timer: dropping it cancels, so a
//! timer can never outlive the component that armed it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::DebounceError;

/// Handle to a scheduled callback.
///
/// # Lifecycle
///
/// 1. **Start**: [`Timer::start`] computes the deadline immediately and
///    spawns a task that waits for either the deadline or cancellation.
/// 2. **Fire**: if the deadline wins, the callback runs exactly once.
/// 3. **Cancel**: [`Timer::cancel`] (or drop) guarantees the callback does
///    not run if it has not run already. Cancelling more than once is a
///    no-op.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
/// use fg_debounce::Timer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), fg_debounce::DebounceError> {
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// let timer = Timer::start(Duration::from_millis(10), move || {
///     flag.store(true, Ordering::SeqCst);
/// })?;
///
/// timer.cancel();
/// timer.cancel();
/// tokio::time::sleep(Duration::from_millis(30)).await;
/// assert!(!fired.load(Ordering::SeqCst));
/// # Ok(())
/// # }
/// ```
pub struct Timer {
    /// Cancellation signal observed by the timer task.
    token: CancellationToken,

    /// The task waiting on the deadline.
    task: JoinHandle<()>,

    /// When the callback is due.
    deadline: Instant,
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("deadline", &self.deadline)
            .field("is_pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl Timer {
    /// Schedules `on_fire` to run after `delay`.
    ///
    /// The deadline is taken from the clock at call time, not when the
    /// spawned task is first polled.
    ///
    /// # Errors
    ///
    /// Returns [`DebounceError::NoRuntime`] if called outside a tokio runtime.
    pub fn start<F>(delay: Duration, on_fire: F) -> Result<Self, DebounceError>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current()?;
        let deadline = Instant::now() + delay;
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let task = runtime.spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => {
                    tracing::trace!("timer cancelled before deadline");
                }
                () = tokio::time::sleep_until(deadline) => {
                    tracing::trace!(delay_ms = delay.as_millis(), "timer fired");
                    on_fire();
                }
            }
        });

        Ok(Self {
            token,
            task,
            deadline,
        })
    }

    /// Cancels the timer. Safe to call any number of times.
    pub fn cancel(&self) {
        self.token.cancel();
        self.task.abort();
    }

    /// Returns `true` while the callback may still run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.token.is_cancelled() && !self.task.is_finished()
    }

    /// Returns `true` if the timer was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns the instant the callback is due.
    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}
