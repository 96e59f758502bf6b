//! Debounced synchronization of the search box with the filter store.
//!
//! The search box edits a local draft on every keystroke. Only once the
//! draft has been stable for the debounce window is it committed, which is
//! when the store sees a [`Action::SetSearch`].
//!
//! ```text
//!   keystrokes ──► draft ──► Debouncer<String> ──► committed ──► SetSearch
//!                 (local)       (window)         (watch slot)    (store)
//! ```

use std::time::Duration;

use fg_debounce::{DebounceError, Debouncer};
use tokio::sync::watch;

use crate::action::Action;
use crate::store::FilterStore;

/// The search box and its debounced link to the store.
///
/// Attaching to a store counts as the first stabilization: the store's
/// current text is dispatched once as [`Action::SetSearch`], the way the
/// frontend commits the initial value when the search box mounts. After
/// that only settled drafts that differ from the committed text come out of
/// [`next_commit`](Self::next_commit).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fg_filters::{Action, FilterStore, SearchSync};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), fg_debounce::DebounceError> {
/// let mut store = FilterStore::new();
/// let mut search = SearchSync::attach(&mut store, Duration::from_millis(10));
/// assert_eq!(store.revision(), 1);
///
/// search.input("heat")?;
/// assert_eq!(search.draft(), "heat");
/// assert_eq!(store.state().search, "");
///
/// if let Some(query) = search.next_commit().await {
///     store.dispatch(Action::SetSearch(query));
/// }
/// assert_eq!(store.state().search, "heat");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SearchSync {
    debouncer: Debouncer<String>,
    committed: watch::Receiver<String>,
    draft: String,
}

impl SearchSync {
    /// Creates a search box showing `initial`, with `initial` committed.
    #[must_use]
    pub fn new(initial: impl Into<String>, delay: Duration) -> Self {
        let initial = initial.into();
        let debouncer = Debouncer::new(initial.clone(), delay);
        let committed = debouncer.subscribe();
        Self {
            debouncer,
            committed,
            draft: initial,
        }
    }

    /// Creates a search box seeded from the store's current search text and
    /// commits that text to the store once.
    pub fn attach(store: &mut FilterStore, delay: Duration) -> Self {
        let initial = store.state().search.clone();
        store.dispatch(Action::SetSearch(initial.clone()));
        Self::new(initial, delay)
    }

    /// Records a keystroke.
    ///
    /// The draft updates immediately; the commit waits for the window.
    ///
    /// # Errors
    ///
    /// Returns [`DebounceError::NoRuntime`] if called outside a tokio runtime.
    pub fn input(&mut self, raw: impl Into<String>) -> Result<(), DebounceError> {
        let raw = raw.into();
        self.draft.clone_from(&raw);
        self.debouncer.input(raw)
    }

    /// Returns the text currently in the box.
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Returns the last committed text.
    #[must_use]
    pub fn committed(&self) -> String {
        self.debouncer.current()
    }

    /// Returns `true` while a draft is waiting for its window.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Returns the debounce window.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Returns an independent receiver of committed values.
    ///
    /// Useful when the caller needs to await commits while also borrowing
    /// the search box elsewhere, for example inside `tokio::select!`.
    #[must_use]
    pub fn commits(&self) -> watch::Receiver<String> {
        self.debouncer.subscribe()
    }

    /// Waits for the next commit.
    ///
    /// Returns `None` once nothing is pending and no commit is unseen,
    /// including when the window elapses on a draft equal to the committed
    /// text.
    pub async fn next_commit(&mut self) -> Option<String> {
        loop {
            if let Some(value) = self.try_commit() {
                return Some(value);
            }
            // The timer may publish and finish between the check above and
            // this one; a finished timer's value is already in the slot.
            let Some(deadline) = self.debouncer.deadline() else {
                return self.try_commit();
            };
            tokio::select! {
                biased;
                changed = self.committed.changed() => changed.ok()?,
                () = tokio::time::sleep_until(deadline) => tokio::task::yield_now().await,
            }
        }
    }

    /// Returns an unseen commit without waiting.
    pub fn try_commit(&mut self) -> Option<String> {
        if self.committed.has_changed().unwrap_or(false) {
            Some(self.committed.borrow_and_update().clone())
        } else {
            None
        }
    }
}
