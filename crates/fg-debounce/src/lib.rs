//! Cancellable timers and a last-writer-wins debouncer on tokio.
//!
//! # Overview
//!
//! - [`Timer`] is a one-shot delayed callback. Cancelling is idempotent and
//!   dropping the handle cancels it.
//! - [`Debouncer`] owns at most one [`Timer`] and a one-slot output value.
//!   Every input supersedes the outstanding timer; the output only moves
//!   once the input has been quiet for the whole delay.
//!
//! # Architecture
//!
//! ```text
//!  input("a") ──┐     input("ab") ──┐     input("abc") ──┐
//!               ▼                   ▼                    ▼
//!          ┌─────────┐  cancel ┌─────────┐  cancel  ┌─────────┐
//!          │ Timer a │ ◄────── │ Timer ab│ ◄─────── │Timer abc│
//!          └─────────┘         └─────────┘          └────┬────┘
//!                                                        │ delay elapsed
//!                                                        ▼
//!                                              ┌───────────────────┐
//!                                              │ watch::Sender<T>  │ -> subscribers
//!                                              └───────────────────┘
//! ```
//!
//! # Runtime
//!
//! Timers are tokio tasks, so inputs must be fed from inside a tokio
//! runtime. Outside one, [`Debouncer::input`] returns
//! [`DebounceError::NoRuntime`]. Timing uses [`tokio::time`], so tests can
//! pause the clock.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use fg_debounce::Debouncer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), fg_debounce::DebounceError> {
//! let mut debouncer = Debouncer::new(String::new(), Duration::from_millis(20));
//! let mut output = debouncer.subscribe();
//!
//! debouncer.input("star".to_owned())?;
//! debouncer.input("star wars".to_owned())?;
//!
//! output.changed().await.ok();
//! assert_eq!(*output.borrow(), "star wars");
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod debouncer;
pub mod error;
pub mod timer;

pub use debouncer::Debouncer;
pub use error::DebounceError;
pub use timer::Timer;
