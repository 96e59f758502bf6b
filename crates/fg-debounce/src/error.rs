//! Error types for the fg-debounce crate.

use tokio::runtime::TryCurrentError;

/// Errors that can occur when arming a timer.
#[derive(Debug, thiserror::Error)]
pub enum DebounceError {
    /// A timer was started outside of a tokio runtime.
    ///
    /// Timers are spawned as tasks, so the caller must be inside a runtime
    /// context.
    #[error("no tokio runtime available to drive the timer: {0}")]
    NoRuntime(#[from] TryCurrentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_runtime_display() {
        let source = tokio::runtime::Handle::try_current().unwrap_err();
        let err = DebounceError::from(source);
        assert!(err.to_string().starts_with("no tokio runtime"));
    }
}
