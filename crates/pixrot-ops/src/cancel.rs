//! Pass-level cancellation.

use crate::{OpsError, OpsResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag checked between row dispatches.
///
/// Clones share the same flag, so one can be handed to another thread and
/// tripped while a pass is running.
///
/// ```rust
/// use pixrot_ops::CancelToken;
///
/// let token = CancelToken::new();
/// let remote = token.clone();
/// remote.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the current and future passes.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clears a previous cancellation request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns [`OpsError::Cancelled`] if cancellation was requested.
    #[inline]
    pub fn check(&self) -> OpsResult<()> {
        if self.is_cancelled() {
            Err(OpsError::Cancelled)
        } else {
            Ok(())
        }
    }
}
