//! Per-stream cancellation handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// Cancels one replay stream.
///
/// Each [`Replay`](crate::Replay) owns its own handle; clones share the same
/// flag, so a connection task can keep one while another task consumes the
/// stream. Cancelling wakes a replay that is waiting between rows.
#[derive(Debug, Clone, Default)]
pub struct ReplayHandle {
    inner: Arc<HandleInner>,
}

#[derive(Debug, Default)]
struct HandleInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl ReplayHandle {
    /// Creates a new, not yet cancelled handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the replay. Idempotent.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::AcqRel) {
            // notify_one keeps a permit if the replay is not waiting yet.
            self.inner.notify.notify_one();
        }
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves when the handle is cancelled.
    pub(crate) async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        self.inner.notify.notified().await;
    }
}
