//! Cooperative cancellation for the simulation loop

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Shared flag that asks a running simulation to stop
///
/// Clones observe the same flag. Cancellation is permanent.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request cancellation and wake every waiter
    pub fn cancel(&self) {
        *self.lock() = true;
        self.inner.1.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.lock()
    }

    /// Sleep for `timeout`, returning early if the token is cancelled
    ///
    /// Returns `true` if the token was cancelled.
    /// A timeout too large to form a deadline waits until cancellation.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        let mut cancelled = self.lock();

        while !*cancelled {
            cancelled = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    self.inner
                        .1
                        .wait_timeout(cancelled, deadline - now)
                        .map(|(guard, _)| guard)
                        .unwrap_or_else(|poisoned| poisoned.into_inner().0)
                }
                None => self
                    .inner
                    .1
                    .wait(cancelled)
                    .unwrap_or_else(PoisonError::into_inner),
            };
        }

        *cancelled
    }
}
