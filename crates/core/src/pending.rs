//! Busy tracking for in-flight operations
//!
//! A control that starts a simulated round trip takes a guard from its gate
//! and stays disabled until the guard is dropped. Dropping covers success,
//! failure and unwinding alike.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One gate per triggering control
#[derive(Debug, Clone, Default)]
pub struct PendingGate {
    busy: Arc<AtomicBool>,
}

impl PendingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the gate busy, or `None` if an operation is already running
    pub fn try_begin(&self) -> Option<PendingGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard {
                busy: Arc::clone(&self.busy),
                on_release: None,
            })
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the lifetime of one operation
pub struct PendingGuard {
    busy: Arc<AtomicBool>,
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl PendingGuard {
    /// Run `f` after the gate reopens
    pub fn on_release(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(f));
        self
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        if let Some(f) = self.on_release.take() {
            f();
        }
    }
}

impl std::fmt::Debug for PendingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingGuard")
            .field("has_release_hook", &self.on_release.is_some())
            .finish()
    }
}
