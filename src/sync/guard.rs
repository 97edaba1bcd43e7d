//! Single-flight guard for sync runs

use std::sync::atomic::{AtomicBool, Ordering};

/// Allows at most one sync at a time
#[derive(Debug, Default)]
pub struct SyncGuard {
    in_flight: AtomicBool,
}

/// Held while a sync runs; releases the guard on drop
#[derive(Debug)]
pub struct SyncPermit<'a> {
    guard: &'a SyncGuard,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard, or `None` if a sync is already running
    pub fn try_acquire(&self) -> Option<SyncPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SyncPermit { guard: self })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for SyncPermit<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}
