//! Single-slot "mutation in progress" flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Held while a mutation runs; releases the slot on drop, including on
/// early return.
#[derive(Debug)]
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Claims the slot, or returns `None` if another mutation holds it.
    pub(crate) fn try_claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
