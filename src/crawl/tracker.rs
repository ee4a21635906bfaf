// src/crawl/tracker.rs
// =============================================================================
// The outstanding-work counter.
//
// Nobody knows up front how many pages a crawl will fetch: every page can
// spawn more tasks. So instead of a supervisor that waits for N things, we
// count live tasks:
//
// - the counter starts at 1 (the seed task)
// - a parent increments it BEFORE spawning a child
// - every task decrements it when it finishes
//
// Because a parent only finishes after its children were counted, the
// counter can only hit zero once, when the last task of the whole crawl is
// done. `finish` reports that transition to exactly one caller.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct WorkTracker {
    outstanding: AtomicUsize,
}

impl WorkTracker {
    // A tracker that already counts the seed task
    pub fn new() -> Self {
        Self {
            outstanding: AtomicUsize::new(1),
        }
    }

    // Registers one more task; call before spawning it
    pub fn begin(&self) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    // Marks one task as finished
    //
    // Returns true only for the call that brought the counter to zero.
    pub fn finish(&self) -> bool {
        let previous = self.outstanding.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "finish() called more often than begin()");
        previous == 1
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }
}

impl Default for WorkTracker {
    fn default() -> Self {
        Self::new()
    }
}
