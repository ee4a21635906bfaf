// src/crawl/registry.rs
// =============================================================================
// The dedup registry: the set of every URL discovered during one crawl run.
//
// Many tasks discover links at the same time, and two of them will often
// find the same URL. Only the first one may report and expand it. That
// decision is a single "claim" operation: test and insert under ONE lock
// acquisition. Checking first and inserting later would let two tasks both
// see "not there yet" and both expand the URL.
//
// The set only grows. Nothing is ever removed during a run.
// =============================================================================

use parking_lot::Mutex;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct DedupRegistry {
    seen: Mutex<HashSet<String>>,
}

impl DedupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Claims `url` for the caller
    //
    // Returns true for exactly one caller per distinct URL (the first
    // discoverer), false for everybody after. Never blocks on I/O.
    pub fn claim(&self, url: &str) -> bool {
        let mut seen = self.seen.lock();
        if seen.contains(url) {
            return false;
        }
        seen.insert(url.to_string())
    }

    // Number of URLs claimed so far
    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }
}
