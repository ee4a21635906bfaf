// src/crawl/mod.rs
// =============================================================================
// This module handles recursive link discovery.
//
// Features:
// - One concurrent task per discovered page, no fixed worker pool
// - Exactly-once discovery of every URL, even when tasks race
// - Configurable depth limit and optional fetch ceiling
// - Scope filtering relative to the seed origin
// - A live result stream that closes when the last task finishes
//
// Submodules:
// - engine: the per-page task loop and the `crawl` entry point
// - context: per-run state shared by all tasks (origin, options, ...)
// - registry: the dedup registry with its atomic claim
// - tracker: the outstanding-work counter
// - stream: the result channel
// =============================================================================

mod context;
mod engine;
mod registry;
mod stream;
mod tracker;

pub use context::{CrawlOptions, Origin};
pub use engine::crawl;
pub use stream::Discovery;
