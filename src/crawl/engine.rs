// src/crawl/engine.rs
// =============================================================================
// The crawl engine: one tokio task per page, fanning out as links are found.
//
// Each task walks through the same steps:
//
//   fetch -> extract -> resolve -> scope filter -> claim -> emit -> spawn
//
// 1. Skip targets that are not absolute http(s) URLs
// 2. Fetch the page (waiting for a permit first if a ceiling is set)
// 3. Extract raw link candidates
// 4. Resolve each candidate against the page URL
// 5. Drop out-of-scope URLs unless they should be logged
// 6. Claim the URL in the dedup registry; losers stop here
// 7. Emit it, and spawn a child task if the depth budget allows
// 8. Finish: decrement the work counter, close the stream at zero
//
// A failed fetch only ends its own task. There are no retries and no
// crawl-wide abort.
// =============================================================================

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context::{parse_target, CrawlContext, CrawlError, CrawlOptions, Origin};
use super::stream::{result_channel, Discovery, ResultStream};
use crate::extract::{extract_links, resolve};
use crate::fetch::{Fetcher, Page};

// Starts crawling from `seed` and returns the stream of discoveries
//
// Must be called from inside a tokio runtime: the seed task is spawned
// right away. The stream closes by itself once every task has finished.
//
// The seed URL is claimed up front, so pages linking back to it neither
// report nor fetch it again.
pub fn crawl(
    seed: &str,
    options: CrawlOptions,
    fetcher: Arc<dyn Fetcher>,
) -> Result<ResultStream, CrawlError> {
    let origin = Origin::parse(seed)?;
    let (sink, rx) = result_channel();
    let context = Arc::new(CrawlContext::new(origin, options, fetcher, sink));

    context.registry.claim(seed);

    info!(
        seed,
        origin = %context.origin,
        max_depth = context.options.max_depth,
        log_out_of_scope = context.options.log_out_of_scope,
        "starting crawl"
    );

    let seed_task = TaskGuard::seed(Arc::clone(&context));
    tokio::spawn(run_task(seed_task, seed.to_string(), 0));

    Ok(ResultStream::new(rx, context))
}

// Ties one unit of outstanding work to a task's lifetime
//
// Dropping the guard (normal return, early return, panic, or the runtime
// discarding an unpolled task) marks the task as finished. Whoever drops
// the last guard closes the result stream.
struct TaskGuard {
    context: Arc<CrawlContext>,
}

impl TaskGuard {
    // The seed task is already counted by `WorkTracker::new`
    fn seed(context: Arc<CrawlContext>) -> Self {
        Self { context }
    }

    fn child(context: &Arc<CrawlContext>) -> Self {
        context.tracker.begin();
        Self {
            context: Arc::clone(context),
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.context.tracker.finish() {
            debug!(
                claimed = self.context.registry.len(),
                "no outstanding crawl tasks, closing result stream"
            );
            self.context.sink.close();
        }
    }
}

async fn run_task(task: TaskGuard, url: String, depth: usize) {
    let context = &task.context;

    if parse_target(&url).is_none() {
        debug!(%url, depth, "skipping invalid target");
        return;
    }

    let page = {
        // The permit only covers the network round trip
        let _permit = match &context.limiter {
            Some(limiter) => limiter.acquire().await.ok(),
            None => None,
        };

        match context.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(%url, depth, kind = e.kind(), error = %e, "fetch failed");
                return;
            }
        }
    };

    debug!(%url, depth, status = page.status, bytes = page.body.len(), "fetched page");
    expand(&task, &page, depth);
}

// Claims, emits and (depth permitting) follows every link on `page`
fn expand(task: &TaskGuard, page: &Page, depth: usize) {
    let context = &task.context;
    let mut children = 0usize;

    for candidate in extract_links(page, context.origin.as_str(), &context.options.extract) {
        let resolved = resolve(&candidate, &page.url);

        if !context.in_scope(&resolved) {
            continue;
        }

        if !context.registry.claim(&resolved) {
            continue;
        }

        context.sink.emit(Discovery {
            url: resolved.clone(),
            depth: depth + 1,
            found_on: page.url.clone(),
        });

        if depth < context.options.max_depth {
            let child = TaskGuard::child(context);
            tokio::spawn(run_task(child, resolved, depth + 1));
            children += 1;
        }
    }

    debug!(url = %page.url, depth, children, "expanded page");
}
