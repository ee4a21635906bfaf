// src/crawl/stream.rs
// =============================================================================
// The result stream: discovered URLs, delivered while the crawl runs.
//
// Producer side (`ResultSink`) lives in the crawl context and is shared by
// every task. Consumer side (`ResultStream`) goes back to the caller.
//
// The channel is unbounded, so emitting never waits on the consumer. It is
// closed exactly once: the task that brings the outstanding-work counter to
// zero calls `ResultSink::close`, which drops the only sender. The
// consumer's `recv` then returns None after the last buffered discovery.
// =============================================================================

use futures::Stream;
use parking_lot::Mutex;
use serde::Serialize;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::context::{CrawlContext, Origin};

/// One newly discovered URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discovery {
    /// The resolved, absolute URL
    pub url: String,
    /// Link hops from the seed page
    pub depth: usize,
    /// The page the URL was found on
    pub found_on: String,
}

// Creates a connected sink/receiver pair
pub fn result_channel() -> (ResultSink, UnboundedReceiver<Discovery>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink = ResultSink {
        tx: Mutex::new(Some(tx)),
    };
    (sink, rx)
}

pub struct ResultSink {
    tx: Mutex<Option<UnboundedSender<Discovery>>>,
}

impl ResultSink {
    // Sends a discovery; returns false once the stream is closed or the
    // consumer has gone away
    pub fn emit(&self, discovery: Discovery) -> bool {
        match self.tx.lock().as_ref() {
            Some(tx) => tx.send(discovery).is_ok(),
            None => false,
        }
    }

    // Drops the sender. Calling it again is a no-op.
    pub fn close(&self) {
        self.tx.lock().take();
    }
}

/// Consumer half of a crawl run
pub struct ResultStream {
    rx: UnboundedReceiver<Discovery>,
    context: Arc<CrawlContext>,
}

impl ResultStream {
    pub(super) fn new(rx: UnboundedReceiver<Discovery>, context: Arc<CrawlContext>) -> Self {
        Self { rx, context }
    }

    // Waits for the next discovery; None means the crawl has finished
    pub async fn recv(&mut self) -> Option<Discovery> {
        self.rx.recv().await
    }

    pub fn origin(&self) -> &Origin {
        &self.context.origin
    }

    // Tasks still running (0 once `recv` has returned None)
    pub fn outstanding(&self) -> usize {
        self.context.tracker.outstanding()
    }

    // URLs claimed so far, the seed included
    pub fn claimed(&self) -> usize {
        self.context.registry.len()
    }
}

impl Stream for ResultStream {
    type Item = Discovery;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Discovery>> {
        self.rx.poll_recv(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery(url: &str) -> Discovery {
        Discovery {
            url: url.to_string(),
            depth: 1,
            found_on: "http://h/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_close_ends_the_receiver() {
        let (sink, mut rx) = result_channel();

        assert!(sink.emit(discovery("http://h/a")));
        sink.close();
        sink.close();
        assert!(!sink.emit(discovery("http://h/b")));

        assert_eq!(rx.recv().await, Some(discovery("http://h/a")));
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_discovery_serializes_to_json() {
        let json = serde_json::to_string(&discovery("http://h/a")).unwrap();
        assert_eq!(json, r#"{"url":"http://h/a","depth":1,"found_on":"http://h/"}"#);
    }
}
