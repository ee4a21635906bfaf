// src/logging.rs
// =============================================================================
// Sets up tracing output.
//
// Discovered URLs go to stdout, so everything tracing prints goes to stderr.
// RUST_LOG wins when set; otherwise we show warnings from dependencies and
// info (or debug with -v) from this crate.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,link_extract=debug"
    } else {
        "warn,link_extract=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
