// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage: link-extract [FLAGS] <TARGET_URL>
// =============================================================================

use clap::Parser;
use std::time::Duration;

use crate::crawl::CrawlOptions;
use crate::extract::ExtractOptions;
use crate::fetch::FetchSettings;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// A missing TARGET_URL makes clap print usage and exit non-zero for us
#[derive(Parser, Debug)]
#[command(
    name = "link-extract",
    version = "0.1.0",
    about = "Recursively discover the URLs reachable from a web page",
    long_about = "link-extract fetches a page, collects every link-like string in its markup \
                  and text, and keeps following newly found URLs up to a maximum depth. \
                  Every URL is printed once, as soon as it is discovered."
)]
pub struct Cli {
    /// Page to start from (e.g., https://example.com)
    pub target_url: String,

    /// Log urls that are not based on the target url and thus out of scope
    #[arg(short = 's', long)]
    pub log_out_of_scope: bool,

    /// Maximum recursion depth
    ///
    /// Depth 0 = only report the links on the target page
    /// Depth 1 = also fetch those pages and report their links
    /// etc.
    #[arg(short = 'r', long, default_value_t = 1)]
    pub max_depth: usize,

    /// Cookies to send with each request, e.g. "ID=1ymu32x7;SESSION=29"
    #[arg(short = 'b', long, default_value = "")]
    pub cookie: String,

    /// Maximum number of pages fetched at the same time (default: unbounded)
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short = 't', long, default_value_t = 30)]
    pub timeout: u64,

    /// Only look at <a href> and <script src>, skip scanning the raw text
    #[arg(long)]
    pub no_text_scan: bool,

    /// Print one JSON object per discovery instead of a bare URL
    #[arg(long)]
    pub json: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            max_depth: self.max_depth,
            log_out_of_scope: self.log_out_of_scope,
            concurrency: self.concurrency,
            extract: ExtractOptions {
                scan_text: !self.no_text_scan,
            },
        }
    }

    // The cookie jar is bound to the seed origin, which the caller passes in
    pub fn fetch_settings(&self, origin: url::Url) -> FetchSettings {
        FetchSettings {
            timeout: Duration::from_secs(self.timeout),
            cookie: self.cookie.clone(),
            cookie_url: Some(origin),
            ..FetchSettings::default()
        }
    }
}
