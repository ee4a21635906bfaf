// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the target URL and work out its origin
// 3. Build the shared HTTP client and start the crawl
// 4. Print every discovered URL as soon as it arrives
// 5. Exit with proper code (0 = crawl finished, 1 = invalid URL, 2 = error)
// =============================================================================

mod cli;
mod crawl;
mod extract;
mod fetch;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use url::Url;

use cli::Cli;
use crawl::{Discovery, Origin};
use fetch::ReqwestFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl completed
//   Ok(1) = the target is not an absolute http(s) URL
//   Err   = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let origin = match Origin::parse(&cli.target_url) {
        Ok(origin) => origin,
        Err(_) => {
            eprintln!("Invalid URL. Required format: http(s)://<target>");
            return Ok(1);
        }
    };

    let origin_url = Url::parse(origin.as_str()).context("parsing seed origin")?;
    let fetcher = ReqwestFetcher::new(&cli.fetch_settings(origin_url))
        .context("building HTTP client")?;

    let mut stream = crawl::crawl(&cli.target_url, cli.crawl_options(), Arc::new(fetcher))?;

    let mut printed = 0usize;
    while let Some(discovery) = stream.recv().await {
        // Already filtered by the engine; checked again so stdout can never
        // show a foreign URL unless -s was given
        if cli.log_out_of_scope || stream.origin().contains(&discovery.url) {
            print_discovery(&discovery, cli.json)?;
            printed += 1;
        }
    }

    info!(
        printed,
        claimed = stream.claimed(),
        outstanding = stream.outstanding(),
        "crawl finished"
    );

    Ok(0)
}

// Prints one discovery, either as a bare URL or as a JSON line
fn print_discovery(discovery: &Discovery, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(discovery)?);
    } else {
        println!("{}", discovery.url);
    }
    Ok(())
}
