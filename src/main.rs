//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `unshorten` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use log::debug;

use unshorten::config::Opt;
use unshorten::initialization::init_logger_with;
use unshorten::{HopRecord, RedirectResolver};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let resolver = RedirectResolver::from_config(opt.transport_config())
        .context("Failed to initialize resolver")?;

    let mut stream = resolver.resolve_stream(&opt.url, opt.max_redirects);
    let chain = stream.chain_handle();
    let mut body = Vec::new();
    let mut failure = None;

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(chunk) => {
                debug!("Received {} body bytes", chunk.len());
                body.extend_from_slice(&chunk);
            }
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    let hops = chain.hops();
    match failure {
        None => {
            print_chain(&hops);
            if opt.print_body {
                std::io::stdout()
                    .write_all(&body)
                    .context("Failed to write body to stdout")?;
            }
            Ok(())
        }
        Some(e) => {
            eprintln!("unshorten error [{}]: {}", e.kind(), e);
            print_chain(&hops);
            process::exit(1);
        }
    }
}

fn print_chain(hops: &[HopRecord]) {
    for (i, hop) in hops.iter().enumerate() {
        let status = hop
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>2}  {:>3}  {}", i, status, hop.url);
    }
}
