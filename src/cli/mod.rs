//! Command-line interface
//!
//! Turns parsed arguments and settings into a configured export run.

mod args;

pub use args::Args;

use crate::config::{self, Settings};
use crate::export::{ExportParams, ExportSummary, Exporter, Quoting};
use crate::network::HttpClient;
use crate::scroll::PageFetcher;
use anyhow::Result;
use std::io::{IsTerminal, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Load settings and apply command-line overrides
pub fn settings(args: &Args) -> Result<Settings> {
    let mut settings = config::load(args.config.as_deref())?;

    if let Some(timeout) = args.timeout {
        settings.outgoing.request_timeout = timeout;
    }
    if args.quote {
        settings.export.quote_cells = true;
    }
    settings.export.validate()?;

    Ok(settings)
}

/// Run an export described by `args`, writing CSV to `out`
pub async fn run<W: Write>(args: &Args, out: W) -> Result<ExportSummary> {
    let params = ExportParams::new(
        &args.host,
        args.index.as_deref(),
        args.query.as_deref(),
        args.raw_query.as_deref(),
        &args.fields,
    )?;
    let settings = settings(args)?;
    debug!("Using settings: {:?}", settings);

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let query = params.scroll_query(&settings.export);
    if !query.is_scrolling() {
        info!("No index given, exporting a single page of results");
    }

    let quoting = if settings.export.quote_cells {
        Quoting::Necessary
    } else {
        Quoting::Never
    };

    let summary = Exporter::new(PageFetcher::new(client, query), out, params.fields)
        .with_quoting(quoting)
        .with_clear_scroll(settings.export.clear_scroll)
        .run()
        .await?;

    Ok(summary)
}
