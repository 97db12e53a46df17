//! es-export: export the full result set of an Elasticsearch query as CSV
//!
//! This is the main entry point for the application.

use clap::Parser;
use es_export::cli::{self, Args};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let out = BufWriter::new(io::stdout());
    match cli::run(&args, out).await {
        Ok(summary) => {
            info!(
                "Exported {} rows ({} columns) in {} pages",
                summary.rows,
                summary.columns.len(),
                summary.pages
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("fatal: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
