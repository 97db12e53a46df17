//! Command-line argument definitions.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Export the full result set of an Elasticsearch query as CSV.
#[derive(Parser, Debug)]
#[command(name = "es-export")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("search").required(true).args(["query", "raw_query"])))]
pub struct Args {
    /// The Elasticsearch host, e.g. 'http://localhost:9200'
    #[arg(long, env = "ES_EXPORT_HOST", value_name = "URL")]
    pub host: String,

    /// An optional index to search within; required to scroll past one page
    #[arg(long, value_name = "INDEX")]
    pub index: Option<String>,

    /// A Lucene-syntax search query
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// An Elasticsearch JSON request body, sent verbatim
    #[arg(long = "raw-query", value_name = "JSON")]
    pub raw_query: Option<String>,

    /// A comma separated list of fields to include, in column order
    #[arg(long, value_name = "FIELDS")]
    pub fields: String,

    /// Path to a settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quote cells containing commas, quotes or newlines
    #[arg(long)]
    pub quote: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
