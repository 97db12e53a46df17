//! es-export: export the full result set of an Elasticsearch query as CSV
//!
//! Pages through a query with the scroll API and streams every hit as one
//! CSV row, projected onto a header fixed by the first hit.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod network;
pub mod scroll;

pub use config::Settings;
pub use error::{ExportError, Result};
pub use export::{ExportParams, ExportSummary, Exporter};
pub use scroll::{Page, PageFetcher, PageSource};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for cluster requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 60;

/// Largest page a single search request may return
pub const MAX_PAGE_SIZE: u32 = 10000;

/// Lifetime requested for the scroll context on every page
pub const SCROLL_KEEP_ALIVE: &str = "2m";
