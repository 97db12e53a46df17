//! Scroll protocol module
//!
//! Builds search and scroll requests, decodes result pages and exposes the
//! [`PageSource`] seam the exporter pulls pages through.

mod fetcher;
mod models;
mod request;

pub use fetcher::{PageFetcher, PageSource};
pub use models::*;
pub use request::*;
