//! Export driver: pulls pages and streams them out as CSV

use super::csv::{CsvWriter, Quoting};
use super::header::{FieldFilter, Header};
use crate::error::{ExportError, Result};
use crate::scroll::{Page, PageSource, TotalHits};
use std::io::Write;
use tracing::{debug, info, warn};

/// Outcome of a completed export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Pages fetched that carried hits
    pub pages: usize,
    /// Data rows written, header excluded
    pub rows: u64,
    /// Columns of the header
    pub columns: Vec<String>,
    /// Total last reported by the server
    pub total: Option<TotalHits>,
}

/// Why the fetch loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// A page came back without hits
    Exhausted,
    /// Hits seen so far equal the reported total
    TotalReached,
    /// The server issued no cursor to continue from
    NoCursor,
}

/// Drives a [`PageSource`] to completion, writing one CSV line per hit.
///
/// The header is derived from the first hit and written before any row.
/// Pages are written and flushed as they arrive; nothing is buffered across
/// pages.
pub struct Exporter<S, W: Write> {
    source: S,
    writer: CsvWriter<W>,
    filter: FieldFilter,
    clear_scroll: bool,
}

impl<S: PageSource, W: Write> Exporter<S, W> {
    pub fn new(source: S, out: W, filter: FieldFilter) -> Self {
        Self {
            source,
            writer: CsvWriter::new(out, Quoting::Never),
            filter,
            clear_scroll: true,
        }
    }

    /// Set the cell quoting policy
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.writer.set_quoting(quoting);
        self
    }

    /// Release the scroll context after a successful run
    pub fn with_clear_scroll(mut self, clear: bool) -> Self {
        self.clear_scroll = clear;
        self
    }

    /// Run the export.
    ///
    /// Any fetch, decode or write failure aborts the run; rows already
    /// written stay written.
    pub async fn run(mut self) -> Result<ExportSummary> {
        let mut cursor: Option<String> = None;
        let mut header: Option<Header> = None;
        let mut summary = ExportSummary::default();
        let mut seen: u64 = 0;

        let stop = loop {
            let page = match self.source.fetch(cursor.as_deref()).await? {
                Some(page) => page,
                None if header.is_none() => {
                    self.release().await;
                    return Err(ExportError::NoResults);
                }
                None => break Stop::Exhausted,
            };

            if header.is_none() {
                header = Some(self.write_header(&page)?);
            }
            if let Some(ref header) = header {
                for hit in page.hits() {
                    self.writer.write_record(header.project(hit).cells())?;
                }
            }
            self.writer.flush()?;

            seen += page.len() as u64;
            summary.pages += 1;
            summary.total = page.total();
            log_progress(seen, page.total());

            cursor = page.cursor().map(str::to_string);

            if total_reached(seen, page.total()) {
                break Stop::TotalReached;
            }
            if cursor.is_none() {
                break Stop::NoCursor;
            }
        };

        match stop {
            Stop::NoCursor if !total_reached(seen, summary.total) => {
                warn!(
                    "server issued no scroll cursor, stopping after {} hits; \
                     set an index to scroll through larger result sets",
                    seen
                );
            }
            stop => debug!("export finished: {:?}", stop),
        }

        self.release().await;

        summary.rows = seen;
        summary.columns = header.map(|h| h.columns().to_vec()).unwrap_or_default();
        Ok(summary)
    }

    /// Release the scroll context when enabled
    async fn release(&mut self) {
        if self.clear_scroll {
            self.source.close().await;
        }
    }

    /// Derive the header from the first hit of the first page and write it
    fn write_header(&mut self, page: &Page) -> Result<Header> {
        let first = page.hits().first().ok_or(ExportError::NoResults)?;
        let header = Header::derive(first, &self.filter);

        if header.is_empty() {
            warn!(
                "none of the requested fields ({}) are present in the first hit",
                self.filter.fields().join(",")
            );
        }

        self.writer.write_record(header.columns())?;
        Ok(header)
    }
}

/// Whether the cumulative hit count matches the total reported by the server.
///
/// A lower-bound total only says "at least", so it never ends the run.
fn total_reached(seen: u64, total: Option<TotalHits>) -> bool {
    matches!(total, Some(total) if !total.is_lower_bound() && total.value() == seen)
}

/// Progress line logged after every page
fn progress_message(seen: u64, total: Option<TotalHits>) -> String {
    match total {
        Some(total) => format!("got {} of {}", seen, total),
        None => format!("got {} of unknown", seen),
    }
}

fn log_progress(seen: u64, total: Option<TotalHits>) {
    info!("{}", progress_message(seen, total));
}
