//! CSV export module
//!
//! Derives the fixed column header, projects hits onto it and drives the
//! page loop until the result set is exhausted.

mod csv;
mod exporter;
mod header;
mod params;
mod value;

pub use csv::{CsvWriter, Quoting};
pub use exporter::{ExportSummary, Exporter};
pub use header::{FieldFilter, Header, Row};
pub use params::ExportParams;
pub use value::stringify;
