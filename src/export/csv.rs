//! CSV line writer

use std::io::{self, Write};

/// Cell quoting policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Cells are written as-is, even when they contain separators
    #[default]
    Never,
    /// Cells containing a comma, quote, CR or LF are quoted (RFC 4180)
    Necessary,
}

/// Writes comma-joined, newline-terminated records
pub struct CsvWriter<W: Write> {
    out: W,
    quoting: Quoting,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W, quoting: Quoting) -> Self {
        Self { out, quoting }
    }

    /// Write one record
    pub fn write_record<S: AsRef<str>>(&mut self, cells: &[S]) -> io::Result<()> {
        let line = cells
            .iter()
            .map(|cell| self.escape(cell.as_ref()))
            .collect::<Vec<_>>()
            .join(",");

        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")
    }

    pub fn set_quoting(&mut self, quoting: Quoting) {
        self.quoting = quoting;
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn escape(&self, value: &str) -> String {
        match self.quoting {
            Quoting::Necessary if needs_quotes(value) => {
                format!("\"{}\"", value.replace('"', "\"\""))
            }
            _ => value.to_string(),
        }
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r'])
}
