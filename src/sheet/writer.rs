//! Row sinks for the generated report
//!
//! The report only needs somewhere to put finished rows; a remote
//! spreadsheet writer would implement the same trait behind its own
//! authentication, which stays outside this crate.

use std::fs::File;
use std::path::Path;

use crate::error::AppError;

/// Destination for finished report rows.
pub trait RowSink {
    /// Appends one row to the report.
    fn write_row(&mut self, row: &[String]) -> Result<(), AppError>;

    /// Flushes any buffered rows. Must be called once after the last row.
    fn finish(&mut self) -> Result<(), AppError>;
}

/// Writes report rows to a CSV file.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    /// Creates the output file, truncating any existing report at `path`.
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let writer = csv::Writer::from_path(path)?;
        Ok(CsvSink { writer })
    }
}

impl RowSink for CsvSink {
    fn write_row(&mut self, row: &[String]) -> Result<(), AppError> {
        self.writer.write_record(row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AppError> {
        self.writer.flush()?;
        Ok(())
    }
}
