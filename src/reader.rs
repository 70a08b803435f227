//! Tabular input readers.
//!
//! The reader is chosen once from the file extension (case-insensitive):
//!
//! | Extension | Reader |
//! |-----------|--------|
//! | `.csv` | [`delimited`] |
//! | `.xls`, `.xlsx` | [`spreadsheet`] |
//!
//! Any other extension is rejected before the file is opened. The first row
//! of every input is the header row; the whole file is loaded into memory.

pub mod delimited;
pub mod spreadsheet;

use std::{fmt, fs, path::Path};

use tracing::debug;

use crate::{
    config::InputConfig,
    error::{AppResult, file_read_error, unsupported_format_error},
    table::Table
};

/// Input file family detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Delimited,
    Spreadsheet
}

impl InputFormat {
    /// Detect the format of `path` from its extension.
    ///
    /// # Errors
    ///
    /// Returns an unsupported format error for anything other than `csv`,
    /// `xls` or `xlsx`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// use sql_query_generator::reader::InputFormat;
    ///
    /// assert_eq!(
    ///     InputFormat::from_path(Path::new("data/Report.XLSX")).unwrap(),
    ///     InputFormat::Spreadsheet
    /// );
    /// assert!(InputFormat::from_path(Path::new("notes.txt")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Delimited),
            Some("xls") | Some("xlsx") => Ok(Self::Spreadsheet),
            _ => Err(unsupported_format_error(&path.display().to_string()))
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delimited => f.write_str("CSV"),
            Self::Spreadsheet => f.write_str("Excel")
        }
    }
}

/// Load a table from `path` using the reader matching its extension.
///
/// # Errors
///
/// - unsupported extension
/// - the file cannot be opened
/// - the contents are malformed (no header row, corrupt workbook, a CSV
///   record with more fields than the header)
pub fn read_table(path: &Path, input: &InputConfig) -> AppResult<Table> {
    let format = InputFormat::from_path(path)?;
    let source = path.display().to_string();
    fs::metadata(path).map_err(|e| file_read_error(&source, e))?;
    debug!(path = %source, format = %format, "reading input table");

    let table = match format {
        InputFormat::Delimited => delimited::read_delimited(path, &input.missing_markers)?,
        InputFormat::Spreadsheet => spreadsheet::read_spreadsheet(path, &input.missing_markers)?
    };

    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        "input table loaded"
    );
    Ok(table)
}

/// Map a raw text cell to a table cell, honoring the missing markers
pub(crate) fn text_cell(text: &str, missing_markers: &[String]) -> Option<String> {
    if missing_markers.iter().any(|marker| marker == text) {
        None
    } else {
        Some(text.to_string())
    }
}
