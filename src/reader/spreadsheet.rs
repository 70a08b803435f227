//! Excel reader (`.xls`, `.xlsx`) backed by `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use super::text_cell;
use crate::{
    error::{AppResult, table_read_error},
    table::Table
};

/// Read the first worksheet of a workbook; its first row is the header.
///
/// Rows where every cell is empty are skipped.
pub fn read_spreadsheet(path: &Path, missing_markers: &[String]) -> AppResult<Table> {
    let source = path.display().to_string();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| table_read_error(&source, e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| table_read_error(&source, "Workbook has no worksheets"))?
        .map_err(|e| table_read_error(&source, e.to_string()))?;

    let mut rows = range
        .rows()
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)));
    let header = rows
        .next()
        .ok_or_else(|| table_read_error(&source, "No columns to parse from file"))?;
    let headers: Vec<String> = header
        .iter()
        .map(|cell| cell_text(cell, &[]).unwrap_or_default())
        .collect();

    let data = rows
        .map(|row| {
            row.iter()
                .map(|cell| cell_text(cell, missing_markers))
                .collect()
        })
        .collect();

    Ok(Table::from_rows(headers, data))
}

/// Text form of a worksheet cell; `None` for empty and error cells
pub fn cell_text(cell: &Data, missing_markers: &[String]) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => text_cell(text, missing_markers),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(value.to_string()),
        Data::Bool(true) => Some(String::from("True")),
        Data::Bool(false) => Some(String::from("False")),
        Data::DateTime(value) => Some(
            value
                .as_datetime()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| value.as_f64().to_string())
        ),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Some(text.clone())
    }
}

#[cfg(test)]
mod tests {
    use calamine::{CellErrorType, ExcelDateTime, ExcelDateTimeType};

    use super::*;

    #[test]
    fn test_float_cells_drop_integral_fraction() {
        assert_eq!(cell_text(&Data::Float(1.0), &[]), Some("1".to_string()));
        assert_eq!(cell_text(&Data::Float(2.5), &[]), Some("2.5".to_string()));
    }

    #[test]
    fn test_datetime_cells_render_as_timestamp() {
        let noon = ExcelDateTime::new(45296.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            cell_text(&Data::DateTime(noon), &[]),
            Some("2024-01-05 12:00:00".to_string())
        );
    }

    #[test]
    fn test_empty_and_error_cells_are_missing() {
        assert_eq!(cell_text(&Data::Empty, &[]), None);
        assert_eq!(cell_text(&Data::Error(CellErrorType::NA), &[]), None);
    }

    #[test]
    fn test_string_cells_honor_markers() {
        let markers = vec!["N/A".to_string()];
        assert_eq!(cell_text(&Data::String("N/A".into()), &markers), None);
        assert_eq!(
            cell_text(&Data::String("-".into()), &markers),
            Some("-".to_string())
        );
    }

    #[test]
    fn test_bool_cells() {
        assert_eq!(cell_text(&Data::Bool(true), &[]), Some("True".to_string()));
    }

    #[test]
    fn test_corrupt_workbook_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();
        assert!(read_spreadsheet(&path, &[]).is_err());
    }
}
