//! CSV reader.

use std::{fs::File, io::Read, path::Path};

use csv::ReaderBuilder;

use super::text_cell;
use crate::{
    error::{AppResult, file_read_error, table_read_error},
    table::Table
};

/// Read a CSV file whose first record is the header row
pub fn read_delimited(path: &Path, missing_markers: &[String]) -> AppResult<Table> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| file_read_error(&source, e))?;
    read_delimited_from(file, &source, missing_markers)
}

/// Read CSV data from any reader; `source` names it in error messages.
///
/// Blank lines are skipped. Records shorter than the header are padded
/// with missing cells, longer ones are rejected.
///
/// # Example
///
/// ```
/// use sql_query_generator::reader::delimited::read_delimited_from;
///
/// let data = "id,name\n1,Alice\n2,\n";
/// let table = read_delimited_from(data.as_bytes(), "inline", &[String::new()]).unwrap();
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column("name").unwrap()[1], None);
/// ```
pub fn read_delimited_from<R: Read>(
    reader: R,
    source: &str,
    missing_markers: &[String]
) -> AppResult<Table> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv
        .headers()
        .map_err(|e| table_read_error(source, e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(table_read_error(source, "No columns to parse from file"));
    }

    let mut rows = Vec::new();
    for (index, record) in csv.records().enumerate() {
        let record = record.map_err(|e| table_read_error(source, e.to_string()))?;
        if record.len() > headers.len() {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            return Err(table_read_error(
                source,
                format!(
                    "record {} (line: {}): expected {} fields, saw {}",
                    index + 1,
                    line,
                    headers.len(),
                    record.len()
                )
            ));
        }
        rows.push(
            record
                .iter()
                .map(|field| text_cell(field, missing_markers))
                .collect()
        );
    }

    Ok(Table::from_rows(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputConfig;

    fn read(data: &str) -> AppResult<Table> {
        read_delimited_from(data.as_bytes(), "test.csv", &InputConfig::default().missing_markers)
    }

    #[test]
    fn test_reads_header_and_rows() {
        let table = read("id,name\n1,Alice\n2,-\n").unwrap();
        let names: Vec<_> = table.column_names().collect();
        assert_eq!(names, ["id", "name"]);
        assert_eq!(table.column("name").unwrap(), &[Some("Alice".to_string()), Some("-".to_string())]);
    }

    #[test]
    fn test_missing_markers_become_none() {
        let table = read("a,b,c\n,NA,x\n").unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("a"), Some(None));
        assert_eq!(row.get("b"), Some(None));
        assert_eq!(row.get("c"), Some(Some("x")));
    }

    #[test]
    fn test_short_record_padded() {
        let table = read("a,b\n1\n").unwrap();
        assert_eq!(table.rows().next().unwrap().get("b"), Some(None));
    }

    #[test]
    fn test_long_record_rejected() {
        assert!(read("a,b\n1,2,3\n").is_err());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(read("").is_err());
    }

    #[test]
    fn test_header_only() {
        let table = read("a,b\n").unwrap();
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let table = read("name,city\n\"Doe, John\",Paris\n").unwrap();
        assert_eq!(
            table.rows().next().unwrap().get("name"),
            Some(Some("Doe, John"))
        );
    }
}
