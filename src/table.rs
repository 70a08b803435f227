//! In-memory table loaded from an input file.
//!
//! A [`Table`] is an ordered set of uniquely named columns, each holding one
//! optional textual value per row. Values are never typed: a number, a date
//! and a word are all kept as the text the reader produced for them, and an
//! absent cell is `None`.
//!
//! Tables are built once by a reader and never mutated afterwards.

use compact_str::{CompactString, ToCompactString, format_compact};
use indexmap::{IndexMap, IndexSet};

/// One cell: `None` when the source had no value
pub type Cell = Option<String>;

/// Ordered named columns of optional text values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns:   IndexMap<CompactString, Vec<Cell>>,
    row_count: usize
}

impl Table {
    /// Build a table from a header row and data rows.
    ///
    /// Header names are normalized with [`normalize_headers`]. Rows shorter
    /// than the header are padded with missing cells; surplus cells are
    /// dropped (readers reject such rows before getting here).
    ///
    /// # Example
    ///
    /// ```
    /// use sql_query_generator::table::Table;
    ///
    /// let table = Table::from_rows(
    ///     vec!["id".to_string(), "name".to_string()],
    ///     vec![vec![Some("1".to_string())]]
    /// );
    /// assert_eq!(table.column_count(), 2);
    /// assert_eq!(table.row_count(), 1);
    /// ```
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let names = normalize_headers(headers);
        let row_count = rows.len();
        let mut columns: IndexMap<CompactString, Vec<Cell>> = names
            .into_iter()
            .map(|name| (name, Vec::with_capacity(row_count)))
            .collect();

        for mut row in rows {
            row.resize(columns.len(), None);
            for (values, cell) in columns.values_mut().zip(row) {
                values.push(cell);
            }
        }

        Self { columns, row_count }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|name| name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.get(name).map(|values| values.as_slice())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// True when the table has no data rows (it may still have columns)
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Iterate rows in file order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.row_count).map(move |index| Row { table: self, index })
    }
}

/// Borrowed view of one row across all columns
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize
}

impl<'a> Row<'a> {
    /// Zero-based position of the row in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the named column; `None` if the column does not exist
    pub fn get(&self, column: &str) -> Option<Option<&'a str>> {
        self.table
            .columns
            .get(column)
            .map(|values| values[self.index].as_deref())
    }

    /// `(column, value)` pairs in column order
    pub fn cells(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        let index = self.index;
        self.table
            .columns
            .iter()
            .map(move |(name, values)| (name.as_str(), values[index].as_deref()))
    }
}

/// Make header names usable as unique column keys.
///
/// Blank names become `Unnamed: <index>`; repeated names get `.1`, `.2`, …
/// suffixes in order of appearance.
///
/// # Example
///
/// ```
/// use sql_query_generator::table::normalize_headers;
///
/// let names = normalize_headers(vec!["a".into(), "".into(), "a".into()]);
/// assert_eq!(names, ["a", "Unnamed: 1", "a.1"]);
/// ```
pub fn normalize_headers(headers: Vec<String>) -> Vec<CompactString> {
    let mut seen: IndexSet<CompactString> = IndexSet::with_capacity(headers.len());

    for (index, header) in headers.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format_compact!("Unnamed: {}", index)
        } else {
            header.to_compact_string()
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format_compact!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name);
    }

    seen.into_iter().collect()
}
