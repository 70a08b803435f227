//! Row rendering for INSERT and UPDATE statements.
//!
//! INSERT produces one statement for the whole table with a value tuple per
//! row. UPDATE produces one statement per row and leaves sentinel cells out
//! of the SET clause instead of assigning `NULL`.

use crate::{
    table::{Row, Table},
    value::{format_value, is_sentinel, quote}
};

/// Render one row as a parenthesized value tuple: `('1', NULL)`
pub fn render_values_tuple(row: &Row<'_>) -> String {
    let values: Vec<String> = row.cells().map(|(_, value)| format_value(value)).collect();
    format!("({})", values.join(", "))
}

/// Render the SET assignments of one row: `id = '1', name = 'Alice'`.
///
/// Sentinel cells are skipped, so a row made only of sentinels yields an
/// empty string.
pub fn render_set_clause(row: &Row<'_>) -> String {
    let assignments: Vec<String> = row
        .cells()
        .filter_map(|(column, value)| match value {
            Some(text) if !is_sentinel(value) => Some(format!("{} = {}", column, quote(text))),
            _ => None
        })
        .collect();
    assignments.join(", ")
}

/// Render the whole table as a single multi-row INSERT.
///
/// A table without rows still yields `... VALUES ;`.
///
/// # Example
///
/// ```
/// use sql_query_generator::{render::render_insert, table::Table};
///
/// let table = Table::from_rows(
///     vec!["id".into(), "name".into()],
///     vec![
///         vec![Some("1".into()), Some("Alice".into())],
///         vec![Some("2".into()), Some("-".into())],
///     ]
/// );
/// assert_eq!(
///     render_insert(&table, "users"),
///     "INSERT INTO users (id, name) VALUES ('1', 'Alice'), ('2', NULL);"
/// );
/// ```
pub fn render_insert(table: &Table, table_name: &str) -> String {
    let columns: Vec<&str> = table.column_names().collect();
    let tuples: Vec<String> = table.rows().map(|row| render_values_tuple(&row)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES {};",
        table_name,
        columns.join(", "),
        tuples.join(", ")
    )
}

/// Render one UPDATE per row, newline-joined.
///
/// The same `condition` closes every statement; it is not adapted per row.
///
/// # Example
///
/// ```
/// use sql_query_generator::{render::render_update, table::Table};
///
/// let table = Table::from_rows(
///     vec!["id".into(), "name".into()],
///     vec![
///         vec![Some("1".into()), Some("Alice".into())],
///         vec![Some("2".into()), Some("-".into())],
///     ]
/// );
/// assert_eq!(
///     render_update(&table, "users", "id = 1"),
///     "UPDATE users SET id = '1', name = 'Alice' WHERE id = 1;\n\
///      UPDATE users SET id = '2' WHERE id = 1;"
/// );
/// ```
pub fn render_update(table: &Table, table_name: &str, condition: &str) -> String {
    let statements: Vec<String> = table
        .rows()
        .map(|row| {
            format!(
                "UPDATE {} SET {} WHERE {};",
                table_name,
                render_set_clause(&row),
                condition
            )
        })
        .collect();
    statements.join("\n")
}
