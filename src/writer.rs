//! Output file naming and writing.

use std::{
    fs,
    path::{Path, PathBuf}
};

use tracing::info;

use crate::error::{AppResult, file_write_error};

/// Extension of generated files
pub const SQL_EXTENSION: &str = "sql";

/// Derive the output file name from the input path: `data/users.csv` ->
/// `users.sql`.
///
/// An explicit `name` wins; `.sql` is appended to it when absent.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use sql_query_generator::writer::output_file_name;
///
/// assert_eq!(output_file_name(Path::new("/tmp/Users.xlsx"), None), "Users.sql");
/// assert_eq!(output_file_name(Path::new("a.csv"), Some("seed")), "seed.sql");
/// ```
pub fn output_file_name(input: &Path, name: Option<&str>) -> String {
    if let Some(name) = name {
        return if Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SQL_EXTENSION))
        {
            name.to_string()
        } else {
            format!("{}.{}", name, SQL_EXTENSION)
        };
    }

    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", stem, SQL_EXTENSION)
}

/// Write `sql` followed by a blank line to `directory/file_name`.
///
/// The directory is created when missing; an existing file is overwritten.
/// Returns the path written.
pub fn write_statement(directory: &Path, file_name: &str, sql: &str) -> AppResult<PathBuf> {
    fs::create_dir_all(directory)
        .map_err(|e| file_write_error(&directory.display().to_string(), e))?;

    let path = directory.join(file_name);
    let mut content = String::with_capacity(sql.len() + 2);
    content.push_str(sql);
    content.push_str("\n\n");
    fs::write(&path, content).map_err(|e| file_write_error(&path.display().to_string(), e))?;

    info!(path = %path.display(), bytes = sql.len() + 2, "statement written");
    Ok(path)
}
