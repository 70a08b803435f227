//! Session parameters and results.

use std::path::PathBuf;

use crate::statement::Operation;

/// Settings a session runs with, resolved from flags and configuration.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
///
/// use sql_query_generator::app::SessionParams;
///
/// let params = SessionParams {
///     output_dir:  PathBuf::from("./storage"),
///     output_name: None
/// };
/// assert!(params.output_name.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SessionParams {
    /// Directory receiving generated `.sql` files.
    pub output_dir:  PathBuf,
    /// File name replacing the one derived from the input file.
    pub output_name: Option<String>
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            output_dir:  PathBuf::from("./storage"),
            output_name: None
        }
    }
}

/// What a finished session produced
#[derive(Debug, Clone)]
pub struct SessionResult {
    /// Operation picked from the menu.
    pub operation: Operation,
    /// Generated statement text.
    pub sql:       String,
    /// Output file, for operations that write one.
    pub written:   Option<PathBuf>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_use_storage_dir() {
        let params = SessionParams::default();
        assert_eq!(params.output_dir, PathBuf::from("./storage"));
    }

    #[test]
    fn test_session_result_debug() {
        let result = SessionResult {
            operation: Operation::DropTable,
            sql:       "DROP TABLE IF EXISTS t;".to_string(),
            written:   None
        };
        assert!(format!("{:?}", result).contains("DropTable"));
    }
}
