pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create file write error (output directory or file)
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write '{}': {}", path, source))
}

/// Create unsupported input format error
pub fn unsupported_format_error(path: &str) -> AppError {
    AppError::bad_request(format!(
        "Unsupported file format for '{}'. Please provide a CSV or Excel file.",
        path
    ))
}

/// Create malformed table error with optional row info
pub fn table_read_error(path: &str, message: impl Into<String>) -> AppError {
    let msg = message.into();
    AppError::bad_request(format_table_error(path, &msg))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create console input error
pub fn input_error(message: impl Into<String>) -> AppError {
    AppError::internal(message.into())
}

/// Create console output error
pub fn output_error(message: impl Into<String>) -> AppError {
    AppError::internal(message.into())
}

/// Format table error with record highlighting
fn format_table_error(path: &str, message: &str) -> String {
    // csv errors look like: "... record 3 (line: 4, byte: 20): ..."
    if let Some(line) = extract_line(message) {
        format!(
            "Failed to parse table '{}' at line {}:\n  {}",
            path, line, message
        )
    } else {
        format!("Failed to parse table '{}':\n  {}", path, message)
    }
}

fn extract_line(message: &str) -> Option<u64> {
    let marker = "line: ";
    let start = message.find(marker)? + marker.len();
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
