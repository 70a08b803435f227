// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_query_generator::error::{
    config_error, file_read_error, file_write_error, input_error, output_error,
    table_read_error, unsupported_format_error
};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/users.csv", io_error);
    assert!(!error.to_string().is_empty());
}

#[test]
fn test_file_write_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = file_write_error("./storage", io_error);
    assert!(!error.to_string().is_empty());
}

#[test]
fn test_table_read_error_with_line() {
    let error = table_read_error("users.csv", "record 2 (line: 3, byte: 18): expected 2 fields");
    let _msg = error.to_string();
}

#[test]
fn test_error_types_are_different() {
    let format_err = unsupported_format_error("notes.txt");
    let table_err = table_read_error("x.xlsx", "corrupt");
    let config_err = config_error("Invalid config file");
    let input_err = input_error("Input closed");
    let output_err = output_error("Failed to write to console: broken pipe");
    assert!(!format_err.to_string().is_empty());
    assert!(!table_err.to_string().is_empty());
    assert!(!config_err.to_string().is_empty());
    assert!(!input_err.to_string().is_empty());
    assert!(!output_err.to_string().is_empty());
}
