//! Cell value to SQL literal conversion.
//!
//! Every cell is rendered the same way regardless of what it looks like:
//! sentinel values become the bare `NULL` keyword, everything else is the
//! raw text wrapped in single quotes. Embedded quotes are not escaped and
//! numbers are quoted like text.

/// Rendered form of a null cell
pub const NULL_LITERAL: &str = "NULL";

/// Textual forms (after trim and lowercase) that mean "no data"
pub const SENTINELS: [&str; 3] = ["", "null", "-"];

/// Check whether a cell carries no data.
///
/// A cell is a sentinel when it is missing, or when its trimmed,
/// lowercased text is empty, `null` or `-`.
///
/// # Example
///
/// ```
/// use sql_query_generator::value::is_sentinel;
///
/// assert!(is_sentinel(None));
/// assert!(is_sentinel(Some("  NuLL ")));
/// assert!(is_sentinel(Some("-")));
/// assert!(!is_sentinel(Some("--")));
/// ```
pub fn is_sentinel(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(text) => {
            let normalized = text.trim().to_lowercase();
            SENTINELS.contains(&normalized.as_str())
        }
    }
}

/// Render a cell as a SQL literal.
///
/// # Example
///
/// ```
/// use sql_query_generator::value::format_value;
///
/// assert_eq!(format_value(Some("Alice")), "'Alice'");
/// assert_eq!(format_value(Some(" 42 ")), "' 42 '");
/// assert_eq!(format_value(Some("")), "NULL");
/// assert_eq!(format_value(None), "NULL");
/// ```
pub fn format_value(value: Option<&str>) -> String {
    match value {
        Some(text) if !is_sentinel(value) => quote(text),
        _ => NULL_LITERAL.to_string()
    }
}

/// Wrap text in single quotes without escaping
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    out.push_str(text);
    out.push('\'');
    out
}
