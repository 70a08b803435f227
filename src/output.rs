//! Console presentation of banners, menus and results.

use std::path::Path;

use colored::Colorize;

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub colored: bool,
    pub quiet:   bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            colored: true,
            quiet:   false
        }
    }
}

const RULE: &str = "=========================================================";

/// Startup notice describing what the tool does
pub fn format_banner(opts: &OutputOptions) -> String {
    let lines = [
        "WARNING: This script will assist you in performing SQL operations like SELECT, INSERT, UPDATE, DELETE, etc.",
        "For INSERT and UPDATE, a CSV/Excel file will be used. it will convert CSV/Excel data into SQL statements",
        "Any empty values, or '-' in the CSV/Excel sheet will be converted to NULL in the SQL queries.",
        "Make sure you have the correct details before proceeding."
    ];
    let mut banner = String::new();
    for (i, line) in lines.iter().enumerate() {
        if opts.colored && i == 0 {
            banner.push_str(&line.yellow().bold().to_string());
        } else {
            banner.push_str(line);
        }
        banner.push('\n');
    }
    banner.push_str(RULE);
    banner
}

/// Numbered menu: title followed by `1. option` lines
pub fn format_menu<T: std::fmt::Display>(title: &str, options: &[T], opts: &OutputOptions) -> String {
    let mut menu = if opts.colored {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    for (i, option) in options.iter().enumerate() {
        menu.push_str(&format!("\n{}. {}", i + 1, option));
    }
    menu
}

/// Statement printed by the free-form operations
pub fn format_generated(sql: &str, opts: &OutputOptions) -> String {
    if opts.colored {
        format!("{}\n{}", "Generated SQL Query:".bold(), sql.cyan())
    } else {
        format!("Generated SQL Query:\n{}", sql)
    }
}

/// Report printed after an output file is written
pub fn format_written(path: &Path, opts: &OutputOptions) -> String {
    let location = path.display().to_string();
    if opts.colored {
        format!("SQL queries have been written to {}", location.green().bold())
    } else {
        format!("SQL queries have been written to {}", location)
    }
}
