//! Parameter collection for individual operations.

use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf
};

use crate::{
    config::SelectConfig,
    error::AppResult,
    prompt::Prompter,
    statement::{ColumnDef, ColumnDefs, SelectParams}
};

/// Ask for the SELECT fragments; blank limit and offset fall back to the
/// configured defaults.
pub fn collect_select_params<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    defaults: &SelectConfig
) -> AppResult<SelectParams> {
    let columns =
        prompter.ask_trimmed("Enter the columns to select (comma-separated, or * for all): ")?;
    let limit = prompter.ask_or(
        &format!("Enter the limit (default is {}): ", defaults.default_limit),
        &defaults.default_limit
    )?;
    let offset = prompter.ask_or(
        &format!("Enter the offset (default is {}): ", defaults.default_offset),
        &defaults.default_offset
    )?;
    let condition = prompter.ask_trimmed("Enter any conditions (or leave blank): ")?;

    Ok(SelectParams {
        columns,
        condition,
        limit,
        offset
    })
}

/// Ask for column definitions until the user types `done`.
///
/// Blank column names are refused; a repeated name replaces the earlier
/// definition.
pub fn collect_column_defs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>
) -> AppResult<ColumnDefs> {
    let mut columns = ColumnDefs::new();
    loop {
        let name = prompter.ask_trimmed("Enter column name (or type 'done' to finish): ")?;
        if name.eq_ignore_ascii_case("done") {
            break;
        }
        if name.is_empty() {
            prompter.say("Column name cannot be empty.")?;
            continue;
        }

        let data_type = prompter.ask(&format!("Enter data type for {}: ", name))?;
        let default = prompter.ask(&format!(
            "Enter default value for {} (or leave blank for none): ",
            name
        ))?;
        let key = prompter.ask(&format!(
            "Is {} a PRIMARY KEY, UNIQUE, or INDEX (leave blank if none): ",
            name
        ))?;

        columns.insert(
            name.into(),
            ColumnDef {
                data_type,
                key,
                default
            }
        );
    }
    Ok(columns)
}

/// Absolute form of a user-typed input path; unresolvable paths are kept
/// as typed so the reader can report them.
pub fn resolve_input_path(answer: &str) -> PathBuf {
    let typed = PathBuf::from(answer.trim());
    fs::canonicalize(&typed).unwrap_or(typed)
}
