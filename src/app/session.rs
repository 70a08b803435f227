//! Session execution.

use std::{
    io::{BufRead, Write},
    path::Path,
    time::Duration
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{
    collect::{collect_column_defs, collect_select_params, resolve_input_path},
    types::{SessionParams, SessionResult}
};
use crate::{
    config::{Config, InputConfig},
    error::AppResult,
    output::{format_banner, format_generated, format_written},
    prompt::Prompter,
    reader::read_table,
    render::{render_insert, render_update},
    statement::{
        Operation, build_alter_table, build_create_table, build_create_view, build_delete,
        build_drop_table, build_drop_view, build_select
    },
    table::Table,
    writer::{output_file_name, write_statement}
};

/// Run one interactive session from banner to report.
///
/// # Errors
///
/// Returns an error if the input stream closes mid-session, the input file
/// is unsupported or unreadable, or the output file cannot be written.
/// Invalid menu answers and blank names are re-prompted, not errors.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    params: &SessionParams,
    config: &Config
) -> AppResult<SessionResult> {
    if !prompter.options().quiet {
        let banner = format_banner(prompter.options());
        prompter.say(&banner)?;
    }

    let operation = *prompter.select("Choose an SQL operation to perform:", &Operation::ALL)?;
    debug!(operation = %operation, "operation selected");

    let table_name = prompter.ask_required("Enter the table name: ", "Table name")?;
    execute_operation(prompter, operation, &table_name, params, config)
}

/// Collect the parameters of `operation`, build its statement and report it.
pub fn execute_operation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    operation: Operation,
    table_name: &str,
    params: &SessionParams,
    config: &Config
) -> AppResult<SessionResult> {
    let sql = match operation {
        Operation::Insert | Operation::Update => {
            return execute_file_operation(prompter, operation, table_name, params, config);
        }
        Operation::Select => {
            let select = collect_select_params(prompter, &config.select)?;
            build_select(table_name, &select)
        }
        Operation::Delete => {
            let condition = prompter.ask("Enter the condition for DELETE (e.g., id=10): ")?;
            build_delete(table_name, &condition)
        }
        Operation::CreateTable => {
            let columns = collect_column_defs(prompter)?;
            build_create_table(table_name, &columns)
        }
        Operation::DropTable => build_drop_table(table_name),
        Operation::AlterTable => {
            let clause =
                prompter.ask("Enter the ALTER TABLE statement (e.g., ADD COLUMN age INT): ")?;
            build_alter_table(table_name, &clause)
        }
        Operation::CreateView => {
            let view = prompter.ask_required("Enter the view name: ", "View name")?;
            let select = prompter
                .ask("Enter the SELECT statement (e.g., SELECT id, name FROM users): ")?;
            build_create_view(&view, &select)
        }
        Operation::DropView => {
            let view = prompter.ask_required("Enter the view name: ", "View name")?;
            build_drop_view(&view)
        }
    };

    let report = format_generated(&sql, prompter.options());
    prompter.say(&report)?;

    Ok(SessionResult {
        operation,
        sql,
        written: None
    })
}

fn execute_file_operation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    operation: Operation,
    table_name: &str,
    params: &SessionParams,
    config: &Config
) -> AppResult<SessionResult> {
    let answer = prompter.ask("Enter full path of the CSV/Excel file: ")?;
    let input_path = resolve_input_path(&answer);
    let table = load_table(&input_path, &config.input)?;

    let sql = if operation == Operation::Update {
        let condition =
            prompter.ask("Enter the condition for updating rows (e.g., id = 1): ")?;
        render_update(&table, table_name, &condition)
    } else {
        render_insert(&table, table_name)
    };

    let file_name = output_file_name(&input_path, params.output_name.as_deref());
    let written = write_statement(&params.output_dir, &file_name, &sql)?;
    info!(operation = %operation, rows = table.row_count(), "statements generated");

    let report = format_written(&written, prompter.options());
    prompter.say(&report)?;

    Ok(SessionResult {
        operation,
        sql,
        written: Some(written)
    })
}

/// Read the input table behind a transient spinner
pub fn load_table(path: &Path, input: &InputConfig) -> AppResult<Table> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Reading {}...", path.display()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let table = read_table(path, input);
    pb.finish_and_clear();
    table
}
