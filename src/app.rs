//! Interactive session driver.
//!
//! A session walks through a fixed sequence of steps:
//!
//! 1. **choose operation** - numbered menu, re-prompted until valid
//! 2. **table name** - re-prompted until non-blank
//! 3. **operation parameters** - file path, condition, columns, ...
//! 4. **execute** - read the input table and render, or fill a template
//! 5. **report** - print the statement, or write it and print the path
//!
//! INSERT and UPDATE are the only operations that touch the file system;
//! every other operation only prints to the console.

mod collect;
mod session;
mod types;

pub use collect::{collect_column_defs, collect_select_params, resolve_input_path};
pub use session::{execute_operation, load_table, run_session};
pub use types::{SessionParams, SessionResult};
