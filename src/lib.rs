//! # SQL Query Generator Library
//!
//! Turns tabular files into SQL statement text and fills simple SQL
//! templates from typed fragments.
//!
//! The pipeline for file-backed operations is:
//!
//! 1. [`reader`] loads a `.csv`, `.xls` or `.xlsx` file into a [`table::Table`]
//! 2. [`render`] turns every row into an INSERT tuple or an UPDATE statement,
//!    using [`value`] to format each cell
//! 3. [`writer`] stores the result as `<output dir>/<input name>.sql`
//!
//! [`app`] drives the interactive session that ties these together, and
//! [`statement`] holds the templates for SELECT, DELETE and DDL.
//!
//! ```
//! use sql_query_generator::{reader::delimited::read_delimited_from, render::render_insert};
//!
//! let table = read_delimited_from("id,name\n1,Alice\n2,-\n".as_bytes(), "inline", &[]).unwrap();
//! assert_eq!(
//!     render_insert(&table, "users"),
//!     "INSERT INTO users (id, name) VALUES ('1', 'Alice'), ('2', NULL);"
//! );
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod reader;
pub mod render;
pub mod statement;
pub mod table;
pub mod value;
pub mod writer;
pub use masterror::{AppError, AppResult};
