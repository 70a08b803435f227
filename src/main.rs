//! # SQL Query Generator
//!
//! Interactive command-line tool that converts CSV/Excel data into SQL
//! statements and builds simple SELECT, DELETE and DDL queries.
//!
//! # Quick Start
//!
//! ```bash
//! # Start a session; generated files land in ./storage
//! sql-query-generator
//!
//! # Write into another directory without the banner
//! sql-query-generator --output-dir seeds --quiet
//! ```
//!
//! # Operations
//!
//! | # | Operation | Input | Output |
//! |---|-----------|-------|--------|
//! | 1 | select | columns, limit, offset, condition | console |
//! | 2 | insert | CSV/Excel file | `<dir>/<file>.sql` |
//! | 3 | update | CSV/Excel file, condition | `<dir>/<file>.sql` |
//! | 4 | delete | condition | console |
//! | 5 | create_table | column definitions | console |
//! | 6 | drop_table | - | console |
//! | 7 | alter_table | alter clause | console |
//! | 8 | create_view | view name, SELECT | console |
//! | 9 | drop_view | view name | console |
//!
//! Empty cells, `null` and `-` become `NULL` in INSERT statements and are
//! left out of UPDATE statements.
//!
//! # Exit Codes
//!
//! - `0` - Statement generated
//! - `1` - Any error (unsupported file, unreadable input, write failure)

use std::{
    io::{self, IsTerminal},
    process
};

use clap::Parser;
use sql_query_generator::{
    AppResult,
    app::{SessionParams, run_session},
    cli::Cli,
    config::Config,
    output::OutputOptions,
    prompt::Prompter
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> AppResult<()> {
    let config = Config::load()?;
    debug!(?config, "configuration loaded");

    let colored = !cli.no_color && io::stdout().is_terminal();
    let params = SessionParams {
        output_dir:  cli
            .output_dir
            .unwrap_or_else(|| config.output.directory.clone()),
        output_name: cli.output_name
    };
    let opts = OutputOptions {
        colored,
        quiet: cli.quiet
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock(), opts);
    run_session(&mut prompter, &params, &config)?;
    Ok(())
}
