use std::path::PathBuf;

use clap::Parser;

/// SQL Query Generator - Turn CSV/Excel tables into SQL statements interactively
#[derive(Parser, Debug)]
#[command(name = "sql-query-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory for generated .sql files [default: ./storage]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output file name instead of the input file's base name
    #[arg(long)]
    pub output_name: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the startup banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool
}
