// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use sql_query_generator::cli::Cli;

#[test]
fn test_no_flags() {
    let cli = Cli::try_parse_from(["sql-query-generator"]).unwrap();
    assert!(cli.output_dir.is_none());
    assert!(cli.output_name.is_none());
    assert!(!cli.no_color);
    assert!(!cli.quiet);
    assert!(!cli.verbose);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "sql-query-generator",
        "-o",
        "out",
        "--output-name",
        "seed",
        "--no-color",
        "-q",
        "-v"
    ])
    .unwrap();
    assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    assert_eq!(cli.output_name.as_deref(), Some("seed"));
    assert!(cli.no_color && cli.quiet && cli.verbose);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["sql-query-generator", "--provider", "x"]).is_err());
}
