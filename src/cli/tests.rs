// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::env::{CaseRule, Scope};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envatlas", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envatlas",
        "-l",
        "5",
        "--case-rule",
        "insensitive",
        "--scope",
        "machine",
        "list",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.case_rule, Some(CaseRule::Insensitive));
    assert_eq!(cli.global.scope, Some(Scope::Machine));
    assert!(matches!(cli.command, Some(Command::List(_))));
}

#[test]
fn test_parse_host_case_rule() {
    let cli = Cli::try_parse_from(["envatlas", "--case-rule", "host", "list"]).unwrap();
    assert_eq!(cli.global.case_rule, Some(CaseRule::from_host()));
}

#[test]
fn test_parse_list_catalog() {
    let cli = Cli::try_parse_from(["envatlas", "list", "github-actions", "-p"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.catalog.as_deref(), Some("github-actions"));
    assert!(args.prefixes);
}

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["envatlas", "show", "aws", "--set-only", "--json"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.catalog, "aws");
    assert!(args.set_only);
    assert!(args.json);
}

#[test]
fn test_parse_get() {
    let cli = Cli::try_parse_from(["envatlas", "get", "AWSRegion", "--catalog", "aws"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.name, "AWSRegion");
    assert_eq!(args.catalog.as_deref(), Some("aws"));
    assert!(!args.raw);
}

#[test]
fn test_parse_get_raw_conflicts_with_catalog() {
    let result =
        Cli::try_parse_from(["envatlas", "get", "PATH", "--raw", "--catalog", "linux"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_prefix() {
    let cli = Cli::try_parse_from(["envatlas", "prefix", "AWS_", "--json"]).unwrap();
    let Some(Command::Prefix(args)) = cli.command else {
        panic!("expected prefix command");
    };
    assert_eq!(args.prefix.as_deref(), Some("AWS_"));
    assert!(args.json);
}

#[test]
fn test_parse_prefix_without_argument() {
    let cli = Cli::try_parse_from(["envatlas", "prefix"]).unwrap();
    let Some(Command::Prefix(args)) = cli.command else {
        panic!("expected prefix command");
    };
    assert!(args.prefix.is_none());
}

#[test]
fn test_log_level_out_of_range() {
    let result = Cli::try_parse_from(["envatlas", "-l", "6", "list"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_case_rule_rejected() {
    let result = Cli::try_parse_from(["envatlas", "--case-rule", "fuzzy", "list"]);
    assert!(result.is_err());
}
