// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use envatlas::cli::{Cli, Command};
use envatlas::env::{CaseRule, Scope};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["envatlas", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["envatlas", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// List Command
// =============================================================================

#[test]
fn cli_list_no_args() {
    let cli = Cli::try_parse_from(["envatlas", "list"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.catalog.is_none());
    assert!(!args.prefixes);
}

#[test]
fn cli_list_catalog_with_prefixes() {
    let cli = Cli::try_parse_from(["envatlas", "list", "aws", "--prefixes"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.catalog.as_deref(), Some("aws"));
    assert!(args.prefixes);
}

// =============================================================================
// Show Command
// =============================================================================

#[test]
fn cli_show_requires_catalog() {
    let result = Cli::try_parse_from(["envatlas", "show"]);
    assert!(result.is_err());
}

#[test]
fn cli_show_set_only_json() {
    let cli =
        Cli::try_parse_from(["envatlas", "show", "azure-pipelines", "-s", "--json"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.catalog, "azure-pipelines");
    assert!(args.set_only);
    assert!(args.json);
}

// =============================================================================
// Get Command
// =============================================================================

#[test]
fn cli_get_symbolic_name() {
    let cli = Cli::try_parse_from(["envatlas", "get", "GitHubRef"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.name, "GitHubRef");
    assert!(args.catalog.is_none());
    assert!(!args.raw);
}

#[test]
fn cli_get_raw_key() {
    let cli = Cli::try_parse_from(["envatlas", "get", "--raw", "PATH"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.name, "PATH");
    assert!(args.raw);
}

#[test]
fn cli_get_raw_and_catalog_conflict() {
    let result = Cli::try_parse_from(["envatlas", "get", "PATH", "--raw", "--catalog", "linux"]);
    assert!(result.is_err());
}

// =============================================================================
// Prefix Command
// =============================================================================

#[test]
fn cli_prefix_with_argument() {
    let cli = Cli::try_parse_from(["envatlas", "prefix", "GITHUB_"]).unwrap();
    let Some(Command::Prefix(args)) = cli.command else {
        panic!("expected prefix command");
    };
    assert_eq!(args.prefix.as_deref(), Some("GITHUB_"));
}

#[test]
fn cli_prefix_whole_environment() {
    let cli = Cli::try_parse_from(["envatlas", "prefix", "--json"]).unwrap();
    let Some(Command::Prefix(args)) = cli.command else {
        panic!("expected prefix command");
    };
    assert!(args.prefix.is_none());
    assert!(args.json);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_case_rule_and_scope() {
    let cli = Cli::try_parse_from([
        "envatlas",
        "--case-rule",
        "sensitive",
        "--scope",
        "user",
        "prefix",
        "AWS_",
    ])
    .unwrap();
    assert_eq!(cli.global.case_rule, Some(CaseRule::Sensitive));
    assert_eq!(cli.global.scope, Some(Scope::User));
}

#[test]
fn cli_global_host_rule_resolves_to_platform() {
    let cli = Cli::try_parse_from(["envatlas", "--case-rule", "host", "list"]).unwrap();
    assert_eq!(cli.global.case_rule, Some(CaseRule::from_host()));
}

#[test]
fn cli_global_config_and_log_file() {
    let cli = Cli::try_parse_from([
        "envatlas",
        "-c",
        "custom.toml",
        "--log-file",
        "/tmp/envatlas.log",
        "-l",
        "4",
        "list",
    ])
    .unwrap();
    assert_eq!(
        cli.global.config.as_deref(),
        Some(std::path::Path::new("custom.toml"))
    );
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/envatlas.log"))
    );
    assert_eq!(cli.global.log_level, Some(4));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn cli_invalid_log_level() {
    // Log level must be 0-5
    let result = Cli::try_parse_from(["envatlas", "-l", "9", "list"]);
    assert!(result.is_err());
}

#[test]
fn cli_invalid_scope() {
    let result = Cli::try_parse_from(["envatlas", "--scope", "galaxy", "list"]);
    assert!(result.is_err());
}

#[test]
fn cli_unknown_subcommand() {
    let result = Cli::try_parse_from(["envatlas", "frobnicate"]);
    assert!(result.is_err());
}
