// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> EnvReader --> Command Dispatch
//!   List | Show | Get | Prefix | Version
//! ```

use std::process::ExitCode;

use envatlas::cli::global::GlobalOptions;
use envatlas::cli::{self, Command};
use envatlas::cmd::get::run_get_command;
use envatlas::cmd::list::run_list_command;
use envatlas::cmd::prefix::run_prefix_command;
use envatlas::cmd::show::run_show_command;
use envatlas::config::AtlasConfig;
use envatlas::config::loader::ConfigLoader;
use envatlas::env::{EnvReader, Scope};
use envatlas::logging::init_logging;
use envatlas::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Exit code for `get` when the variable exists but holds no value.
const EXIT_UNSET: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::List(args)) => run_list_command(args),
        Some(Command::Show(args)) => load_config(&cli.global).and_then(|config| {
            let reader = build_reader(&cli.global, &config);
            let mut args = args.clone();
            args.json |= config.output.json;
            run_show_command(&args, &reader)
        }),
        Some(Command::Get(args)) => match load_config(&cli.global) {
            Ok(config) => {
                let reader = build_reader(&cli.global, &config);
                let scope = resolve_scope(&cli.global, &config);
                match run_get_command(args, &reader, scope) {
                    Ok(true) => Ok(()),
                    Ok(false) => return ExitCode::from(EXIT_UNSET),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        },
        Some(Command::Prefix(args)) => load_config(&cli.global).and_then(|config| {
            let reader = build_reader(&cli.global, &config);
            let scope = resolve_scope(&cli.global, &config);
            let mut args = args.clone();
            args.json |= config.output.json;
            run_prefix_command(&args, &reader, scope)
        }),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("envatlas.toml");
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix("ENVATLAS")
}

fn load_config(global: &GlobalOptions) -> envatlas::error::Result<AtlasConfig> {
    let loader = build_config_loader(global);
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}

/// CLI flag wins over configuration; the rule is fixed here once for
/// the whole invocation.
fn build_reader(global: &GlobalOptions, config: &AtlasConfig) -> EnvReader {
    let rule = global.case_rule.unwrap_or(config.lookup.rule);
    tracing::debug!(rule = %rule, "resolved comparison rule");
    EnvReader::new(rule)
}

fn resolve_scope(global: &GlobalOptions, config: &AtlasConfig) -> Scope {
    global.scope.unwrap_or(config.lookup.scope)
}
