//! dathub CLI
//!
//! Command-line interface for converting DAT metadata between formats.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::convert::ConvertArgs;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli.command) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Formats => commands::formats::run_formats(),
        Commands::Convert {
            from,
            to,
            record,
            hash,
            compact,
            output,
            input,
        } => commands::convert::run_convert(ConvertArgs {
            from,
            to,
            record,
            hash,
            compact,
            output,
            input,
        })?,
        Commands::Inspect { from, json, input } => {
            commands::inspect::run_inspect(from, json, input)?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show()?,
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
    Ok(())
}

/// Install the logger. Messages go to stderr so stdout carries only
/// converted documents. The default level is `info` and plain messages carry
/// no prefix.
///
/// `--quiet` keeps warnings and errors; `--verbose` enables debug messages
/// with timestamps. `RUST_LOG` overrides both.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }
    builder.parse_default_env();
    builder.init();
}
