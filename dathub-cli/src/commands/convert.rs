use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use dathub_convert::format::{hub_from_json, hub_to_json};
use dathub_convert::{Format, HashType, RecordKind};

use crate::commands::{read_input, resolve_format};
use crate::error::CliError;
use crate::settings::Settings;

pub(crate) struct ConvertArgs {
    pub from: Option<Format>,
    pub to: Format,
    pub record: Option<RecordKind>,
    pub hash: Option<HashType>,
    pub compact: bool,
    pub output: Option<PathBuf>,
    pub input: PathBuf,
}

/// Read the input through its format's adapter into the hub and write it
/// back out with the target format's adapter.
pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), CliError> {
    convert_with(&Settings::load()?, args)
}

pub(crate) fn convert_with(settings: &Settings, args: ConvertArgs) -> Result<(), CliError> {
    let from = resolve_format(args.from, &args.input)?;
    let options = settings.convert_options(args.record, args.hash);
    let (pretty, _) = settings.pretty(args.compact);

    let contents = read_input(&args.input)?;
    let hub = hub_from_json(from, &contents)?;
    let json = hub_to_json(args.to, &hub, &options, pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            log::info!(
                "{} {} {} {} ({} machines) -> {}",
                "Converted".if_supports_color(Stderr, |t| t.green()),
                from.short_name().if_supports_color(Stderr, |t| t.bold()),
                "to".if_supports_color(Stderr, |t| t.dimmed()),
                args.to.short_name().if_supports_color(Stderr, |t| t.bold()),
                hub.machines().len(),
                path.display().if_supports_color(Stderr, |t| t.cyan()),
            );
        }
        None => println!("{json}"),
    }

    if let Some(selector) = args.to.variant_selector() {
        log::debug!(
            "Wrote {} with {selector} = {}",
            args.to.short_name(),
            options.selected(selector)
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/convert_tests.rs"]
mod tests;
