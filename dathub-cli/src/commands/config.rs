use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use dathub_convert::VariantSelector;

use crate::error::CliError;
use crate::settings::{Settings, settings_path};

/// Show resolved conversion settings and where each value comes from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load_from(&path)?;

    log::info!(
        "{}",
        "Conversion Settings".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found)".if_supports_color(Stderr, |t| t.dimmed()),
        );
    }
    log::info!("");

    let (record, record_source) = settings.record(None);
    let (hash, hash_source) = settings.hash(None);
    let (pretty, pretty_source) = settings.pretty(false);
    let rows = [
        (VariantSelector::Record.flag(), record.to_string(), record_source),
        (VariantSelector::Hash.flag(), hash.to_string(), hash_source),
        ("pretty", pretty.to_string(), pretty_source),
    ];
    for (name, value, source) in rows {
        log::info!(
            "  {:<8} {} {}",
            name,
            value.if_supports_color(Stderr, |t| t.bold()),
            format!("({source})").if_supports_color(Stderr, |t| t.dimmed()),
        );
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
