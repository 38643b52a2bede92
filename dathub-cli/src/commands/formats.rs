use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use dathub_convert::Format;

pub(crate) fn run_formats() {
    log::info!("Supported formats:");
    log::info!("");

    for format in Format::all() {
        log::info!(
            "  {} [{}]",
            format.short_name().if_supports_color(Stderr, |t| t.bold()),
            format.display_name().if_supports_color(Stderr, |t| t.cyan()),
        );
        log::info!("    Aliases: {}", format.aliases().join(", "));
        if let Some(selector) = format.variant_selector() {
            log::info!(
                "    Output selector: --{} ({})",
                selector.flag().if_supports_color(Stderr, |t| t.green()),
                selector.values().join(", "),
            );
        }
    }
}
