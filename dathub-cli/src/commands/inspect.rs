use std::collections::BTreeMap;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use dathub_convert::format::hub_from_json;
use dathub_convert::keys::machine;
use dathub_convert::{Entity, Format, MetadataFile, Value};

use crate::commands::{read_input, resolve_format};
use crate::error::CliError;

/// Counts describing a hub document.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct HubSummary {
    pub header_keys: Vec<String>,
    pub machines: usize,
    pub unnamed_machines: usize,
    /// Nested entities directly under machines, by kind name.
    pub children: BTreeMap<String, usize>,
}

pub(crate) fn summarize(hub: &MetadataFile) -> HubSummary {
    let mut summary = HubSummary {
        header_keys: hub
            .header()
            .map(|h| h.keys().map(str::to_string).collect())
            .unwrap_or_default(),
        ..Default::default()
    };

    for game in hub.machines() {
        summary.machines += 1;
        if game.read_str(machine::NAME).is_none() {
            summary.unnamed_machines += 1;
        }
        for (_, value) in game.iter() {
            for child in child_entities(value) {
                *summary.children.entry(child.kind().to_string()).or_default() += 1;
            }
        }
    }
    summary
}

fn child_entities(value: &Value) -> &[Entity] {
    match value {
        Value::Node(entity) => std::slice::from_ref(entity),
        Value::NodeList(entities) => entities,
        Value::Scalar(_) | Value::List(_) => &[],
    }
}

pub(crate) fn run_inspect(from: Option<Format>, json: bool, input: PathBuf) -> Result<(), CliError> {
    let from = resolve_format(from, &input)?;
    let hub = hub_from_json(from, &read_input(&input)?)?;

    if json {
        let tree = serde_json::to_string_pretty(&hub)
            .map_err(|e| CliError::other(format!("cannot serialize hub: {e}")))?;
        println!("{tree}");
        return Ok(());
    }

    let summary = summarize(&hub);
    log::info!(
        "{} ({})",
        from.display_name().if_supports_color(Stderr, |t| t.bold()),
        input.display().if_supports_color(Stderr, |t| t.cyan()),
    );
    log::info!("");
    if summary.header_keys.is_empty() {
        log::info!("  Header: {}", "none".if_supports_color(Stderr, |t| t.dimmed()));
    } else {
        log::info!("  Header: {}", summary.header_keys.join(", "));
    }
    log::info!("  Machines: {}", summary.machines);
    if summary.unnamed_machines > 0 {
        log::warn!("  {} machines have no name", summary.unnamed_machines);
    }
    for (kind, count) in &summary.children {
        log::info!("    {kind}: {count}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/inspect_tests.rs"]
mod tests;
