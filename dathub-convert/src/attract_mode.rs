//! AttractMode romlist adapter.
//!
//! A romlist describes games, not files. Each row becomes one machine
//! holding a single placeholder ROM named `-`, which carries the per-file
//! columns (`alt_romname`, `alt_title`, `file_is_available`).

use dathub_core::keys::{header, machine, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::attract_mode::{MetadataFile as AttractModeFile, Row};

use crate::HubConvert;
use crate::util::non_empty;

const PLACEHOLDER_ROM_NAME: &str = "-";

impl HubConvert for AttractModeFile {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut hub_header = Entity::new(EntityKind::Header);
        hub_header.set_strings(header::HEADER_ROW, self.header.clone());

        let machines = self.rows.iter().map(row_to_hub).collect();
        MetadataFile::new(non_empty(hub_header), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        AttractModeFile {
            header: hub
                .header()
                .and_then(|h| h.read_string_array(header::HEADER_ROW))
                .unwrap_or_default(),
            rows: hub.machines().into_iter().flat_map(rows_from_hub).collect(),
        }
    }
}

fn row_to_hub(row: &Row) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, row.name.clone());
    entity.set_opt(machine::DESCRIPTION, row.title.clone());
    entity.set_opt(machine::EMULATOR, row.emulator.clone());
    entity.set_opt(machine::CLONE_OF, row.clone_of.clone());
    entity.set_opt(machine::YEAR, row.year.clone());
    entity.set_opt(machine::MANUFACTURER, row.manufacturer.clone());
    entity.set_opt(machine::CATEGORY, row.category.clone());
    entity.set_opt(machine::PLAYERS, row.players.clone());
    entity.set_opt(machine::ROTATION, row.rotation.clone());
    entity.set_opt(machine::CONTROL, row.control.clone());
    entity.set_opt(machine::STATUS, row.status.clone());
    entity.set_opt(machine::DISPLAY_COUNT, row.display_count.clone());
    entity.set_opt(machine::DISPLAY_TYPE, row.display_type.clone());
    entity.set_opt(machine::EXTRA, row.extra.clone());
    entity.set_opt(machine::BUTTONS, row.buttons.clone());
    entity.set_opt(machine::FAVORITE, row.favorite.clone());
    entity.set_opt(machine::TAGS, row.tags.clone());
    entity.set_opt(machine::PLAYED_COUNT, row.played_count.clone());
    entity.set_opt(machine::PLAYED_TIME, row.played_time.clone());

    let mut item = Entity::new(EntityKind::Rom);
    item.set(rom::NAME, PLACEHOLDER_ROM_NAME);
    item.set_opt(rom::ALT_ROM_NAME, row.alt_romname.clone());
    item.set_opt(rom::ALT_TITLE, row.alt_title.clone());
    item.set_opt(rom::FILE_IS_AVAILABLE, row.file_is_available.clone());
    entity.set_entities(machine::ROM, vec![item]);

    entity
}

/// One row per ROM, repeating the game columns on each.
fn rows_from_hub(entity: &Entity) -> Vec<Row> {
    // Formats that store categories as a list are joined into one column.
    let category = entity
        .read_string_array(machine::CATEGORY)
        .map(|categories| categories.join(", "));

    entity
        .read_all(machine::ROM, EntityKind::Rom)
        .into_iter()
        .map(|item| Row {
            name: entity.read_string(machine::NAME),
            title: entity.read_string(machine::DESCRIPTION),
            emulator: entity.read_string(machine::EMULATOR),
            clone_of: entity.read_string(machine::CLONE_OF),
            year: entity.read_string(machine::YEAR),
            manufacturer: entity.read_string(machine::MANUFACTURER),
            category: category.clone(),
            players: entity.read_string(machine::PLAYERS),
            rotation: entity.read_string(machine::ROTATION),
            control: entity.read_string(machine::CONTROL),
            status: entity.read_string(machine::STATUS),
            display_count: entity.read_string(machine::DISPLAY_COUNT),
            display_type: entity.read_string(machine::DISPLAY_TYPE),
            alt_romname: item.read_string(rom::ALT_ROM_NAME),
            alt_title: item.read_string(rom::ALT_TITLE),
            extra: entity.read_string(machine::EXTRA),
            buttons: entity.read_string(machine::BUTTONS),
            favorite: entity.read_string(machine::FAVORITE),
            tags: entity.read_string(machine::TAGS),
            played_count: entity.read_string(machine::PLAYED_COUNT),
            played_time: entity.read_string(machine::PLAYED_TIME),
            file_is_available: item.read_string(rom::FILE_IS_AVAILABLE),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/attract_mode_tests.rs"]
mod tests;
