//! RomCenter DAT adapter.
//!
//! Every `[GAMES]` line becomes its own machine with a single ROM. The
//! `[DAT]` split/merge indicators are normalized to `yes`/`no`.

use dathub_core::keys::{header, machine, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::romcenter::{Credits, Dat, Emulator, Games, MetadataFile as RomCenterFile, Rom};

use crate::HubConvert;
use crate::util::{non_default, non_empty, yes_no};

impl HubConvert for RomCenterFile {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let machines = self
            .games
            .iter()
            .flat_map(|games| games.rom.iter())
            .map(row_to_hub)
            .collect();
        MetadataFile::new(header_to_hub(self), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        let hub_header = hub.header();
        let rom = hub
            .machines()
            .into_iter()
            .flat_map(rows_from_hub)
            .collect();

        RomCenterFile {
            credits: hub_header.and_then(credits_from_hub),
            dat: hub_header.and_then(dat_from_hub),
            emulator: hub_header.and_then(emulator_from_hub),
            games: non_default(Games { rom }),
        }
    }
}

fn header_to_hub(file: &RomCenterFile) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Header);

    if let Some(credits) = &file.credits {
        entity.set_opt(header::AUTHOR, credits.author.clone());
        entity.set_opt(header::VERSION, credits.version.clone());
        entity.set_opt(header::EMAIL, credits.email.clone());
        entity.set_opt(header::HOMEPAGE, credits.homepage.clone());
        entity.set_opt(header::URL, credits.url.clone());
        entity.set_opt(header::DATE, credits.date.clone());
        entity.set_opt(header::COMMENT, credits.comment.clone());
    }

    if let Some(dat) = &file.dat {
        entity.set_opt(header::DAT_VERSION, dat.version.clone());
        entity.set_opt(header::PLUGIN, dat.plugin.clone());
        entity.set_opt(header::SPLIT, dat.split.as_deref().map(yes_no));
        entity.set_opt(header::MERGE, dat.merge.as_deref().map(yes_no));
    }

    if let Some(emulator) = &file.emulator {
        entity.set_opt(header::REF_NAME, emulator.ref_name.clone());
        entity.set_opt(header::EMULATOR_VERSION, emulator.version.clone());
    }

    non_empty(entity)
}

/// One row, one machine. `parent_description` has no hub key and is dropped.
fn row_to_hub(row: &Rom) -> Entity {
    let mut item = Entity::new(EntityKind::Rom);
    item.set_opt(rom::NAME, row.rom_name.clone());
    item.set_opt(rom::CRC, row.rom_crc.clone());
    item.set_opt(rom::SIZE, row.rom_size.clone());
    item.set_opt(rom::MERGE, row.merge_name.clone());

    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, row.game_name.clone());
    entity.set_opt(machine::DESCRIPTION, row.game_description.clone());
    entity.set_opt(machine::CLONE_OF, row.parent_name.clone());
    entity.set_opt(machine::ROM_OF, row.rom_of.clone());
    entity.set_entities(machine::ROM, vec![item]);
    entity
}

fn credits_from_hub(entity: &Entity) -> Option<Credits> {
    non_default(Credits {
        author: entity.read_string(header::AUTHOR),
        version: entity.read_string(header::VERSION),
        email: entity.read_string(header::EMAIL),
        homepage: entity.read_string(header::HOMEPAGE),
        url: entity.read_string(header::URL),
        date: entity.read_string(header::DATE),
        comment: entity.read_string(header::COMMENT),
    })
}

fn dat_from_hub(entity: &Entity) -> Option<Dat> {
    non_default(Dat {
        version: entity.read_string(header::DAT_VERSION),
        plugin: entity.read_string(header::PLUGIN),
        split: entity
            .read_str(header::SPLIT)
            .map(|v| yes_no(v).to_string()),
        merge: entity
            .read_str(header::MERGE)
            .map(|v| yes_no(v).to_string()),
    })
}

fn emulator_from_hub(entity: &Entity) -> Option<Emulator> {
    non_default(Emulator {
        ref_name: entity.read_string(header::REF_NAME),
        version: entity.read_string(header::EMULATOR_VERSION),
    })
}

/// Fan a machine out into one row per ROM, repeating the game columns.
fn rows_from_hub(entity: &Entity) -> Vec<Rom> {
    entity
        .read_all(machine::ROM, EntityKind::Rom)
        .into_iter()
        .map(|item| Rom {
            parent_name: entity.read_string(machine::CLONE_OF),
            parent_description: None,
            game_name: entity.read_string(machine::NAME),
            game_description: entity.read_string(machine::DESCRIPTION),
            rom_name: item.read_string(rom::NAME),
            rom_crc: item.read_string(rom::CRC),
            rom_size: item.read_string(rom::SIZE),
            rom_of: entity.read_string(machine::ROM_OF),
            merge_name: item.read_string(rom::MERGE),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/romcenter_tests.rs"]
mod tests;
