//! DOSCenter DAT adapter.

use dathub_core::keys::{header, machine, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::doscenter::{DosCenter, File, Game, MetadataFile as DosCenterFile};

use crate::HubConvert;
use crate::util::{non_default, non_empty};

impl HubConvert for DosCenterFile {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let hub_header = self.doscenter.as_ref().and_then(header_to_hub);
        let machines = self.games.iter().map(game_to_hub).collect();
        MetadataFile::new(hub_header, machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        DosCenterFile {
            doscenter: hub.header().and_then(header_from_hub),
            games: hub.machines().into_iter().map(game_from_hub).collect(),
        }
    }
}

fn header_to_hub(doscenter: &DosCenter) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Header);
    entity.set_opt(header::NAME, doscenter.name.clone());
    entity.set_opt(header::DESCRIPTION, doscenter.description.clone());
    entity.set_opt(header::VERSION, doscenter.version.clone());
    entity.set_opt(header::DATE, doscenter.date.clone());
    entity.set_opt(header::AUTHOR, doscenter.author.clone());
    entity.set_opt(header::HOMEPAGE, doscenter.homepage.clone());
    entity.set_opt(header::COMMENT, doscenter.comment.clone());
    non_empty(entity)
}

fn game_to_hub(game: &Game) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, game.name.clone());
    entity.set_entities(machine::ROM, game.file.iter().map(file_to_hub).collect());
    entity
}

fn file_to_hub(file: &File) -> Entity {
    let mut entity = Entity::new(EntityKind::Rom);
    entity.set_opt(rom::NAME, file.name.clone());
    entity.set_opt(rom::SIZE, file.size.clone());
    entity.set_opt(rom::CRC, file.crc.clone());
    entity.set_opt(rom::DATE, file.date.clone());
    entity
}

fn header_from_hub(entity: &Entity) -> Option<DosCenter> {
    non_default(DosCenter {
        name: entity.read_string(header::NAME),
        description: entity.read_string(header::DESCRIPTION),
        version: entity.read_string(header::VERSION),
        date: entity.read_string(header::DATE),
        author: entity.read_string(header::AUTHOR),
        homepage: entity.read_string(header::HOMEPAGE),
        comment: entity.read_string(header::COMMENT),
    })
}

fn game_from_hub(entity: &Entity) -> Game {
    Game {
        name: entity.read_string(machine::NAME),
        file: entity
            .read_all(machine::ROM, EntityKind::Rom)
            .into_iter()
            .map(|item| File {
                name: item.read_string(rom::NAME),
                size: item.read_string(rom::SIZE),
                crc: item.read_string(rom::CRC),
                date: item.read_string(rom::DATE),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/doscenter_tests.rs"]
mod tests;
