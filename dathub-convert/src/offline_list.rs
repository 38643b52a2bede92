//! OfflineList adapter.
//!
//! `<configuration>` and `<gui>` become nested header entities. A game's
//! `romSize` is a game-level total, but the hub only has per-file sizes: it is
//! copied onto every Rom and read back from the first one.

use dathub_core::keys::{
    dat_url, find, header, image, images, info_item, infos, machine, new_dat, rom, search, to,
};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::offline_list::{
    CanOpen, Configuration, Dat, DatUrl, FileRomCrc, Files, Find, Game, Games, Gui, Image, Images,
    InfoItem, Infos, NewDat, Search, To,
};

use crate::HubConvert;
use crate::util::{non_default, non_empty};

impl HubConvert for Dat {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut hub_header = Entity::new(EntityKind::Header);
        hub_header.set_opt(header::SCHEMA_LOCATION, self.no_namespace_schema_location.clone());
        if let Some(config) = &self.configuration {
            configuration_to_hub(config, &mut hub_header);
        }
        hub_header.set_entity(
            header::IMAGES,
            self.gui
                .as_ref()
                .and_then(|gui| gui.images.as_ref())
                .and_then(images_to_hub),
        );

        let machines = self
            .games
            .iter()
            .flat_map(|games| games.game.iter())
            .map(game_to_hub)
            .collect();
        MetadataFile::new(non_empty(hub_header), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        let hub_header = hub.header();
        Dat {
            no_namespace_schema_location: hub_header
                .and_then(|h| h.read_string(header::SCHEMA_LOCATION)),
            configuration: hub_header.and_then(configuration_from_hub),
            games: non_default(Games {
                game: hub.machines().into_iter().map(game_from_hub).collect(),
            }),
            gui: hub_header
                .and_then(|h| h.read(header::IMAGES, EntityKind::Images))
                .map(|e| Gui {
                    images: Some(images_from_hub(e)),
                }),
        }
    }
}

// -- Configuration --

fn configuration_to_hub(config: &Configuration, hub_header: &mut Entity) {
    hub_header.set_opt(header::NAME, config.dat_name.clone());
    hub_header.set_opt(header::IM_FOLDER, config.im_folder.clone());
    hub_header.set_opt(header::DAT_VERSION, config.dat_version.clone());
    hub_header.set_opt(header::SYSTEM, config.system.clone());
    hub_header.set_opt(header::SCREENSHOTS_WIDTH, config.screenshots_width.clone());
    hub_header.set_opt(header::SCREENSHOTS_HEIGHT, config.screenshots_height.clone());
    hub_header.set_entity(header::INFOS, config.infos.as_ref().and_then(infos_to_hub));
    hub_header.set_strings(
        header::CAN_OPEN,
        config
            .can_open
            .as_ref()
            .map(|c| c.extension.clone())
            .unwrap_or_default(),
    );
    hub_header.set_entity(header::NEW_DAT, config.new_dat.as_ref().and_then(new_dat_to_hub));
    hub_header.set_entity(header::SEARCH, config.search.as_ref().and_then(search_to_hub));
    hub_header.set_opt(header::ROM_TITLE, config.rom_title.clone());
}

fn configuration_from_hub(hub_header: &Entity) -> Option<Configuration> {
    non_default(Configuration {
        dat_name: hub_header.read_string(header::NAME),
        im_folder: hub_header.read_string(header::IM_FOLDER),
        dat_version: hub_header.read_string(header::DAT_VERSION),
        system: hub_header.read_string(header::SYSTEM),
        screenshots_width: hub_header.read_string(header::SCREENSHOTS_WIDTH),
        screenshots_height: hub_header.read_string(header::SCREENSHOTS_HEIGHT),
        infos: hub_header
            .read(header::INFOS, EntityKind::Infos)
            .map(infos_from_hub),
        can_open: hub_header
            .read_string_array(header::CAN_OPEN)
            .map(|extension| CanOpen { extension }),
        new_dat: hub_header
            .read(header::NEW_DAT, EntityKind::NewDat)
            .map(new_dat_from_hub),
        search: hub_header
            .read(header::SEARCH, EntityKind::Search)
            .map(search_from_hub),
        rom_title: hub_header.read_string(header::ROM_TITLE),
    })
}

/// `(key, accessor)` for every column OfflineList can describe.
fn info_columns(value: &Infos) -> [(&'static str, &Option<InfoItem>); 13] {
    [
        (infos::TITLE, &value.title),
        (infos::LOCATION, &value.location),
        (infos::PUBLISHER, &value.publisher),
        (infos::SOURCE_ROM, &value.source_rom),
        (infos::SAVE_TYPE, &value.save_type),
        (infos::ROM_SIZE, &value.rom_size),
        (infos::RELEASE_NUMBER, &value.release_number),
        (infos::LANGUAGE_NUMBER, &value.language_number),
        (infos::COMMENT, &value.comment),
        (infos::ROM_CRC, &value.rom_crc),
        (infos::IM1_CRC, &value.im1_crc),
        (infos::IM2_CRC, &value.im2_crc),
        (infos::FILES, &value.files),
    ]
}

fn infos_to_hub(value: &Infos) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Infos);
    for (key, item) in info_columns(value) {
        entity.set_entity(key, item.as_ref().map(info_item_to_hub));
    }
    non_empty(entity)
}

fn infos_from_hub(entity: &Entity) -> Infos {
    let item = |key| {
        entity
            .read(key, EntityKind::InfoItem)
            .map(info_item_from_hub)
    };
    Infos {
        title: item(infos::TITLE),
        location: item(infos::LOCATION),
        publisher: item(infos::PUBLISHER),
        source_rom: item(infos::SOURCE_ROM),
        save_type: item(infos::SAVE_TYPE),
        rom_size: item(infos::ROM_SIZE),
        release_number: item(infos::RELEASE_NUMBER),
        language_number: item(infos::LANGUAGE_NUMBER),
        comment: item(infos::COMMENT),
        rom_crc: item(infos::ROM_CRC),
        im1_crc: item(infos::IM1_CRC),
        im2_crc: item(infos::IM2_CRC),
        files: item(infos::FILES),
    }
}

fn info_item_to_hub(item: &InfoItem) -> Entity {
    let mut entity = Entity::new(EntityKind::InfoItem);
    entity.set_opt(info_item::VISIBLE, item.visible.clone());
    entity.set_opt(info_item::IN_NAMING_OPTION, item.in_naming_option.clone());
    entity.set_opt(info_item::DEFAULT, item.default.clone());
    entity
}

fn info_item_from_hub(entity: &Entity) -> InfoItem {
    InfoItem {
        visible: entity.read_string(info_item::VISIBLE),
        in_naming_option: entity.read_string(info_item::IN_NAMING_OPTION),
        default: entity.read_string(info_item::DEFAULT),
    }
}

fn new_dat_to_hub(value: &NewDat) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::NewDat);
    entity.set_opt(new_dat::DAT_VERSION_URL, value.dat_version_url.clone());
    entity.set_entity(
        new_dat::DAT_URL,
        value.dat_url.as_ref().map(|url| {
            let mut url_entity = Entity::new(EntityKind::DatUrl);
            url_entity.set_opt(dat_url::FILE_NAME, url.file_name.clone());
            url_entity.set_opt(dat_url::CONTENT, url.content.clone());
            url_entity
        }),
    );
    entity.set_opt(new_dat::IM_URL, value.im_url.clone());
    non_empty(entity)
}

fn new_dat_from_hub(entity: &Entity) -> NewDat {
    NewDat {
        dat_version_url: entity.read_string(new_dat::DAT_VERSION_URL),
        dat_url: entity
            .read(new_dat::DAT_URL, EntityKind::DatUrl)
            .map(|url| DatUrl {
                file_name: url.read_string(dat_url::FILE_NAME),
                content: url.read_string(dat_url::CONTENT),
            }),
        im_url: entity.read_string(new_dat::IM_URL),
    }
}

fn search_to_hub(value: &Search) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Search);
    entity.set_entities(search::TO, value.to.iter().map(to_to_hub).collect());
    non_empty(entity)
}

fn to_to_hub(value: &To) -> Entity {
    let mut entity = Entity::new(EntityKind::To);
    entity.set_opt(to::VALUE, value.value.clone());
    entity.set_opt(to::DEFAULT, value.default.clone());
    entity.set_opt(to::AUTO, value.auto.clone());
    entity.set_entities(
        to::FIND,
        value
            .find
            .iter()
            .map(|f| {
                let mut find_entity = Entity::new(EntityKind::Find);
                find_entity.set_opt(find::OPERATION, f.operation.clone());
                find_entity.set_opt(find::VALUE, f.value.clone());
                find_entity.set_opt(find::CONTENT, f.content.clone());
                find_entity
            })
            .collect(),
    );
    entity
}

fn search_from_hub(entity: &Entity) -> Search {
    Search {
        to: entity
            .read_all(search::TO, EntityKind::To)
            .into_iter()
            .map(|t| To {
                value: t.read_string(to::VALUE),
                default: t.read_string(to::DEFAULT),
                auto: t.read_string(to::AUTO),
                find: t
                    .read_all(to::FIND, EntityKind::Find)
                    .into_iter()
                    .map(|f| Find {
                        operation: f.read_string(find::OPERATION),
                        value: f.read_string(find::VALUE),
                        content: f.read_string(find::CONTENT),
                    })
                    .collect(),
            })
            .collect(),
    }
}

// -- GUI --

fn images_to_hub(value: &Images) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Images);
    entity.set_opt(images::WIDTH, value.width.clone());
    entity.set_opt(images::HEIGHT, value.height.clone());
    entity.set_entities(
        images::IMAGE,
        value
            .image
            .iter()
            .map(|img| {
                let mut image_entity = Entity::new(EntityKind::Image);
                image_entity.set_opt(image::X, img.x.clone());
                image_entity.set_opt(image::Y, img.y.clone());
                image_entity.set_opt(image::WIDTH, img.width.clone());
                image_entity.set_opt(image::HEIGHT, img.height.clone());
                image_entity
            })
            .collect(),
    );
    non_empty(entity)
}

fn images_from_hub(entity: &Entity) -> Images {
    Images {
        width: entity.read_string(images::WIDTH),
        height: entity.read_string(images::HEIGHT),
        image: entity
            .read_all(images::IMAGE, EntityKind::Image)
            .into_iter()
            .map(|img| Image {
                x: img.read_string(image::X),
                y: img.read_string(image::Y),
                width: img.read_string(image::WIDTH),
                height: img.read_string(image::HEIGHT),
            })
            .collect(),
    }
}

// -- Games --

fn game_to_hub(game: &Game) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::IMAGE_NUMBER, game.image_number.clone());
    entity.set_opt(machine::RELEASE_NUMBER, game.release_number.clone());
    entity.set_opt(machine::NAME, game.title.clone());
    entity.set_opt(machine::SAVE_TYPE, game.save_type.clone());
    entity.set_opt(machine::PUBLISHER, game.publisher.clone());
    entity.set_opt(machine::LOCATION, game.location.clone());
    entity.set_opt(machine::SOURCE_ROM, game.source_rom.clone());
    entity.set_opt(machine::LANGUAGE, game.language.clone());
    entity.set_opt(machine::IM1_CRC, game.im1_crc.clone());
    entity.set_opt(machine::IM2_CRC, game.im2_crc.clone());
    entity.set_opt(machine::COMMENT, game.comment.clone());
    entity.set_opt(machine::DUPLICATE_ID, game.duplicate_id.clone());

    if game.rom_size.is_some() && game.files.as_ref().is_none_or(|f| f.rom_crc.is_empty()) {
        log::debug!(
            "OfflineList game {:?} has a romSize but no files; size dropped",
            game.title
        );
    }
    let roms = game
        .files
        .iter()
        .flat_map(|files| files.rom_crc.iter())
        .map(|file| {
            let mut rom_entity = Entity::new(EntityKind::Rom);
            rom_entity.set_opt(rom::EXTENSION, file.extension.clone());
            rom_entity.set_opt(rom::CRC, file.content.clone());
            rom_entity.set_opt(rom::SIZE, game.rom_size.clone());
            rom_entity
        })
        .collect();
    entity.set_entities(machine::ROM, roms);
    entity
}

fn game_from_hub(entity: &Entity) -> Game {
    let roms = entity.read_all(machine::ROM, EntityKind::Rom);
    Game {
        image_number: entity.read_string(machine::IMAGE_NUMBER),
        release_number: entity.read_string(machine::RELEASE_NUMBER),
        title: entity.read_string(machine::NAME),
        save_type: entity.read_string(machine::SAVE_TYPE),
        rom_size: roms.first().map(|first| rom_size_from_hub(first)),
        publisher: entity.read_string(machine::PUBLISHER),
        location: entity.read_string(machine::LOCATION),
        source_rom: entity.read_string(machine::SOURCE_ROM),
        language: entity.read_string(machine::LANGUAGE),
        files: non_default(Files {
            rom_crc: roms
                .iter()
                .map(|r| FileRomCrc {
                    extension: r.read_string(rom::EXTENSION),
                    content: r.read_string(rom::CRC),
                })
                .collect(),
        }),
        im1_crc: entity.read_string(machine::IM1_CRC),
        im2_crc: entity.read_string(machine::IM2_CRC),
        comment: entity.read_string(machine::COMMENT),
        duplicate_id: entity.read_string(machine::DUPLICATE_ID),
    }
}

/// The game's total size from its first Rom. Anything that is not a byte
/// count becomes `"0"`.
fn rom_size_from_hub(first: &Entity) -> String {
    match first.read_u64(rom::SIZE) {
        Some(size) => size.to_string(),
        None => {
            log::debug!(
                "OfflineList romSize {:?} is not numeric; writing 0",
                first.read_str(rom::SIZE)
            );
            "0".to_string()
        }
    }
}

#[cfg(test)]
#[path = "tests/offline_list_tests.rs"]
mod tests;
