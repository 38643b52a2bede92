//! Logiqx XML datafile adapter.
//!
//! `Dir` trees are flattened on the way in: a game nested under
//! `Dir > Subdir` becomes a machine named `Dir\Subdir\Game`. The way back
//! keeps the joined name and never rebuilds directories.

use dathub_core::keys::{
    archive, bios_set, device_ref, disk, driver, header, machine, media, release, rom, sample,
    software_list, trurip,
};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::logiqx::{
    Archive, BiosSet, ClrMamePro, Datafile, DeviceRef, Dir, Disk, Driver, GameBase, Header, Media,
    Release, Rom, RomCenter, Sample, SoftwareList, Trurip,
};
use dathub_models::{GameRecord, RecordKind};

use crate::HubConvert;
use crate::util::{non_default, non_empty};

impl HubConvert for Datafile {
    type Variant = RecordKind;

    fn to_hub(&self) -> MetadataFile {
        let mut machines: Vec<Entity> = self
            .games
            .iter()
            .map(|game| game_to_hub(game.base()))
            .collect();
        for dir in &self.dirs {
            dir_to_hub(dir, None, &mut machines);
        }

        MetadataFile::new(header_to_hub(self), machines)
    }

    fn from_hub(hub: &MetadataFile, variant: RecordKind) -> Self {
        let hub_header = hub.header();
        let games = hub
            .machines()
            .into_iter()
            .map(|m| GameRecord::new(variant, game_from_hub(m)))
            .collect();

        Datafile {
            build: hub_header.and_then(|h| h.read_string(header::BUILD)),
            debug: hub_header.and_then(|h| h.read_string(header::DEBUG)),
            schema_location: hub_header.and_then(|h| h.read_string(header::SCHEMA_LOCATION)),
            header: hub_header.and_then(header_from_hub),
            games,
            dirs: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Logiqx -> hub
// ---------------------------------------------------------------------------

fn header_to_hub(datafile: &Datafile) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Header);
    entity.set_opt(header::BUILD, datafile.build.clone());
    entity.set_opt(header::DEBUG, datafile.debug.clone());
    entity.set_opt(header::SCHEMA_LOCATION, datafile.schema_location.clone());

    if let Some(h) = &datafile.header {
        entity.set_opt(header::ID, h.id.clone());
        entity.set_opt(header::NAME, h.name.clone());
        entity.set_opt(header::DESCRIPTION, h.description.clone());
        entity.set_opt(header::ROOT_DIR, h.root_dir.clone());
        entity.set_opt(header::CATEGORY, h.category.clone());
        entity.set_opt(header::VERSION, h.version.clone());
        entity.set_opt(header::DATE, h.date.clone());
        entity.set_opt(header::AUTHOR, h.author.clone());
        entity.set_opt(header::EMAIL, h.email.clone());
        entity.set_opt(header::HOMEPAGE, h.homepage.clone());
        entity.set_opt(header::URL, h.url.clone());
        entity.set_opt(header::COMMENT, h.comment.clone());
        entity.set_opt(header::TYPE, h.r#type.clone());

        if let Some(cmp) = &h.clrmamepro {
            entity.set_opt(header::HEADER, cmp.header.clone());
            entity.set_opt(header::FORCE_MERGING, cmp.force_merging.clone());
            entity.set_opt(header::FORCE_NODUMP, cmp.force_nodump.clone());
            entity.set_opt(header::FORCE_PACKING, cmp.force_packing.clone());
        }

        if let Some(rc) = &h.romcenter {
            entity.set_opt(header::PLUGIN, rc.plugin.clone());
            entity.set_opt(header::ROM_MODE, rc.rom_mode.clone());
            entity.set_opt(header::BIOS_MODE, rc.bios_mode.clone());
            entity.set_opt(header::SAMPLE_MODE, rc.sample_mode.clone());
            entity.set_opt(header::LOCK_ROM_MODE, rc.lock_rom_mode.clone());
            entity.set_opt(header::LOCK_BIOS_MODE, rc.lock_bios_mode.clone());
            entity.set_opt(header::LOCK_SAMPLE_MODE, rc.lock_sample_mode.clone());
        }
    }

    non_empty(entity)
}

/// Flatten a directory tree into `machines`, prefixing each game name with
/// the backslash-joined directory path.
fn dir_to_hub(dir: &Dir, parent: Option<&str>, machines: &mut Vec<Entity>) {
    let path = match (parent, dir.name.as_deref()) {
        (Some(parent), Some(name)) => Some(format!("{parent}\\{name}")),
        (Some(parent), None) => Some(parent.to_string()),
        (None, name) => name.map(str::to_string),
    };
    log::trace!("Flattening Logiqx dir {:?}", path);

    for game in &dir.games {
        let mut entity = game_to_hub(game.base());
        if let (Some(path), Some(name)) = (&path, &game.base().name) {
            entity.set(machine::NAME, format!("{path}\\{name}"));
        }
        machines.push(entity);
    }

    for sub in &dir.dirs {
        dir_to_hub(sub, path.as_deref(), machines);
    }
}

fn game_to_hub(game: &GameBase) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, game.name.clone());
    entity.set_opt(machine::SOURCE_FILE, game.source_file.clone());
    entity.set_opt(machine::IS_BIOS, game.is_bios.clone());
    entity.set_opt(machine::IS_DEVICE, game.is_device.clone());
    entity.set_opt(machine::IS_MECHANICAL, game.is_mechanical.clone());
    entity.set_opt(machine::CLONE_OF, game.clone_of.clone());
    entity.set_opt(machine::ROM_OF, game.rom_of.clone());
    entity.set_opt(machine::SAMPLE_OF, game.sample_of.clone());
    entity.set_opt(machine::BOARD, game.board.clone());
    entity.set_opt(machine::REBUILD_TO, game.rebuild_to.clone());
    entity.set_opt(machine::ID, game.id.clone());
    entity.set_opt(machine::CLONE_OF_ID, game.clone_of_id.clone());
    entity.set_opt(machine::RUNNABLE, game.runnable.clone());
    entity.set_strings(machine::COMMENT, game.comment.clone());
    entity.set_opt(machine::DESCRIPTION, game.description.clone());
    entity.set_opt(machine::YEAR, game.year.clone());
    entity.set_opt(machine::MANUFACTURER, game.manufacturer.clone());
    entity.set_opt(machine::PUBLISHER, game.publisher.clone());
    entity.set_strings(machine::CATEGORY, game.category.clone());
    entity.set_entity(machine::TRURIP, game.trurip.as_ref().map(trurip_to_hub));

    entity.set_entities(
        machine::RELEASE,
        game.release.iter().map(release_to_hub).collect(),
    );
    entity.set_entities(
        machine::BIOS_SET,
        game.bios_set.iter().map(bios_set_to_hub).collect(),
    );
    entity.set_entities(machine::ROM, game.rom.iter().map(rom_to_hub).collect());
    entity.set_entities(machine::DISK, game.disk.iter().map(disk_to_hub).collect());
    entity.set_entities(machine::MEDIA, game.media.iter().map(media_to_hub).collect());
    entity.set_entities(
        machine::DEVICE_REF,
        game.device_ref.iter().map(device_ref_to_hub).collect(),
    );
    entity.set_entities(
        machine::SAMPLE,
        game.sample.iter().map(sample_to_hub).collect(),
    );
    entity.set_entities(
        machine::ARCHIVE,
        game.archive.iter().map(archive_to_hub).collect(),
    );
    entity.set_entity(machine::DRIVER, game.driver.as_ref().map(driver_to_hub));
    entity.set_entities(
        machine::SOFTWARE_LIST,
        game.software_list.iter().map(software_list_to_hub).collect(),
    );
    entity
}

fn trurip_to_hub(item: &Trurip) -> Entity {
    let mut entity = Entity::new(EntityKind::Trurip);
    entity.set_opt(trurip::TITLE_ID, item.title_id.clone());
    entity.set_opt(trurip::PUBLISHER, item.publisher.clone());
    entity.set_opt(trurip::DEVELOPER, item.developer.clone());
    entity.set_opt(trurip::YEAR, item.year.clone());
    entity.set_opt(trurip::GENRE, item.genre.clone());
    entity.set_opt(trurip::SUBGENRE, item.subgenre.clone());
    entity.set_opt(trurip::RATINGS, item.ratings.clone());
    entity.set_opt(trurip::SCORE, item.score.clone());
    entity.set_opt(trurip::PLAYERS, item.players.clone());
    entity.set_opt(trurip::ENABLED, item.enabled.clone());
    entity.set_opt(trurip::CRC, item.crc.clone());
    entity.set_opt(trurip::SOURCE, item.source.clone());
    entity.set_opt(trurip::CLONE_OF, item.clone_of.clone());
    entity.set_opt(trurip::RELATED_TO, item.related_to.clone());
    entity
}

fn release_to_hub(item: &Release) -> Entity {
    let mut entity = Entity::new(EntityKind::Release);
    entity.set_opt(release::NAME, item.name.clone());
    entity.set_opt(release::REGION, item.region.clone());
    entity.set_opt(release::LANGUAGE, item.language.clone());
    entity.set_opt(release::DATE, item.date.clone());
    entity.set_opt(release::DEFAULT, item.default.clone());
    entity
}

fn bios_set_to_hub(item: &BiosSet) -> Entity {
    let mut entity = Entity::new(EntityKind::BiosSet);
    entity.set_opt(bios_set::NAME, item.name.clone());
    entity.set_opt(bios_set::DESCRIPTION, item.description.clone());
    entity.set_opt(bios_set::DEFAULT, item.default.clone());
    entity
}

fn rom_to_hub(item: &Rom) -> Entity {
    let mut entity = Entity::new(EntityKind::Rom);
    entity.set_opt(rom::NAME, item.name.clone());
    entity.set_opt(rom::SIZE, item.size.clone());
    entity.set_opt(rom::CRC, item.crc.clone());
    entity.set_opt(rom::MD5, item.md5.clone());
    entity.set_opt(rom::SHA1, item.sha1.clone());
    entity.set_opt(rom::SHA256, item.sha256.clone());
    entity.set_opt(rom::SHA384, item.sha384.clone());
    entity.set_opt(rom::SHA512, item.sha512.clone());
    entity.set_opt(rom::SPAMSUM, item.spamsum.clone());
    entity.set_opt(rom::XXHASH364, item.xxh3_64.clone());
    entity.set_opt(rom::XXHASH3128, item.xxh3_128.clone());
    entity.set_opt(rom::MERGE, item.merge.clone());
    entity.set_opt(rom::STATUS, item.status.clone());
    entity.set_opt(rom::SERIAL, item.serial.clone());
    entity.set_opt(rom::HEADER, item.header.clone());
    entity.set_opt(rom::DATE, item.date.clone());
    entity.set_opt(rom::INVERTED, item.inverted.clone());
    entity.set_opt(rom::MIA, item.mia.clone());
    entity
}

fn disk_to_hub(item: &Disk) -> Entity {
    let mut entity = Entity::new(EntityKind::Disk);
    entity.set_opt(disk::NAME, item.name.clone());
    entity.set_opt(disk::MD5, item.md5.clone());
    entity.set_opt(disk::SHA1, item.sha1.clone());
    entity.set_opt(disk::MERGE, item.merge.clone());
    entity.set_opt(disk::STATUS, item.status.clone());
    entity.set_opt(disk::REGION, item.region.clone());
    entity
}

fn media_to_hub(item: &Media) -> Entity {
    let mut entity = Entity::new(EntityKind::Media);
    entity.set_opt(media::NAME, item.name.clone());
    entity.set_opt(media::MD5, item.md5.clone());
    entity.set_opt(media::SHA1, item.sha1.clone());
    entity.set_opt(media::SHA256, item.sha256.clone());
    entity.set_opt(media::SPAMSUM, item.spamsum.clone());
    entity
}

fn device_ref_to_hub(item: &DeviceRef) -> Entity {
    let mut entity = Entity::new(EntityKind::DeviceRef);
    entity.set_opt(device_ref::NAME, item.name.clone());
    entity
}

fn sample_to_hub(item: &Sample) -> Entity {
    let mut entity = Entity::new(EntityKind::Sample);
    entity.set_opt(sample::NAME, item.name.clone());
    entity
}

fn archive_to_hub(item: &Archive) -> Entity {
    let mut entity = Entity::new(EntityKind::Archive);
    entity.set_opt(archive::NAME, item.name.clone());
    entity
}

fn driver_to_hub(item: &Driver) -> Entity {
    let mut entity = Entity::new(EntityKind::Driver);
    entity.set_opt(driver::STATUS, item.status.clone());
    entity.set_opt(driver::EMULATION, item.emulation.clone());
    entity.set_opt(driver::COCKTAIL, item.cocktail.clone());
    entity.set_opt(driver::SAVE_STATE, item.save_state.clone());
    entity.set_opt(driver::REQUIRES_ARTWORK, item.requires_artwork.clone());
    entity.set_opt(driver::UNOFFICIAL, item.unofficial.clone());
    entity.set_opt(driver::NO_SOUND_HARDWARE, item.no_sound_hardware.clone());
    entity.set_opt(driver::INCOMPLETE, item.incomplete.clone());
    entity
}

fn software_list_to_hub(item: &SoftwareList) -> Entity {
    let mut entity = Entity::new(EntityKind::SoftwareList);
    entity.set_opt(software_list::TAG, item.tag.clone());
    entity.set_opt(software_list::NAME, item.name.clone());
    entity.set_opt(software_list::STATUS, item.status.clone());
    entity.set_opt(software_list::FILTER, item.filter.clone());
    entity
}

// ---------------------------------------------------------------------------
// hub -> Logiqx
// ---------------------------------------------------------------------------

fn header_from_hub(entity: &Entity) -> Option<Header> {
    let clrmamepro = non_default(ClrMamePro {
        header: entity.read_string(header::HEADER),
        force_merging: entity.read_string(header::FORCE_MERGING),
        force_nodump: entity.read_string(header::FORCE_NODUMP),
        force_packing: entity.read_string(header::FORCE_PACKING),
    });

    let romcenter = non_default(RomCenter {
        plugin: entity.read_string(header::PLUGIN),
        rom_mode: entity.read_string(header::ROM_MODE),
        bios_mode: entity.read_string(header::BIOS_MODE),
        sample_mode: entity.read_string(header::SAMPLE_MODE),
        lock_rom_mode: entity.read_string(header::LOCK_ROM_MODE),
        lock_bios_mode: entity.read_string(header::LOCK_BIOS_MODE),
        lock_sample_mode: entity.read_string(header::LOCK_SAMPLE_MODE),
    });

    non_default(Header {
        id: entity.read_string(header::ID),
        name: entity.read_string(header::NAME),
        description: entity.read_string(header::DESCRIPTION),
        root_dir: entity.read_string(header::ROOT_DIR),
        category: entity.read_string(header::CATEGORY),
        version: entity.read_string(header::VERSION),
        date: entity.read_string(header::DATE),
        author: entity.read_string(header::AUTHOR),
        email: entity.read_string(header::EMAIL),
        homepage: entity.read_string(header::HOMEPAGE),
        url: entity.read_string(header::URL),
        comment: entity.read_string(header::COMMENT),
        r#type: entity.read_string(header::TYPE),
        clrmamepro,
        romcenter,
    })
}

fn game_from_hub(entity: &Entity) -> GameBase {
    GameBase {
        name: entity.read_string(machine::NAME),
        source_file: entity.read_string(machine::SOURCE_FILE),
        is_bios: entity.read_string(machine::IS_BIOS),
        is_device: entity.read_string(machine::IS_DEVICE),
        is_mechanical: entity.read_string(machine::IS_MECHANICAL),
        clone_of: entity.read_string(machine::CLONE_OF),
        rom_of: entity.read_string(machine::ROM_OF),
        sample_of: entity.read_string(machine::SAMPLE_OF),
        board: entity.read_string(machine::BOARD),
        rebuild_to: entity.read_string(machine::REBUILD_TO),
        id: entity.read_string(machine::ID),
        clone_of_id: entity.read_string(machine::CLONE_OF_ID),
        runnable: entity.read_string(machine::RUNNABLE),
        comment: entity
            .read_string_array(machine::COMMENT)
            .unwrap_or_default(),
        description: entity.read_string(machine::DESCRIPTION),
        year: entity.read_string(machine::YEAR),
        manufacturer: entity.read_string(machine::MANUFACTURER),
        publisher: entity.read_string(machine::PUBLISHER),
        category: entity
            .read_string_array(machine::CATEGORY)
            .unwrap_or_default(),
        trurip: entity
            .read(machine::TRURIP, EntityKind::Trurip)
            .map(trurip_from_hub),
        release: entity
            .read_all(machine::RELEASE, EntityKind::Release)
            .into_iter()
            .map(release_from_hub)
            .collect(),
        bios_set: entity
            .read_all(machine::BIOS_SET, EntityKind::BiosSet)
            .into_iter()
            .map(bios_set_from_hub)
            .collect(),
        rom: entity
            .read_all(machine::ROM, EntityKind::Rom)
            .into_iter()
            .map(rom_from_hub)
            .collect(),
        disk: entity
            .read_all(machine::DISK, EntityKind::Disk)
            .into_iter()
            .map(disk_from_hub)
            .collect(),
        media: entity
            .read_all(machine::MEDIA, EntityKind::Media)
            .into_iter()
            .map(media_from_hub)
            .collect(),
        device_ref: entity
            .read_all(machine::DEVICE_REF, EntityKind::DeviceRef)
            .into_iter()
            .map(|e| DeviceRef {
                name: e.read_string(device_ref::NAME),
            })
            .collect(),
        sample: entity
            .read_all(machine::SAMPLE, EntityKind::Sample)
            .into_iter()
            .map(|e| Sample {
                name: e.read_string(sample::NAME),
            })
            .collect(),
        archive: entity
            .read_all(machine::ARCHIVE, EntityKind::Archive)
            .into_iter()
            .map(|e| Archive {
                name: e.read_string(archive::NAME),
            })
            .collect(),
        driver: entity
            .read(machine::DRIVER, EntityKind::Driver)
            .map(driver_from_hub),
        software_list: entity
            .read_all(machine::SOFTWARE_LIST, EntityKind::SoftwareList)
            .into_iter()
            .map(software_list_from_hub)
            .collect(),
    }
}

fn trurip_from_hub(entity: &Entity) -> Trurip {
    Trurip {
        title_id: entity.read_string(trurip::TITLE_ID),
        publisher: entity.read_string(trurip::PUBLISHER),
        developer: entity.read_string(trurip::DEVELOPER),
        year: entity.read_string(trurip::YEAR),
        genre: entity.read_string(trurip::GENRE),
        subgenre: entity.read_string(trurip::SUBGENRE),
        ratings: entity.read_string(trurip::RATINGS),
        score: entity.read_string(trurip::SCORE),
        players: entity.read_string(trurip::PLAYERS),
        enabled: entity.read_string(trurip::ENABLED),
        crc: entity.read_string(trurip::CRC),
        source: entity.read_string(trurip::SOURCE),
        clone_of: entity.read_string(trurip::CLONE_OF),
        related_to: entity.read_string(trurip::RELATED_TO),
    }
}

fn release_from_hub(entity: &Entity) -> Release {
    Release {
        name: entity.read_string(release::NAME),
        region: entity.read_string(release::REGION),
        language: entity.read_string(release::LANGUAGE),
        date: entity.read_string(release::DATE),
        default: entity.read_string(release::DEFAULT),
    }
}

fn bios_set_from_hub(entity: &Entity) -> BiosSet {
    BiosSet {
        name: entity.read_string(bios_set::NAME),
        description: entity.read_string(bios_set::DESCRIPTION),
        default: entity.read_string(bios_set::DEFAULT),
    }
}

fn rom_from_hub(entity: &Entity) -> Rom {
    Rom {
        name: entity.read_string(rom::NAME),
        size: entity.read_string(rom::SIZE),
        crc: entity.read_string(rom::CRC),
        md5: entity.read_string(rom::MD5),
        sha1: entity.read_string(rom::SHA1),
        sha256: entity.read_string(rom::SHA256),
        sha384: entity.read_string(rom::SHA384),
        sha512: entity.read_string(rom::SHA512),
        spamsum: entity.read_string(rom::SPAMSUM),
        xxh3_64: entity.read_string(rom::XXHASH364),
        xxh3_128: entity.read_string(rom::XXHASH3128),
        merge: entity.read_string(rom::MERGE),
        status: entity.read_string(rom::STATUS),
        serial: entity.read_string(rom::SERIAL),
        header: entity.read_string(rom::HEADER),
        date: entity.read_string(rom::DATE),
        inverted: entity.read_string(rom::INVERTED),
        mia: entity.read_string(rom::MIA),
    }
}

fn disk_from_hub(entity: &Entity) -> Disk {
    Disk {
        name: entity.read_string(disk::NAME),
        md5: entity.read_string(disk::MD5),
        sha1: entity.read_string(disk::SHA1),
        merge: entity.read_string(disk::MERGE),
        status: entity.read_string(disk::STATUS),
        region: entity.read_string(disk::REGION),
    }
}

fn media_from_hub(entity: &Entity) -> Media {
    Media {
        name: entity.read_string(media::NAME),
        md5: entity.read_string(media::MD5),
        sha1: entity.read_string(media::SHA1),
        sha256: entity.read_string(media::SHA256),
        spamsum: entity.read_string(media::SPAMSUM),
    }
}

fn driver_from_hub(entity: &Entity) -> Driver {
    Driver {
        status: entity.read_string(driver::STATUS),
        emulation: entity.read_string(driver::EMULATION),
        cocktail: entity.read_string(driver::COCKTAIL),
        save_state: entity.read_string(driver::SAVE_STATE),
        requires_artwork: entity.read_string(driver::REQUIRES_ARTWORK),
        unofficial: entity.read_string(driver::UNOFFICIAL),
        no_sound_hardware: entity.read_string(driver::NO_SOUND_HARDWARE),
        incomplete: entity.read_string(driver::INCOMPLETE),
    }
}

fn software_list_from_hub(entity: &Entity) -> SoftwareList {
    SoftwareList {
        tag: entity.read_string(software_list::TAG),
        name: entity.read_string(software_list::NAME),
        status: entity.read_string(software_list::STATUS),
        filter: entity.read_string(software_list::FILTER),
    }
}

#[cfg(test)]
#[path = "tests/logiqx_tests.rs"]
mod tests;
