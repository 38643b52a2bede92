//! ClrMamePro DAT adapter.
//!
//! Mostly the same record model as Logiqx plus a handful of pre-listxml
//! MAME descriptors (`chip`, `video`, `sound`, `input`, `dipswitch`). The
//! `input` controls and `dipswitch` settings are flat strings here, so they
//! land in the hub as a scalar and a string list respectively.

use dathub_core::keys::{
    archive, bios_set, chip, dip_switch, disk, driver, header, input, machine, media, release, rom,
    sample, sound, video,
};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::clrmamepro::{
    Archive, BiosSet, Chip, ClrMamePro, DipSwitch, Disk, Driver, GameBase, Input, Media,
    MetadataFile as CmpFile, Release, Rom, Sample, Sound, Video,
};
use dathub_models::{GameRecord, RecordKind};

use crate::HubConvert;
use crate::util::{non_default, non_empty};

impl HubConvert for CmpFile {
    type Variant = RecordKind;

    fn to_hub(&self) -> MetadataFile {
        let hub_header = self.clrmamepro.as_ref().and_then(header_to_hub);
        let machines = self
            .games
            .iter()
            .map(|game| game_to_hub(game.base()))
            .collect();
        MetadataFile::new(hub_header, machines)
    }

    fn from_hub(hub: &MetadataFile, variant: RecordKind) -> Self {
        CmpFile {
            clrmamepro: hub.header().and_then(header_from_hub),
            games: hub
                .machines()
                .into_iter()
                .map(|m| GameRecord::new(variant, game_from_hub(m)))
                .collect(),
        }
    }
}

// -- ClrMamePro -> hub --

fn header_to_hub(cmp: &ClrMamePro) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Header);
    entity.set_opt(header::NAME, cmp.name.clone());
    entity.set_opt(header::DESCRIPTION, cmp.description.clone());
    entity.set_opt(header::ROOT_DIR, cmp.root_dir.clone());
    entity.set_opt(header::CATEGORY, cmp.category.clone());
    entity.set_opt(header::VERSION, cmp.version.clone());
    entity.set_opt(header::DATE, cmp.date.clone());
    entity.set_opt(header::AUTHOR, cmp.author.clone());
    entity.set_opt(header::HOMEPAGE, cmp.homepage.clone());
    entity.set_opt(header::URL, cmp.url.clone());
    entity.set_opt(header::COMMENT, cmp.comment.clone());
    entity.set_opt(header::HEADER, cmp.header.clone());
    entity.set_opt(header::TYPE, cmp.r#type.clone());
    entity.set_opt(header::FORCE_MERGING, cmp.force_merging.clone());
    entity.set_opt(header::FORCE_ZIPPING, cmp.force_zipping.clone());
    entity.set_opt(header::FORCE_PACKING, cmp.force_packing.clone());
    non_empty(entity)
}

fn game_to_hub(game: &GameBase) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, game.name.clone());
    entity.set_opt(machine::DESCRIPTION, game.description.clone());
    entity.set_opt(machine::YEAR, game.year.clone());
    entity.set_opt(machine::MANUFACTURER, game.manufacturer.clone());
    entity.set_opt(machine::CATEGORY, game.category.clone());
    entity.set_opt(machine::CLONE_OF, game.clone_of.clone());
    entity.set_opt(machine::ROM_OF, game.rom_of.clone());
    entity.set_opt(machine::SAMPLE_OF, game.sample_of.clone());

    entity.set_entities(machine::RELEASE, game.release.iter().map(release_to_hub).collect());
    entity.set_entities(machine::BIOS_SET, game.bios_set.iter().map(bios_set_to_hub).collect());
    entity.set_entities(machine::ROM, game.rom.iter().map(rom_to_hub).collect());
    entity.set_entities(machine::DISK, game.disk.iter().map(disk_to_hub).collect());
    entity.set_entities(machine::MEDIA, game.media.iter().map(media_to_hub).collect());
    entity.set_entities(machine::SAMPLE, game.sample.iter().map(sample_to_hub).collect());
    entity.set_entities(machine::ARCHIVE, game.archive.iter().map(archive_to_hub).collect());
    entity.set_entities(machine::CHIP, game.chip.iter().map(chip_to_hub).collect());
    entity.set_entities(machine::VIDEO, game.video.iter().map(video_to_hub).collect());
    entity.set_entity(machine::SOUND, game.sound.as_ref().map(sound_to_hub));
    entity.set_entity(machine::INPUT, game.input.as_ref().map(input_to_hub));
    entity.set_entities(
        machine::DIP_SWITCH,
        game.dip_switch.iter().map(dip_switch_to_hub).collect(),
    );
    entity.set_entity(machine::DRIVER, game.driver.as_ref().map(driver_to_hub));
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
    entity.set_opt(rom::REGION, item.region.clone());
    entity.set_opt(rom::FLAGS, item.flags.clone());
    entity.set_opt(rom::OFFSET, item.offs.clone());
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
    entity.set_opt(disk::FLAGS, item.flags.clone());
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

fn chip_to_hub(item: &Chip) -> Entity {
    let mut entity = Entity::new(EntityKind::Chip);
    entity.set_opt(chip::TYPE, item.r#type.clone());
    entity.set_opt(chip::NAME, item.name.clone());
    entity.set_opt(chip::FLAGS, item.flags.clone());
    entity.set_opt(chip::CLOCK, item.clock.clone());
    entity
}

fn video_to_hub(item: &Video) -> Entity {
    let mut entity = Entity::new(EntityKind::Video);
    entity.set_opt(video::SCREEN, item.screen.clone());
    entity.set_opt(video::ORIENTATION, item.orientation.clone());
    entity.set_opt(video::WIDTH, item.x.clone());
    entity.set_opt(video::HEIGHT, item.y.clone());
    entity.set_opt(video::ASPECT_X, item.aspect_x.clone());
    entity.set_opt(video::ASPECT_Y, item.aspect_y.clone());
    entity.set_opt(video::REFRESH, item.freq.clone());
    entity
}

fn sound_to_hub(item: &Sound) -> Entity {
    let mut entity = Entity::new(EntityKind::Sound);
    entity.set_opt(sound::CHANNELS, item.channels.clone());
    entity
}

fn input_to_hub(item: &Input) -> Entity {
    let mut entity = Entity::new(EntityKind::Input);
    entity.set_opt(input::PLAYERS, item.players.clone());
    entity.set_opt(input::CONTROL, item.control.clone());
    entity.set_opt(input::BUTTONS, item.buttons.clone());
    entity.set_opt(input::COINS, item.coins.clone());
    entity.set_opt(input::TILT, item.tilt.clone());
    entity.set_opt(input::SERVICE, item.service.clone());
    entity
}

fn dip_switch_to_hub(item: &DipSwitch) -> Entity {
    let mut entity = Entity::new(EntityKind::DipSwitch);
    entity.set_opt(dip_switch::NAME, item.name.clone());
    entity.set_strings(dip_switch::ENTRY, item.entry.clone());
    entity.set_opt(dip_switch::DEFAULT, item.default.clone());
    entity
}

fn driver_to_hub(item: &Driver) -> Entity {
    let mut entity = Entity::new(EntityKind::Driver);
    entity.set_opt(driver::STATUS, item.status.clone());
    entity.set_opt(driver::COLOR, item.color.clone());
    entity.set_opt(driver::SOUND, item.sound.clone());
    entity.set_opt(driver::PALETTE_SIZE, item.palette_size.clone());
    entity.set_opt(driver::BLIT, item.blit.clone());
    entity
}

// -- hub -> ClrMamePro --

fn header_from_hub(entity: &Entity) -> Option<ClrMamePro> {
    non_default(ClrMamePro {
        name: entity.read_string(header::NAME),
        description: entity.read_string(header::DESCRIPTION),
        root_dir: entity.read_string(header::ROOT_DIR),
        category: entity.read_string(header::CATEGORY),
        version: entity.read_string(header::VERSION),
        date: entity.read_string(header::DATE),
        author: entity.read_string(header::AUTHOR),
        homepage: entity.read_string(header::HOMEPAGE),
        url: entity.read_string(header::URL),
        comment: entity.read_string(header::COMMENT),
        header: entity.read_string(header::HEADER),
        r#type: entity.read_string(header::TYPE),
        force_merging: entity.read_string(header::FORCE_MERGING),
        force_zipping: entity.read_string(header::FORCE_ZIPPING),
        force_packing: entity.read_string(header::FORCE_PACKING),
    })
}

fn game_from_hub(entity: &Entity) -> GameBase {
    GameBase {
        name: entity.read_string(machine::NAME),
        description: entity.read_string(machine::DESCRIPTION),
        year: entity.read_string(machine::YEAR),
        manufacturer: entity.read_string(machine::MANUFACTURER),
        category: entity.read_string(machine::CATEGORY),
        clone_of: entity.read_string(machine::CLONE_OF),
        rom_of: entity.read_string(machine::ROM_OF),
        sample_of: entity.read_string(machine::SAMPLE_OF),
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
        chip: entity
            .read_all(machine::CHIP, EntityKind::Chip)
            .into_iter()
            .map(chip_from_hub)
            .collect(),
        video: entity
            .read_all(machine::VIDEO, EntityKind::Video)
            .into_iter()
            .map(video_from_hub)
            .collect(),
        sound: entity
            .read(machine::SOUND, EntityKind::Sound)
            .map(|e| Sound {
                channels: e.read_string(sound::CHANNELS),
            }),
        input: entity
            .read(machine::INPUT, EntityKind::Input)
            .map(input_from_hub),
        dip_switch: entity
            .read_all(machine::DIP_SWITCH, EntityKind::DipSwitch)
            .into_iter()
            .map(dip_switch_from_hub)
            .collect(),
        driver: entity
            .read(machine::DRIVER, EntityKind::Driver)
            .map(driver_from_hub),
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
        region: entity.read_string(rom::REGION),
        flags: entity.read_string(rom::FLAGS),
        offs: entity.read_string(rom::OFFSET),
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
        flags: entity.read_string(disk::FLAGS),
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

fn chip_from_hub(entity: &Entity) -> Chip {
    Chip {
        r#type: entity.read_string(chip::TYPE),
        name: entity.read_string(chip::NAME),
        flags: entity.read_string(chip::FLAGS),
        clock: entity.read_string(chip::CLOCK),
    }
}

fn video_from_hub(entity: &Entity) -> Video {
    Video {
        screen: entity.read_string(video::SCREEN),
        orientation: entity.read_string(video::ORIENTATION),
        x: entity.read_string(video::WIDTH),
        y: entity.read_string(video::HEIGHT),
        aspect_x: entity.read_string(video::ASPECT_X),
        aspect_y: entity.read_string(video::ASPECT_Y),
        freq: entity.read_string(video::REFRESH),
    }
}

fn input_from_hub(entity: &Entity) -> Input {
    Input {
        players: entity.read_string(input::PLAYERS),
        // A Listxml control list is not representable here and reads as None.
        control: entity.read_string(input::CONTROL),
        buttons: entity.read_string(input::BUTTONS),
        coins: entity.read_string(input::COINS),
        tilt: entity.read_string(input::TILT),
        service: entity.read_string(input::SERVICE),
    }
}

fn dip_switch_from_hub(entity: &Entity) -> DipSwitch {
    DipSwitch {
        name: entity.read_string(dip_switch::NAME),
        entry: entity
            .read_string_array(dip_switch::ENTRY)
            .unwrap_or_default(),
        default: entity.read_string(dip_switch::DEFAULT),
    }
}

fn driver_from_hub(entity: &Entity) -> Driver {
    Driver {
        status: entity.read_string(driver::STATUS),
        color: entity.read_string(driver::COLOR),
        sound: entity.read_string(driver::SOUND),
        palette_size: entity.read_string(driver::PALETTE_SIZE),
        blit: entity.read_string(driver::BLIT),
    }
}

#[cfg(test)]
#[path = "tests/clrmamepro_tests.rs"]
mod tests;
