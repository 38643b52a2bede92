//! Separated-value (CSV/TSV/SSV) listing adapter.
//!
//! Each row is one item of one game. The `type` column decides whether the
//! row becomes a ROM, a disk or a media entry. File-level columns
//! (`file_name`, `internal_name`, `description`) are taken from the first row.

use dathub_core::keys::{disk, header, machine, media, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::separated_value::{MetadataFile as SeparatedValueFile, Row};

use crate::HubConvert;
use crate::util::non_empty;

const TYPE_ROM: &str = "rom";
const TYPE_DISK: &str = "disk";
const TYPE_MEDIA: &str = "media";

impl HubConvert for SeparatedValueFile {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let machines = self.rows.iter().map(row_to_hub).collect();
        MetadataFile::new(header_to_hub(self), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        let hub_header = hub.header();
        let rows = hub
            .machines()
            .into_iter()
            .flat_map(|m| rows_from_hub(hub_header, m))
            .collect();

        SeparatedValueFile {
            header: hub_header
                .and_then(|h| h.read_string_array(header::HEADER_ROW))
                .unwrap_or_default(),
            rows,
        }
    }
}

fn header_to_hub(file: &SeparatedValueFile) -> Option<Entity> {
    let mut entity = Entity::new(EntityKind::Header);
    entity.set_strings(header::HEADER_ROW, file.header.clone());

    if let Some(first) = file.rows.first() {
        entity.set_opt(header::FILE_NAME, first.file_name.clone());
        entity.set_opt(header::NAME, first.internal_name.clone());
        entity.set_opt(header::DESCRIPTION, first.description.clone());
    }

    non_empty(entity)
}

fn row_to_hub(row: &Row) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, row.game_name.clone());
    entity.set_opt(machine::DESCRIPTION, row.game_description.clone());

    let kind = row.r#type.as_deref().map(str::to_ascii_lowercase);
    match kind.as_deref() {
        Some(TYPE_ROM) => {
            let mut item = Entity::new(EntityKind::Rom);
            item.set_opt(rom::NAME, row.rom_name.clone());
            item.set_opt(rom::SIZE, row.size.clone());
            item.set_opt(rom::CRC, row.crc.clone());
            item.set_opt(rom::MD5, row.md5.clone());
            item.set_opt(rom::SHA1, row.sha1.clone());
            item.set_opt(rom::SHA256, row.sha256.clone());
            item.set_opt(rom::SHA384, row.sha384.clone());
            item.set_opt(rom::SHA512, row.sha512.clone());
            item.set_opt(rom::SPAMSUM, row.spamsum.clone());
            item.set_opt(rom::STATUS, row.status.clone());
            entity.set_entities(machine::ROM, vec![item]);
        }
        Some(TYPE_DISK) => {
            let mut item = Entity::new(EntityKind::Disk);
            item.set_opt(disk::NAME, row.disk_name.clone());
            item.set_opt(disk::MD5, row.md5.clone());
            item.set_opt(disk::SHA1, row.sha1.clone());
            item.set_opt(disk::STATUS, row.status.clone());
            entity.set_entities(machine::DISK, vec![item]);
        }
        Some(TYPE_MEDIA) => {
            let mut item = Entity::new(EntityKind::Media);
            item.set_opt(media::NAME, row.disk_name.clone());
            item.set_opt(media::MD5, row.md5.clone());
            item.set_opt(media::SHA1, row.sha1.clone());
            item.set_opt(media::SHA256, row.sha256.clone());
            item.set_opt(media::SPAMSUM, row.spamsum.clone());
            entity.set_entities(machine::MEDIA, vec![item]);
        }
        other => {
            log::debug!(
                "Row {:?} has unrecognized type {:?}; keeping the game without items",
                row.game_name,
                other
            );
        }
    }

    entity
}

/// One row per item: ROMs, then disks, then media.
fn rows_from_hub(hub_header: Option<&Entity>, entity: &Entity) -> Vec<Row> {
    let base = Row {
        file_name: hub_header.and_then(|h| h.read_string(header::FILE_NAME)),
        internal_name: hub_header.and_then(|h| h.read_string(header::NAME)),
        description: hub_header.and_then(|h| h.read_string(header::DESCRIPTION)),
        game_name: entity.read_string(machine::NAME),
        game_description: entity.read_string(machine::DESCRIPTION),
        ..Default::default()
    };

    let mut rows = Vec::new();

    for item in entity.read_all(machine::ROM, EntityKind::Rom) {
        rows.push(Row {
            r#type: Some(TYPE_ROM.to_string()),
            rom_name: item.read_string(rom::NAME),
            size: item.read_string(rom::SIZE),
            crc: item.read_string(rom::CRC),
            md5: item.read_string(rom::MD5),
            sha1: item.read_string(rom::SHA1),
            sha256: item.read_string(rom::SHA256),
            sha384: item.read_string(rom::SHA384),
            sha512: item.read_string(rom::SHA512),
            spamsum: item.read_string(rom::SPAMSUM),
            status: item.read_string(rom::STATUS),
            ..base.clone()
        });
    }

    for item in entity.read_all(machine::DISK, EntityKind::Disk) {
        rows.push(Row {
            r#type: Some(TYPE_DISK.to_string()),
            disk_name: item.read_string(disk::NAME),
            md5: item.read_string(disk::MD5),
            sha1: item.read_string(disk::SHA1),
            status: item.read_string(disk::STATUS),
            ..base.clone()
        });
    }

    for item in entity.read_all(machine::MEDIA, EntityKind::Media) {
        rows.push(Row {
            r#type: Some(TYPE_MEDIA.to_string()),
            disk_name: item.read_string(media::NAME),
            md5: item.read_string(media::MD5),
            sha1: item.read_string(media::SHA1),
            sha256: item.read_string(media::SHA256),
            spamsum: item.read_string(media::SPAMSUM),
            ..base.clone()
        });
    }

    rows
}

#[cfg(test)]
#[path = "tests/separated_value_tests.rs"]
mod tests;
