//! Everdrive SMDB adapter. One row, one machine, one ROM.

use dathub_core::keys::{machine, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::everdrive_smdb::{MetadataFile as SmdbFile, Row};

use crate::HubConvert;

impl HubConvert for SmdbFile {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        MetadataFile::new(None, self.rows.iter().map(row_to_hub).collect())
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        SmdbFile {
            rows: hub
                .machines()
                .into_iter()
                .flat_map(|m| m.read_all(machine::ROM, EntityKind::Rom))
                .map(row_from_hub)
                .collect(),
        }
    }
}

fn row_to_hub(row: &Row) -> Entity {
    let mut item = Entity::new(EntityKind::Rom);
    item.set_opt(rom::NAME, row.name.clone());
    item.set_opt(rom::SHA256, row.sha256.clone());
    item.set_opt(rom::SHA1, row.sha1.clone());
    item.set_opt(rom::MD5, row.md5.clone());
    item.set_opt(rom::CRC, row.crc32.clone());
    item.set_opt(rom::SIZE, row.size.clone());

    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, row.name.clone());
    entity.set_entities(machine::ROM, vec![item]);
    entity
}

/// The SMDB name column is a path, so the ROM name is what gets written.
fn row_from_hub(item: &Entity) -> Row {
    Row {
        sha256: item.read_string(rom::SHA256),
        name: item.read_string(rom::NAME),
        sha1: item.read_string(rom::SHA1),
        md5: item.read_string(rom::MD5),
        crc32: item.read_string(rom::CRC),
        size: item.read_string(rom::SIZE),
    }
}

#[cfg(test)]
#[path = "tests/everdrive_smdb_tests.rs"]
mod tests;
