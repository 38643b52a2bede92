//! MAME `-listroms` adapter.
//!
//! A set names either a driver or a device. The hub keeps a single machine
//! name plus `isdevice = "yes"` for devices. Rows with a size are ROMs, rows
//! without one are disks.

use dathub_core::keys::{disk, machine, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::listrom::{MetadataFile as ListromFile, Row, Set};

use crate::HubConvert;

const STATUS_NODUMP: &str = "nodump";
const STATUS_BADDUMP: &str = "baddump";

impl HubConvert for ListromFile {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        MetadataFile::new(None, self.sets.iter().map(set_to_hub).collect())
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        ListromFile {
            sets: hub.machines().into_iter().map(set_from_hub).collect(),
        }
    }
}

fn set_to_hub(set: &Set) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    match (&set.device, &set.driver) {
        (Some(device), _) => {
            if set.driver.is_some() {
                log::debug!("Listrom set names both a driver and device {device:?}; using the device");
            }
            entity.set(machine::NAME, device.clone());
            entity.set(machine::IS_DEVICE, "yes");
        }
        (None, Some(driver)) => entity.set(machine::NAME, driver.clone()),
        (None, None) => {}
    }

    let mut roms = Vec::new();
    let mut disks = Vec::new();
    for row in &set.rows {
        if row.size.is_some() {
            roms.push(rom_to_hub(row));
        } else {
            disks.push(disk_to_hub(row));
        }
    }
    entity.set_entities(machine::ROM, roms);
    entity.set_entities(machine::DISK, disks);
    entity
}

fn row_status(row: &Row) -> Option<&'static str> {
    if row.no_good_dump_known {
        Some(STATUS_NODUMP)
    } else if row.bad {
        Some(STATUS_BADDUMP)
    } else {
        None
    }
}

fn rom_to_hub(row: &Row) -> Entity {
    let mut entity = Entity::new(EntityKind::Rom);
    entity.set_opt(rom::NAME, row.name.clone());
    entity.set_opt(rom::SIZE, row.size.clone());
    entity.set_opt(rom::CRC, row.crc.clone());
    entity.set_opt(rom::SHA1, row.sha1.clone());
    entity.set_opt(rom::STATUS, row_status(row));
    entity
}

fn disk_to_hub(row: &Row) -> Entity {
    let mut entity = Entity::new(EntityKind::Disk);
    entity.set_opt(disk::NAME, row.name.clone());
    entity.set_opt(disk::SHA1, row.sha1.clone());
    entity.set_opt(disk::STATUS, row_status(row));
    entity
}

fn set_from_hub(entity: &Entity) -> Set {
    let name = entity.read_string(machine::NAME);
    let is_device = entity.read_str(machine::IS_DEVICE) == Some("yes");

    let mut rows: Vec<Row> = entity
        .read_all(machine::ROM, EntityKind::Rom)
        .into_iter()
        .map(|item| {
            let status = item.read_str(rom::STATUS);
            Row {
                name: item.read_string(rom::NAME),
                size: item.read_string(rom::SIZE),
                bad: status == Some(STATUS_BADDUMP),
                crc: item.read_string(rom::CRC),
                sha1: item.read_string(rom::SHA1),
                no_good_dump_known: status == Some(STATUS_NODUMP),
            }
        })
        .collect();

    rows.extend(
        entity
            .read_all(machine::DISK, EntityKind::Disk)
            .into_iter()
            .map(|item| {
                let status = item.read_str(disk::STATUS);
                Row {
                    name: item.read_string(disk::NAME),
                    size: None,
                    bad: status == Some(STATUS_BADDUMP),
                    crc: None,
                    sha1: item.read_string(disk::SHA1),
                    no_good_dump_known: status == Some(STATUS_NODUMP),
                }
            }),
    );

    if is_device {
        Set {
            driver: None,
            device: name,
            rows,
        }
    } else {
        Set {
            driver: name,
            device: None,
            rows,
        }
    }
}

#[cfg(test)]
#[path = "tests/listrom_tests.rs"]
mod tests;
