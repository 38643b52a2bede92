//! MAME software-list adapter. Items stay inside the part hierarchy.

use dathub_core::keys::{
    data_area, dip_switch, dip_value, disk, disk_area, feature, header, info, machine, part, rom,
    shared_feat,
};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::software_list::{
    DataArea, DipSwitch, DipValue, Disk, DiskArea, Feature, Info, Part, Rom, SharedFeat, Software,
    SoftwareList,
};

use crate::HubConvert;
use crate::util::non_empty;

impl HubConvert for SoftwareList {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut hub_header = Entity::new(EntityKind::Header);
        hub_header.set_opt(header::NAME, self.name.clone());
        hub_header.set_opt(header::DESCRIPTION, self.description.clone());
        hub_header.set_opt(header::NOTES, self.notes.clone());

        let machines = self.software.iter().map(software_to_hub).collect();
        MetadataFile::new(non_empty(hub_header), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        let hub_header = hub.header();
        let read = |key| hub_header.and_then(|h| h.read_string(key));
        SoftwareList {
            name: read(header::NAME),
            description: read(header::DESCRIPTION),
            notes: read(header::NOTES),
            software: hub.machines().into_iter().map(software_from_hub).collect(),
        }
    }
}

/// Map each `(name, value)` pair into an entity of `kind`.
fn pairs_to_hub<'a>(
    kind: EntityKind,
    name_key: &str,
    value_key: &str,
    pairs: impl Iterator<Item = (&'a Option<String>, &'a Option<String>)>,
) -> Vec<Entity> {
    pairs
        .map(|(name, value)| {
            let mut entity = Entity::new(kind);
            entity.set_opt(name_key, name.clone());
            entity.set_opt(value_key, value.clone());
            entity
        })
        .collect()
}

fn software_to_hub(software: &Software) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, software.name.clone());
    entity.set_opt(machine::CLONE_OF, software.clone_of.clone());
    entity.set_opt(machine::SUPPORTED, software.supported.clone());
    entity.set_opt(machine::DESCRIPTION, software.description.clone());
    entity.set_opt(machine::YEAR, software.year.clone());
    entity.set_opt(machine::PUBLISHER, software.publisher.clone());
    entity.set_opt(machine::NOTES, software.notes.clone());
    entity.set_entities(
        machine::INFO,
        pairs_to_hub(
            EntityKind::Info,
            info::NAME,
            info::VALUE,
            software.info.iter().map(|i| (&i.name, &i.value)),
        ),
    );
    entity.set_entities(
        machine::SHARED_FEAT,
        pairs_to_hub(
            EntityKind::SharedFeat,
            shared_feat::NAME,
            shared_feat::VALUE,
            software.shared_feat.iter().map(|f| (&f.name, &f.value)),
        ),
    );
    entity.set_entities(machine::PART, software.part.iter().map(part_to_hub).collect());
    entity
}

fn part_to_hub(value: &Part) -> Entity {
    let mut entity = Entity::new(EntityKind::Part);
    entity.set_opt(part::NAME, value.name.clone());
    entity.set_opt(part::INTERFACE, value.interface.clone());
    entity.set_entities(
        part::FEATURE,
        pairs_to_hub(
            EntityKind::Feature,
            feature::NAME,
            feature::VALUE,
            value.feature.iter().map(|f| (&f.name, &f.value)),
        ),
    );
    entity.set_entities(
        part::DATA_AREA,
        value.data_area.iter().map(data_area_to_hub).collect(),
    );
    entity.set_entities(
        part::DISK_AREA,
        value.disk_area.iter().map(disk_area_to_hub).collect(),
    );
    entity.set_entities(
        part::DIP_SWITCH,
        value.dip_switch.iter().map(dip_switch_to_hub).collect(),
    );
    entity
}

fn data_area_to_hub(area: &DataArea) -> Entity {
    let mut entity = Entity::new(EntityKind::DataArea);
    entity.set_opt(data_area::NAME, area.name.clone());
    entity.set_opt(data_area::SIZE, area.size.clone());
    entity.set_opt(data_area::WIDTH, area.width.clone());
    entity.set_opt(data_area::ENDIANNESS, area.endianness.clone());
    entity.set_entities(
        data_area::ROM,
        area.rom
            .iter()
            .map(|r| {
                let mut rom_entity = Entity::new(EntityKind::Rom);
                rom_entity.set_opt(rom::NAME, r.name.clone());
                rom_entity.set_opt(rom::SIZE, r.size.clone());
                rom_entity.set_opt(rom::LENGTH, r.length.clone());
                rom_entity.set_opt(rom::CRC, r.crc.clone());
                rom_entity.set_opt(rom::SHA1, r.sha1.clone());
                rom_entity.set_opt(rom::OFFSET, r.offset.clone());
                rom_entity.set_opt(rom::VALUE, r.value.clone());
                rom_entity.set_opt(rom::STATUS, r.status.clone());
                rom_entity.set_opt(rom::LOAD_FLAG, r.load_flag.clone());
                rom_entity
            })
            .collect(),
    );
    entity
}

fn disk_area_to_hub(area: &DiskArea) -> Entity {
    let mut entity = Entity::new(EntityKind::DiskArea);
    entity.set_opt(disk_area::NAME, area.name.clone());
    entity.set_entities(
        disk_area::DISK,
        area.disk
            .iter()
            .map(|d| {
                let mut disk_entity = Entity::new(EntityKind::Disk);
                disk_entity.set_opt(disk::NAME, d.name.clone());
                disk_entity.set_opt(disk::MD5, d.md5.clone());
                disk_entity.set_opt(disk::SHA1, d.sha1.clone());
                disk_entity.set_opt(disk::STATUS, d.status.clone());
                disk_entity.set_opt(disk::WRITABLE, d.writeable.clone());
                disk_entity
            })
            .collect(),
    );
    entity
}

fn dip_switch_to_hub(switch: &DipSwitch) -> Entity {
    let mut entity = Entity::new(EntityKind::DipSwitch);
    entity.set_opt(dip_switch::NAME, switch.name.clone());
    entity.set_opt(dip_switch::TAG, switch.tag.clone());
    entity.set_opt(dip_switch::MASK, switch.mask.clone());
    entity.set_entities(
        dip_switch::DIP_VALUE,
        switch
            .dip_value
            .iter()
            .map(|v| {
                let mut value_entity = Entity::new(EntityKind::DipValue);
                value_entity.set_opt(dip_value::NAME, v.name.clone());
                value_entity.set_opt(dip_value::VALUE, v.value.clone());
                value_entity.set_opt(dip_value::DEFAULT, v.default.clone());
                value_entity
            })
            .collect(),
    );
    entity
}

// -- From hub --

fn software_from_hub(entity: &Entity) -> Software {
    Software {
        name: entity.read_string(machine::NAME),
        clone_of: entity.read_string(machine::CLONE_OF),
        supported: entity.read_string(machine::SUPPORTED),
        description: entity.read_string(machine::DESCRIPTION),
        year: entity.read_string(machine::YEAR),
        publisher: entity.read_string(machine::PUBLISHER),
        notes: entity.read_string(machine::NOTES),
        info: entity
            .read_all(machine::INFO, EntityKind::Info)
            .into_iter()
            .map(|e| Info {
                name: e.read_string(info::NAME),
                value: e.read_string(info::VALUE),
            })
            .collect(),
        shared_feat: entity
            .read_all(machine::SHARED_FEAT, EntityKind::SharedFeat)
            .into_iter()
            .map(|e| SharedFeat {
                name: e.read_string(shared_feat::NAME),
                value: e.read_string(shared_feat::VALUE),
            })
            .collect(),
        part: entity
            .read_all(machine::PART, EntityKind::Part)
            .into_iter()
            .map(part_from_hub)
            .collect(),
    }
}

fn part_from_hub(entity: &Entity) -> Part {
    Part {
        name: entity.read_string(part::NAME),
        interface: entity.read_string(part::INTERFACE),
        feature: entity
            .read_all(part::FEATURE, EntityKind::Feature)
            .into_iter()
            .map(|e| Feature {
                name: e.read_string(feature::NAME),
                value: e.read_string(feature::VALUE),
            })
            .collect(),
        data_area: entity
            .read_all(part::DATA_AREA, EntityKind::DataArea)
            .into_iter()
            .map(data_area_from_hub)
            .collect(),
        disk_area: entity
            .read_all(part::DISK_AREA, EntityKind::DiskArea)
            .into_iter()
            .map(disk_area_from_hub)
            .collect(),
        dip_switch: entity
            .read_all(part::DIP_SWITCH, EntityKind::DipSwitch)
            .into_iter()
            .map(dip_switch_from_hub)
            .collect(),
    }
}

fn data_area_from_hub(entity: &Entity) -> DataArea {
    DataArea {
        name: entity.read_string(data_area::NAME),
        size: entity.read_string(data_area::SIZE),
        width: entity.read_string(data_area::WIDTH),
        endianness: entity.read_string(data_area::ENDIANNESS),
        rom: entity
            .read_all(data_area::ROM, EntityKind::Rom)
            .into_iter()
            .map(|r| Rom {
                name: r.read_string(rom::NAME),
                size: r.read_string(rom::SIZE),
                length: r.read_string(rom::LENGTH),
                crc: r.read_string(rom::CRC),
                sha1: r.read_string(rom::SHA1),
                offset: r.read_string(rom::OFFSET),
                value: r.read_string(rom::VALUE),
                status: r.read_string(rom::STATUS),
                load_flag: r.read_string(rom::LOAD_FLAG),
            })
            .collect(),
    }
}

fn disk_area_from_hub(entity: &Entity) -> DiskArea {
    DiskArea {
        name: entity.read_string(disk_area::NAME),
        disk: entity
            .read_all(disk_area::DISK, EntityKind::Disk)
            .into_iter()
            .map(|d| Disk {
                name: d.read_string(disk::NAME),
                md5: d.read_string(disk::MD5),
                sha1: d.read_string(disk::SHA1),
                status: d.read_string(disk::STATUS),
                writeable: d.read_string(disk::WRITABLE),
            })
            .collect(),
    }
}

fn dip_switch_from_hub(entity: &Entity) -> DipSwitch {
    DipSwitch {
        name: entity.read_string(dip_switch::NAME),
        tag: entity.read_string(dip_switch::TAG),
        mask: entity.read_string(dip_switch::MASK),
        dip_value: entity
            .read_all(dip_switch::DIP_VALUE, EntityKind::DipValue)
            .into_iter()
            .map(|v| DipValue {
                name: v.read_string(dip_value::NAME),
                value: v.read_string(dip_value::VALUE),
                default: v.read_string(dip_value::DEFAULT),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/software_list_tests.rs"]
mod tests;
