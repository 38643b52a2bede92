//! openMSX software database adapter.
//!
//! A dump holds one of three structurally identical ROM elements. The hub
//! stores the ROM under the key naming its variant (`rom`, `megarom`,
//! `sccpluscart`) and the variant is recovered from whichever key is present.

use dathub_core::keys::{dump, header, machine, original, rom};
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::openmsx::{Dump, DumpRom, Original, RomBase, Software, SoftwareDb};

use crate::HubConvert;
use crate::util::non_empty;

impl HubConvert for SoftwareDb {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut hub_header = Entity::new(EntityKind::Header);
        hub_header.set_opt(header::TIMESTAMP, self.timestamp.clone());

        let machines = self.software.iter().map(software_to_hub).collect();
        MetadataFile::new(non_empty(hub_header), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        SoftwareDb {
            timestamp: hub.header().and_then(|h| h.read_string(header::TIMESTAMP)),
            software: hub.machines().into_iter().map(software_from_hub).collect(),
        }
    }
}

fn software_to_hub(software: &Software) -> Entity {
    let mut entity = Entity::new(EntityKind::Machine);
    entity.set_opt(machine::NAME, software.title.clone());
    entity.set_opt(machine::GEN_MSX_ID, software.genmsxid.clone());
    entity.set_opt(machine::SYSTEM, software.system.clone());
    entity.set_opt(machine::MANUFACTURER, software.company.clone());
    entity.set_opt(machine::YEAR, software.year.clone());
    entity.set_opt(machine::COUNTRY, software.country.clone());
    entity.set_entities(machine::DUMP, software.dump.iter().map(dump_to_hub).collect());
    entity
}

fn dump_to_hub(item: &Dump) -> Entity {
    let mut entity = Entity::new(EntityKind::Dump);
    entity.set_entity(
        dump::ORIGINAL,
        item.original.as_ref().map(|o| {
            let mut original_entity = Entity::new(EntityKind::Original);
            original_entity.set_opt(original::VALUE, o.value.clone());
            original_entity.set_opt(original::CONTENT, o.content.clone());
            original_entity
        }),
    );

    if let Some(dump_rom) = &item.rom {
        let key = match dump_rom {
            DumpRom::Rom(_) => dump::ROM,
            DumpRom::MegaRom(_) => dump::MEGA_ROM,
            DumpRom::SccPlusCart(_) => dump::SCC_PLUS_CART,
        };
        entity.set(key, rom_to_hub(dump_rom.base()));
    }
    entity
}

fn rom_to_hub(base: &RomBase) -> Entity {
    let mut entity = Entity::new(EntityKind::Rom);
    entity.set_opt(rom::START, base.start.clone());
    entity.set_opt(rom::OPENMSX_TYPE, base.r#type.clone());
    entity.set_opt(rom::SHA1, base.hash.clone());
    entity.set_opt(rom::REMARK, base.remark.clone());
    entity
}

fn software_from_hub(entity: &Entity) -> Software {
    Software {
        title: entity.read_string(machine::NAME),
        genmsxid: entity.read_string(machine::GEN_MSX_ID),
        system: entity.read_string(machine::SYSTEM),
        company: entity.read_string(machine::MANUFACTURER),
        year: entity.read_string(machine::YEAR),
        country: entity.read_string(machine::COUNTRY),
        dump: entity
            .read_all(machine::DUMP, EntityKind::Dump)
            .into_iter()
            .map(dump_from_hub)
            .collect(),
    }
}

fn dump_from_hub(entity: &Entity) -> Dump {
    Dump {
        original: entity
            .read(dump::ORIGINAL, EntityKind::Original)
            .map(|o| Original {
                value: o.read_string(original::VALUE),
                content: o.read_string(original::CONTENT),
            }),
        rom: dump_rom_from_hub(entity),
    }
}

/// Resolve the ROM variant by key presence: `rom`, then `megarom`, then
/// `sccpluscart`.
fn dump_rom_from_hub(entity: &Entity) -> Option<DumpRom> {
    let plain = entity.read(dump::ROM, EntityKind::Rom);
    let mega_rom = entity.read(dump::MEGA_ROM, EntityKind::Rom);
    let scc_plus_cart = entity.read(dump::SCC_PLUS_CART, EntityKind::Rom);

    let present = [plain, mega_rom, scc_plus_cart]
        .iter()
        .filter(|r| r.is_some())
        .count();
    if present > 1 {
        log::debug!("openMSX dump has {present} ROM variants; keeping the first by precedence");
    }

    if let Some(e) = plain {
        Some(DumpRom::Rom(rom_from_hub(e)))
    } else if let Some(e) = mega_rom {
        Some(DumpRom::MegaRom(rom_from_hub(e)))
    } else {
        scc_plus_cart.map(|e| DumpRom::SccPlusCart(rom_from_hub(e)))
    }
}

fn rom_from_hub(entity: &Entity) -> RomBase {
    RomBase {
        start: entity.read_string(rom::START),
        r#type: entity.read_string(rom::OPENMSX_TYPE),
        hash: entity.read_string(rom::SHA1),
        remark: entity.read_string(rom::REMARK),
    }
}

#[cfg(test)]
#[path = "tests/openmsx_tests.rs"]
mod tests;
