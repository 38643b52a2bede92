//! M1 DAT adapter. Machines share the Listxml mapping.

use dathub_core::keys::header;
use dathub_core::{Entity, EntityKind, MetadataFile};
use dathub_models::m1::M1;

use crate::HubConvert;
use crate::listxml::{machine_from_hub, machine_to_hub};
use crate::util::non_empty;

impl HubConvert for M1 {
    type Variant = ();

    fn to_hub(&self) -> MetadataFile {
        let mut hub_header = Entity::new(EntityKind::Header);
        hub_header.set_opt(header::VERSION, self.version.clone());

        let machines = self.games.iter().map(machine_to_hub).collect();
        MetadataFile::new(non_empty(hub_header), machines)
    }

    fn from_hub(hub: &MetadataFile, _variant: ()) -> Self {
        M1 {
            version: hub.header().and_then(|h| h.read_string(header::VERSION)),
            games: hub.machines().into_iter().map(machine_from_hub).collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/m1_tests.rs"]
mod tests;
