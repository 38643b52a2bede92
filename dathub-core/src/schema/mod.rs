//! The hub schema: entity kinds, canonical keys and the root document.

pub mod keys;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Every shape an [`Entity`] can take in the hub.
///
/// Nested readers check this tag, so a caller asking for a `Rom` never gets
/// back a `Disk` that happens to live under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    MetadataFile,
    Header,
    Machine,

    // DatItems
    Rom,
    Disk,
    Media,
    Sample,
    Archive,
    Release,
    BiosSet,

    // Machine descriptors
    Adjuster,
    Analog,
    Chip,
    Condition,
    ConfLocation,
    ConfSetting,
    Configuration,
    Control,
    Device,
    DeviceRef,
    DipLocation,
    DipSwitch,
    DipValue,
    Display,
    Driver,
    Extension,
    Feature,
    Input,
    Instance,
    Port,
    RamOption,
    Slot,
    SlotOption,
    SoftwareList,
    Sound,
    Video,

    // Software-list hierarchy
    Info,
    SharedFeat,
    Part,
    DataArea,
    DiskArea,

    // OpenMSX
    Dump,
    Original,

    // Logiqx
    Trurip,

    // OfflineList header sub-trees
    Infos,
    InfoItem,
    NewDat,
    DatUrl,
    Search,
    To,
    Find,
    Images,
    Image,
}

impl EntityKind {
    /// The DatItem kinds: entities that describe a cataloged file or unit.
    pub const DAT_ITEMS: &'static [EntityKind] = &[
        Self::Rom,
        Self::Disk,
        Self::Media,
        Self::Sample,
        Self::Archive,
        Self::Release,
        Self::BiosSet,
    ];

    pub fn is_dat_item(&self) -> bool {
        Self::DAT_ITEMS.contains(self)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The root of a hub document: at most one header and zero or more machines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataFile(Entity);

impl MetadataFile {
    pub fn new(header: Option<Entity>, machines: Vec<Entity>) -> Self {
        let mut root = Entity::new(EntityKind::MetadataFile);
        root.set_entity(keys::metadata_file::HEADER, header);
        root.set_entities(keys::metadata_file::MACHINE, machines);
        Self(root)
    }

    /// Wrap an existing entity, provided it is a `MetadataFile`.
    pub fn from_entity(entity: Entity) -> Option<Self> {
        entity.is_kind(EntityKind::MetadataFile).then_some(Self(entity))
    }

    pub fn header(&self) -> Option<&Entity> {
        self.0.read(keys::metadata_file::HEADER, EntityKind::Header)
    }

    /// Machines in document order.
    pub fn machines(&self) -> Vec<&Entity> {
        self.0.read_all(keys::metadata_file::MACHINE, EntityKind::Machine)
    }

    pub fn as_entity(&self) -> &Entity {
        &self.0
    }

    pub fn into_entity(self) -> Entity {
        self.0
    }
}

impl From<MetadataFile> for Entity {
    fn from(file: MetadataFile) -> Self {
        file.0
    }
}

#[cfg(test)]
#[path = "../tests/schema_tests.rs"]
mod tests;
