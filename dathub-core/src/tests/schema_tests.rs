use super::*;
use crate::keys::{header, machine};

fn named(kind: EntityKind, key: &str, name: &str) -> Entity {
    let mut entity = Entity::new(kind);
    entity.set(key, name);
    entity
}

#[test]
fn metadata_file_exposes_header_and_machines() {
    let file = MetadataFile::new(
        Some(named(EntityKind::Header, header::NAME, "dat")),
        vec![
            named(EntityKind::Machine, machine::NAME, "one"),
            named(EntityKind::Machine, machine::NAME, "two"),
        ],
    );

    assert_eq!(file.header().unwrap().read_str(header::NAME), Some("dat"));
    let names: Vec<_> = file
        .machines()
        .iter()
        .map(|m| m.read_str(machine::NAME))
        .collect();
    assert_eq!(names, vec![Some("one"), Some("two")]);
}

#[test]
fn empty_metadata_file_has_no_keys() {
    let file = MetadataFile::new(None, Vec::new());
    assert!(file.header().is_none());
    assert!(file.machines().is_empty());
    assert!(file.as_entity().is_empty());
}

#[test]
fn from_entity_requires_root_kind() {
    assert!(MetadataFile::from_entity(Entity::new(EntityKind::MetadataFile)).is_some());
    assert!(MetadataFile::from_entity(Entity::new(EntityKind::Machine)).is_none());
}

#[test]
fn dat_item_kinds() {
    assert!(EntityKind::Rom.is_dat_item());
    assert!(EntityKind::BiosSet.is_dat_item());
    assert!(!EntityKind::Driver.is_dat_item());
    assert!(!EntityKind::Machine.is_dat_item());
}

#[test]
fn kind_display_uses_variant_name() {
    assert_eq!(EntityKind::DipSwitch.to_string(), "DipSwitch");
}
