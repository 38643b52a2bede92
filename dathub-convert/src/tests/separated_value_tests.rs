use super::*;

const X: &str = "XXXXXX";

fn x() -> Option<String> {
    Some(X.to_string())
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn disk_row() -> Row {
    Row {
        file_name: x(),
        internal_name: x(),
        description: x(),
        game_name: x(),
        game_description: x(),
        r#type: s("disk"),
        disk_name: x(),
        md5: x(),
        sha1: x(),
        status: x(),
        ..Default::default()
    }
}

fn media_row() -> Row {
    Row {
        file_name: x(),
        internal_name: x(),
        description: x(),
        game_name: x(),
        game_description: x(),
        r#type: s("media"),
        disk_name: x(),
        md5: x(),
        sha1: x(),
        sha256: x(),
        spamsum: x(),
        ..Default::default()
    }
}

fn rom_row() -> Row {
    Row {
        file_name: x(),
        internal_name: x(),
        description: x(),
        game_name: x(),
        game_description: x(),
        r#type: s("rom"),
        rom_name: x(),
        size: x(),
        crc: x(),
        md5: x(),
        sha1: x(),
        sha256: x(),
        sha384: x(),
        sha512: x(),
        spamsum: x(),
        status: x(),
        ..Default::default()
    }
}

#[test]
fn test_disk_media_rom_rows_round_trip() {
    let file = SeparatedValueFile {
        header: vec!["File Name".to_string(), "Type".to_string()],
        rows: vec![disk_row(), media_row(), rom_row()],
    };

    let hub = file.to_hub();
    let machines = hub.machines();
    assert_eq!(machines.len(), 3);
    assert_eq!(machines[0].read_all(machine::DISK, EntityKind::Disk).len(), 1);
    assert_eq!(machines[1].read_all(machine::MEDIA, EntityKind::Media).len(), 1);
    assert_eq!(machines[2].read_all(machine::ROM, EntityKind::Rom).len(), 1);

    let back = SeparatedValueFile::from_hub(&hub, ());
    assert_eq!(back, file);
}

#[test]
fn test_first_row_supplies_file_columns() {
    let file = SeparatedValueFile {
        header: Vec::new(),
        rows: vec![rom_row()],
    };

    let hub = file.to_hub();
    let header_entity = hub.header().unwrap();
    assert_eq!(header_entity.read_str(header::FILE_NAME), Some(X));
    assert_eq!(header_entity.read_str(header::NAME), Some(X));
    assert_eq!(header_entity.read_str(header::DESCRIPTION), Some(X));
    assert!(!header_entity.contains(header::HEADER_ROW));
}

#[test]
fn test_type_is_case_insensitive() {
    let mut row = rom_row();
    row.r#type = s("ROM");
    let file = SeparatedValueFile {
        header: Vec::new(),
        rows: vec![row],
    };

    let back = SeparatedValueFile::from_hub(&file.to_hub(), ());
    assert_eq!(back.rows[0].r#type.as_deref(), Some("rom"));
    assert_eq!(back.rows[0].rom_name, x());
}

#[test]
fn test_unknown_type_keeps_machine_without_items() {
    let mut row = rom_row();
    row.r#type = s("sample");
    let file = SeparatedValueFile {
        header: Vec::new(),
        rows: vec![row],
    };

    let hub = file.to_hub();
    let machines = hub.machines();
    assert_eq!(machines.len(), 1);
    assert!(!machines[0].contains(machine::ROM));
    assert!(SeparatedValueFile::from_hub(&hub, ()).rows.is_empty());
}

#[test]
fn test_grouped_machine_fans_out_roms_then_disks() {
    let mut first = Entity::new(EntityKind::Rom);
    first.set(rom::NAME, "a.bin");
    let mut second = Entity::new(EntityKind::Disk);
    second.set(disk::NAME, "b.chd");
    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::NAME, "game");
    game.set(machine::DISK, vec![second]);
    game.set(machine::ROM, vec![first]);

    let back = SeparatedValueFile::from_hub(&MetadataFile::new(None, vec![game]), ());
    let kinds: Vec<_> = back.rows.iter().map(|r| r.r#type.as_deref()).collect();
    assert_eq!(kinds, vec![Some("rom"), Some("disk")]);
    assert!(back.rows.iter().all(|r| r.game_name.as_deref() == Some("game")));
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<SeparatedValueFile>(None).is_none());
    assert!(crate::from_hub::<SeparatedValueFile>(None, ()).is_none());
}
