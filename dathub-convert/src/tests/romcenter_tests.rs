use super::*;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn row(game: &str, rom_name: &str) -> Rom {
    Rom {
        parent_name: s("parent"),
        parent_description: None,
        game_name: s(game),
        game_description: s("A Game"),
        rom_name: s(rom_name),
        rom_crc: s("deadbeef"),
        rom_size: s("1024"),
        rom_of: s("parent"),
        merge_name: s("merged.bin"),
    }
}

#[test]
fn test_full_round_trip() {
    let file = RomCenterFile {
        credits: Some(Credits {
            author: s("author"),
            version: s("1.0"),
            email: s("a@b.c"),
            homepage: s("home"),
            url: s("http://example.invalid"),
            date: s("2020-01-01"),
            comment: s("comment"),
        }),
        dat: Some(Dat {
            version: s("2.50"),
            plugin: s("arcade.dll"),
            split: s("yes"),
            merge: s("no"),
        }),
        emulator: Some(Emulator {
            ref_name: s("mame"),
            version: s("0.250"),
        }),
        games: Some(Games {
            rom: vec![row("game", "a.bin"), row("game", "b.bin")],
        }),
    };

    let back = RomCenterFile::from_hub(&file.to_hub(), ());
    assert_eq!(back, file);
}

#[test]
fn test_each_row_is_its_own_machine() {
    let file = RomCenterFile {
        games: Some(Games {
            rom: vec![row("game", "a.bin"), row("game", "b.bin")],
        }),
        ..Default::default()
    };

    let hub = file.to_hub();
    assert_eq!(hub.machines().len(), 2);
    for m in hub.machines() {
        assert_eq!(m.read_all(machine::ROM, EntityKind::Rom).len(), 1);
    }
}

#[test]
fn test_garbage_split_and_merge_become_no() {
    let file = RomCenterFile {
        dat: Some(Dat {
            split: s("XXXXXX"),
            merge: s("XXXXXX"),
            ..Default::default()
        }),
        ..Default::default()
    };

    let back = RomCenterFile::from_hub(&file.to_hub(), ());
    let dat = back.dat.unwrap();
    assert_eq!(dat.split.as_deref(), Some("no"));
    assert_eq!(dat.merge.as_deref(), Some("no"));
}

#[test]
fn test_one_becomes_yes() {
    let file = RomCenterFile {
        dat: Some(Dat {
            split: s("1"),
            merge: s("0"),
            ..Default::default()
        }),
        ..Default::default()
    };

    let back = RomCenterFile::from_hub(&file.to_hub(), ());
    let dat = back.dat.unwrap();
    assert_eq!(dat.split.as_deref(), Some("yes"));
    assert_eq!(dat.merge.as_deref(), Some("no"));
}

#[test]
fn test_parent_description_is_dropped() {
    let mut original = row("game", "a.bin");
    original.parent_description = s("Parent Game");
    let file = RomCenterFile {
        games: Some(Games {
            rom: vec![original.clone()],
        }),
        ..Default::default()
    };

    let back = RomCenterFile::from_hub(&file.to_hub(), ());
    let rows = back.games.unwrap().rom;
    assert_eq!(rows[0].parent_description, None);
    assert_eq!(rows[0].game_name, original.game_name);
}

#[test]
fn test_grouped_machine_fans_out_into_rows() {
    let mut first = Entity::new(EntityKind::Rom);
    first.set(rom::NAME, "one.bin");
    let mut second = Entity::new(EntityKind::Rom);
    second.set(rom::NAME, "two.bin");
    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::NAME, "grouped");
    game.set(machine::DESCRIPTION, "Grouped");
    game.set(machine::ROM, vec![first, second]);

    let back = RomCenterFile::from_hub(&MetadataFile::new(None, vec![game]), ());
    let rows = back.games.unwrap().rom;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.game_name.as_deref() == Some("grouped")));
    assert_eq!(rows[0].rom_name.as_deref(), Some("one.bin"));
    assert_eq!(rows[1].rom_name.as_deref(), Some("two.bin"));
}

#[test]
fn test_empty_file_round_trip() {
    let back = RomCenterFile::from_hub(&RomCenterFile::default().to_hub(), ());
    assert_eq!(back, RomCenterFile::default());
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<RomCenterFile>(None).is_none());
    assert!(crate::from_hub::<RomCenterFile>(None, ()).is_none());
}
