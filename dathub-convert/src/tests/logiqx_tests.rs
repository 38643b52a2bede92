use super::*;

const X: &str = "XXXXXX";

fn x() -> Option<String> {
    Some(X.to_string())
}

fn full_game() -> GameBase {
    GameBase {
        name: x(),
        source_file: x(),
        is_bios: x(),
        is_device: x(),
        is_mechanical: x(),
        clone_of: x(),
        rom_of: x(),
        sample_of: x(),
        board: x(),
        rebuild_to: x(),
        id: x(),
        clone_of_id: x(),
        runnable: x(),
        comment: vec![X.to_string(), "second".to_string()],
        description: x(),
        year: x(),
        manufacturer: x(),
        publisher: x(),
        category: vec![X.to_string()],
        trurip: Some(Trurip {
            title_id: x(),
            publisher: x(),
            developer: x(),
            year: x(),
            genre: x(),
            subgenre: x(),
            ratings: x(),
            score: x(),
            players: x(),
            enabled: x(),
            crc: x(),
            source: x(),
            clone_of: x(),
            related_to: x(),
        }),
        release: vec![Release {
            name: x(),
            region: x(),
            language: x(),
            date: x(),
            default: x(),
        }],
        bios_set: vec![BiosSet {
            name: x(),
            description: x(),
            default: x(),
        }],
        rom: vec![Rom {
            name: x(),
            size: x(),
            crc: x(),
            md5: x(),
            sha1: x(),
            sha256: x(),
            sha384: x(),
            sha512: x(),
            spamsum: x(),
            xxh3_64: x(),
            xxh3_128: x(),
            merge: x(),
            status: x(),
            serial: x(),
            header: x(),
            date: x(),
            inverted: x(),
            mia: x(),
        }],
        disk: vec![Disk {
            name: x(),
            md5: x(),
            sha1: x(),
            merge: x(),
            status: x(),
            region: x(),
        }],
        media: vec![Media {
            name: x(),
            md5: x(),
            sha1: x(),
            sha256: x(),
            spamsum: x(),
        }],
        device_ref: vec![DeviceRef { name: x() }],
        sample: vec![Sample { name: x() }],
        archive: vec![Archive { name: x() }],
        driver: Some(Driver {
            status: x(),
            emulation: x(),
            cocktail: x(),
            save_state: x(),
            requires_artwork: x(),
            unofficial: x(),
            no_sound_hardware: x(),
            incomplete: x(),
        }),
        software_list: vec![SoftwareList {
            tag: x(),
            name: x(),
            status: x(),
            filter: x(),
        }],
    }
}

fn full_header() -> Header {
    Header {
        id: x(),
        name: x(),
        description: x(),
        root_dir: x(),
        category: x(),
        version: x(),
        date: x(),
        author: x(),
        email: x(),
        homepage: x(),
        url: x(),
        comment: x(),
        r#type: x(),
        clrmamepro: Some(ClrMamePro {
            header: x(),
            force_merging: x(),
            force_nodump: x(),
            force_packing: x(),
        }),
        romcenter: Some(RomCenter {
            plugin: x(),
            rom_mode: x(),
            bios_mode: x(),
            sample_mode: x(),
            lock_rom_mode: x(),
            lock_bios_mode: x(),
            lock_sample_mode: x(),
        }),
    }
}

fn named_game(name: &str) -> GameRecord<GameBase> {
    GameRecord::Game(GameBase {
        name: Some(name.to_string()),
        ..Default::default()
    })
}

// -- Round trips --

#[test]
fn test_full_game_round_trip() {
    let datafile = Datafile {
        build: x(),
        debug: x(),
        schema_location: x(),
        header: Some(full_header()),
        games: vec![GameRecord::Game(full_game())],
        dirs: Vec::new(),
    };

    let back = Datafile::from_hub(&datafile.to_hub(), RecordKind::Game);
    assert_eq!(back, datafile);
}

#[test]
fn test_machine_variant_selects_machine_records() {
    let datafile = Datafile {
        games: vec![GameRecord::Machine(full_game())],
        ..Default::default()
    };

    let back = Datafile::from_hub(&datafile.to_hub(), RecordKind::Machine);
    assert_eq!(back, datafile);
    assert_eq!(back.games[0].kind(), RecordKind::Machine);

    let as_games = Datafile::from_hub(&datafile.to_hub(), RecordKind::Game);
    assert_eq!(as_games.games[0].kind(), RecordKind::Game);
    assert_eq!(as_games.games[0].base(), &full_game());
}

#[test]
fn test_game_order_is_preserved() {
    let datafile = Datafile {
        games: vec![named_game("b"), named_game("a"), named_game("c")],
        ..Default::default()
    };

    let back = Datafile::from_hub(&datafile.to_hub(), RecordKind::Game);
    let names: Vec<_> = back
        .games
        .iter()
        .map(|g| g.base().name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("b"), Some("a"), Some("c")]);
}

// -- Empty and absent data --

#[test]
fn test_empty_datafile_has_no_header() {
    let hub = Datafile::default().to_hub();
    assert!(hub.header().is_none());
    assert!(hub.machines().is_empty());

    let back = Datafile::from_hub(&hub, RecordKind::Game);
    assert_eq!(back, Datafile::default());
}

#[test]
fn test_empty_sub_blocks_do_not_appear() {
    let datafile = Datafile {
        header: Some(Header {
            name: Some("dat".to_string()),
            clrmamepro: Some(ClrMamePro::default()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let back = Datafile::from_hub(&datafile.to_hub(), RecordKind::Game);
    let header = back.header.unwrap();
    assert_eq!(header.name.as_deref(), Some("dat"));
    assert!(header.clrmamepro.is_none());
    assert!(header.romcenter.is_none());
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<Datafile>(None).is_none());
    assert!(crate::from_hub::<Datafile>(None, RecordKind::Game).is_none());
}

// -- Directories --

#[test]
fn test_nested_dir_flattens_to_backslash_path() {
    let datafile = Datafile {
        dirs: vec![Dir {
            name: Some("Dir".to_string()),
            dirs: vec![Dir {
                name: Some("Subdir".to_string()),
                dirs: Vec::new(),
                games: vec![named_game("Game")],
            }],
            games: Vec::new(),
        }],
        ..Default::default()
    };

    let hub = datafile.to_hub();
    let machines = hub.machines();
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[0].read_str(machine::NAME), Some("Dir\\Subdir\\Game"));

    let back = Datafile::from_hub(&hub, RecordKind::Game);
    assert!(back.dirs.is_empty());
    assert_eq!(back.games.len(), 1);
    assert_eq!(
        back.games[0].base().name.as_deref(),
        Some("Dir\\Subdir\\Game")
    );
}

#[test]
fn test_top_level_games_come_before_dir_games() {
    let datafile = Datafile {
        games: vec![named_game("top")],
        dirs: vec![Dir {
            name: Some("Dir".to_string()),
            dirs: Vec::new(),
            games: vec![named_game("a"), named_game("b")],
        }],
        ..Default::default()
    };

    let hub = datafile.to_hub();
    let names: Vec<_> = hub
        .machines()
        .iter()
        .map(|m| m.read_string(machine::NAME))
        .collect();
    assert_eq!(
        names,
        vec![
            Some("top".to_string()),
            Some("Dir\\a".to_string()),
            Some("Dir\\b".to_string()),
        ]
    );
}

// -- Hub tolerance --

#[test]
fn test_scalar_comment_reads_as_one_element_list() {
    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::NAME, "g");
    game.set(machine::COMMENT, "just one");
    let hub = MetadataFile::new(None, vec![game]);

    let back = Datafile::from_hub(&hub, RecordKind::Game);
    assert_eq!(back.games[0].base().comment, vec!["just one".to_string()]);
}

#[test]
fn test_foreign_kinds_under_rom_key_are_skipped() {
    let mut rom = Entity::new(EntityKind::Rom);
    rom.set(rom::NAME, "good.bin");
    let mut stray = Entity::new(EntityKind::Disk);
    stray.set(disk::NAME, "stray");

    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::ROM, vec![rom, stray]);
    let hub = MetadataFile::new(None, vec![game]);

    let back = Datafile::from_hub(&hub, RecordKind::Game);
    let roms = &back.games[0].base().rom;
    assert_eq!(roms.len(), 1);
    assert_eq!(roms[0].name.as_deref(), Some("good.bin"));
}
