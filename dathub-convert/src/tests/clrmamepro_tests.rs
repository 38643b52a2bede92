use super::*;

const X: &str = "XXXXXX";

fn x() -> Option<String> {
    Some(X.to_string())
}

fn full_game() -> GameBase {
    GameBase {
        name: x(),
        description: x(),
        year: x(),
        manufacturer: x(),
        category: x(),
        clone_of: x(),
        rom_of: x(),
        sample_of: x(),
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
            region: x(),
            flags: x(),
            offs: x(),
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
            flags: x(),
        }],
        media: vec![Media {
            name: x(),
            md5: x(),
            sha1: x(),
            sha256: x(),
            spamsum: x(),
        }],
        sample: vec![Sample { name: x() }],
        archive: vec![Archive { name: x() }],
        chip: vec![Chip {
            r#type: x(),
            name: x(),
            flags: x(),
            clock: x(),
        }],
        video: vec![Video {
            screen: x(),
            orientation: x(),
            x: x(),
            y: x(),
            aspect_x: x(),
            aspect_y: x(),
            freq: x(),
        }],
        sound: Some(Sound { channels: x() }),
        input: Some(Input {
            players: x(),
            control: x(),
            buttons: x(),
            coins: x(),
            tilt: x(),
            service: x(),
        }),
        dip_switch: vec![DipSwitch {
            name: x(),
            entry: vec![X.to_string()],
            default: x(),
        }],
        driver: Some(Driver {
            status: x(),
            color: x(),
            sound: x(),
            palette_size: x(),
            blit: x(),
        }),
    }
}

fn full_header() -> ClrMamePro {
    ClrMamePro {
        name: x(),
        description: x(),
        root_dir: x(),
        category: x(),
        version: x(),
        date: x(),
        author: x(),
        homepage: x(),
        url: x(),
        comment: x(),
        header: x(),
        r#type: x(),
        force_merging: x(),
        force_zipping: x(),
        force_packing: x(),
    }
}

#[test]
fn test_game_round_trip_every_item_kind() {
    let file = CmpFile {
        clrmamepro: Some(full_header()),
        games: vec![GameRecord::Game(full_game())],
    };

    let back = CmpFile::from_hub(&file.to_hub(), RecordKind::Game);
    assert_eq!(back, file);
    assert!(matches!(back.games[0], GameRecord::Game(_)));
}

#[test]
fn test_machine_variant_round_trip() {
    let file = CmpFile {
        clrmamepro: None,
        games: vec![GameRecord::Machine(full_game())],
    };

    let back = CmpFile::from_hub(&file.to_hub(), RecordKind::Machine);
    assert_eq!(back, file);
    assert!(matches!(back.games[0], GameRecord::Machine(_)));
}

#[test]
fn test_video_dimensions_use_shared_keys() {
    let file = CmpFile {
        clrmamepro: None,
        games: vec![GameRecord::Game(GameBase {
            video: vec![Video {
                x: Some("320".to_string()),
                y: Some("240".to_string()),
                freq: Some("60".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        })],
    };

    let hub = file.to_hub();
    let machines = hub.machines();
    let videos = machines[0].read_all(machine::VIDEO, EntityKind::Video);
    assert_eq!(videos[0].read_str(video::WIDTH), Some("320"));
    assert_eq!(videos[0].read_str(video::HEIGHT), Some("240"));
    assert_eq!(videos[0].read_str(video::REFRESH), Some("60"));
}

#[test]
fn test_control_list_from_hub_is_dropped() {
    let mut control = Entity::new(EntityKind::Control);
    control.set(dathub_core::keys::control::TYPE, "joy");
    let mut input_entity = Entity::new(EntityKind::Input);
    input_entity.set(input::PLAYERS, "2");
    input_entity.set(input::CONTROL, vec![control]);

    let mut game = Entity::new(EntityKind::Machine);
    game.set(machine::INPUT, input_entity);
    let hub = MetadataFile::new(None, vec![game]);

    let back = CmpFile::from_hub(&hub, RecordKind::Game);
    let read_back = back.games[0].base().input.as_ref().unwrap();
    assert_eq!(read_back.players.as_deref(), Some("2"));
    assert_eq!(read_back.control, None);
}

#[test]
fn test_empty_file_round_trip() {
    let back = CmpFile::from_hub(&CmpFile::default().to_hub(), RecordKind::Game);
    assert_eq!(back, CmpFile::default());
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<CmpFile>(None).is_none());
    assert!(crate::from_hub::<CmpFile>(None, RecordKind::Machine).is_none());
}
