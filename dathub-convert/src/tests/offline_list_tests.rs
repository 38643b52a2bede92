use super::*;

const X: &str = "XXXXXX";

fn x() -> Option<String> {
    Some(X.to_string())
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn full_item() -> Option<InfoItem> {
    Some(InfoItem {
        visible: x(),
        in_naming_option: x(),
        default: x(),
    })
}

fn full_configuration() -> Configuration {
    Configuration {
        dat_name: x(),
        im_folder: x(),
        dat_version: x(),
        system: x(),
        screenshots_width: x(),
        screenshots_height: x(),
        infos: Some(Infos {
            title: full_item(),
            location: full_item(),
            publisher: full_item(),
            source_rom: full_item(),
            save_type: full_item(),
            rom_size: full_item(),
            release_number: full_item(),
            language_number: full_item(),
            comment: full_item(),
            rom_crc: full_item(),
            im1_crc: full_item(),
            im2_crc: full_item(),
            files: full_item(),
        }),
        can_open: Some(CanOpen {
            extension: vec![".gba".to_string(), ".bin".to_string()],
        }),
        new_dat: Some(NewDat {
            dat_version_url: x(),
            dat_url: Some(DatUrl {
                file_name: x(),
                content: x(),
            }),
            im_url: x(),
        }),
        search: Some(Search {
            to: vec![To {
                value: x(),
                default: x(),
                auto: x(),
                find: vec![Find {
                    operation: x(),
                    value: x(),
                    content: x(),
                }],
            }],
        }),
        rom_title: x(),
    }
}

fn game(rom_size: &str) -> Game {
    Game {
        image_number: s("1"),
        release_number: s("0001"),
        title: s("F-Zero - Maximum Velocity"),
        save_type: s("Eeprom - 4kb"),
        rom_size: s(rom_size),
        publisher: s("Nintendo"),
        location: s("0"),
        source_rom: s("Eurasia"),
        language: s("256"),
        files: Some(Files {
            rom_crc: vec![FileRomCrc {
                extension: s(".gba"),
                content: s("25e3fc9a"),
            }],
        }),
        im1_crc: s("5f7f2ab0"),
        im2_crc: s("7b6e6d1c"),
        comment: s("Launch title"),
        duplicate_id: s("12"),
    }
}

fn full_dat(games: Vec<Game>) -> Dat {
    Dat {
        no_namespace_schema_location: s("datas.xsd"),
        configuration: Some(full_configuration()),
        games: Some(Games { game: games }),
        gui: Some(Gui {
            images: Some(Images {
                width: s("487"),
                height: s("162"),
                image: vec![Image {
                    x: s("0"),
                    y: s("0"),
                    width: s("240"),
                    height: s("160"),
                }],
            }),
        }),
    }
}

// -- Round trips --

#[test]
fn test_full_dat_round_trip() {
    let dat = full_dat(vec![game("4194304")]);
    let back = Dat::from_hub(&dat.to_hub(), ());
    assert_eq!(back, dat);
}

#[test]
fn test_configuration_lives_in_the_header() {
    let hub = full_dat(Vec::new()).to_hub();
    let hub_header = hub.header().unwrap();

    assert_eq!(hub_header.read_str(header::NAME), Some(X));
    assert_eq!(
        hub_header.read_string_array(header::CAN_OPEN),
        Some(vec![".gba".to_string(), ".bin".to_string()])
    );
    let infos_entity = hub_header.read(header::INFOS, EntityKind::Infos).unwrap();
    assert_eq!(infos_entity.len(), 13);
    assert!(hub_header.read(header::IMAGES, EntityKind::Images).is_some());
    assert!(hub.machines().is_empty());
}

#[test]
fn test_empty_dat() {
    let dat = Dat::default();
    let hub = dat.to_hub();
    assert!(hub.header().is_none());
    assert_eq!(Dat::from_hub(&hub, ()), dat);
}

// -- romSize --

#[test]
fn test_rom_size_is_copied_to_every_rom() {
    let mut two_files = game("2048");
    two_files.files = Some(Files {
        rom_crc: vec![
            FileRomCrc {
                extension: s(".a"),
                content: s("11111111"),
            },
            FileRomCrc {
                extension: s(".b"),
                content: s("22222222"),
            },
        ],
    });

    let hub = full_dat(vec![two_files.clone()]).to_hub();
    let machines = hub.machines();
    let roms = machines[0].read_all(machine::ROM, EntityKind::Rom);
    assert_eq!(roms.len(), 2);
    assert!(roms.iter().all(|r| r.read_str(rom::SIZE) == Some("2048")));

    let back = Dat::from_hub(&hub, ());
    assert_eq!(back.games.unwrap().game, vec![two_files]);
}

#[test]
fn test_non_numeric_rom_size_becomes_zero() {
    let dat = full_dat(vec![game(X)]);
    let back = Dat::from_hub(&dat.to_hub(), ());
    let games = back.games.unwrap().game;
    assert_eq!(games[0].rom_size.as_deref(), Some("0"));
}

#[test]
fn test_rom_size_comes_from_the_first_rom() {
    let mut first = Entity::new(EntityKind::Rom);
    first.set(rom::SIZE, "100");
    let mut second = Entity::new(EntityKind::Rom);
    second.set(rom::SIZE, "200");
    let mut game_entity = Entity::new(EntityKind::Machine);
    game_entity.set(machine::ROM, vec![first, second]);

    let back = Dat::from_hub(&MetadataFile::new(None, vec![game_entity]), ());
    assert_eq!(back.games.unwrap().game[0].rom_size.as_deref(), Some("100"));
}

#[test]
fn test_game_without_files_has_no_rom_size() {
    let mut bare = game("1024");
    bare.files = None;

    let back = Dat::from_hub(&full_dat(vec![bare]).to_hub(), ());
    let games = back.games.unwrap().game;
    assert_eq!(games[0].rom_size, None);
    assert_eq!(games[0].files, None);
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<Dat>(None).is_none());
    assert!(crate::from_hub::<Dat>(None, ()).is_none());
}
