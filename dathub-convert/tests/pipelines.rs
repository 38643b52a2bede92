use dathub_convert::keys::machine;
use dathub_convert::{
    ConvertOptions, EntityKind, Format, HashType, HubConvert, MetadataFile, RecordKind, convert,
    format::{convert_json, hub_from_json, hub_to_json},
};
use dathub_models::{GameRecord, hashfile, listrom, listxml, logiqx, romcenter};

const SMDB_JSON: &str = r#"{
    "rows": [
        {
            "name": "Sonic (USA).md",
            "sha256": "aa",
            "sha1": "bb",
            "md5": "cc",
            "crc32": "dd",
            "size": "524288"
        }
    ]
}"#;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn pacman_set() -> listrom::MetadataFile {
    listrom::MetadataFile {
        sets: vec![listrom::Set {
            driver: s("pacman"),
            device: None,
            rows: vec![
                listrom::Row {
                    name: s("pacman.6e"),
                    size: s("4096"),
                    crc: s("c1e6ab10"),
                    sha1: s("e87e059c5be45753f7e9f33dff851f16d6751181"),
                    bad: true,
                    no_good_dump_known: false,
                },
                listrom::Row {
                    name: s("pacman"),
                    sha1: s("0123456789abcdef0123456789abcdef01234567"),
                    ..Default::default()
                },
            ],
        }],
    }
}

#[test]
fn listrom_to_listxml_keeps_status() {
    let mame: listxml::Mame = convert(&pacman_set(), ());
    let pacman = &mame.machines[0];

    assert_eq!(pacman.name.as_deref(), Some("pacman"));
    assert_eq!(pacman.rom.len(), 1);
    assert_eq!(pacman.rom[0].status.as_deref(), Some("baddump"));
    assert_eq!(pacman.rom[0].size.as_deref(), Some("4096"));
    assert_eq!(pacman.disk.len(), 1);
    assert_eq!(pacman.disk[0].name.as_deref(), Some("pacman"));
}

#[test]
fn listxml_back_to_listrom() {
    let mame: listxml::Mame = convert(&pacman_set(), ());
    let back: listrom::MetadataFile = convert(&mame, ());
    assert_eq!(back, pacman_set());
}

#[test]
fn romcenter_to_logiqx() {
    let dat = romcenter::MetadataFile {
        credits: Some(romcenter::Credits {
            author: s("Logiqx"),
            ..Default::default()
        }),
        games: Some(romcenter::Games {
            rom: vec![romcenter::Rom {
                parent_name: s("puckman"),
                parent_description: s("PuckMan (Japan set 1)"),
                game_name: s("pacman"),
                game_description: s("Pac-Man (Midway)"),
                rom_name: s("pacman.6e"),
                rom_crc: s("c1e6ab10"),
                rom_size: s("4096"),
                rom_of: s("puckman"),
                merge_name: None,
            }],
        }),
        ..Default::default()
    };

    let datafile: logiqx::Datafile = convert(&dat, RecordKind::Machine);
    assert_eq!(
        datafile.header.as_ref().and_then(|h| h.author.as_deref()),
        Some("Logiqx")
    );
    let game = &datafile.games[0];
    assert!(matches!(game, GameRecord::Machine(_)));
    assert_eq!(game.base().clone_of.as_deref(), Some("puckman"));
    assert_eq!(game.base().description.as_deref(), Some("Pac-Man (Midway)"));
    assert_eq!(game.base().rom[0].crc.as_deref(), Some("c1e6ab10"));
}

#[test]
fn every_hash_type_from_one_hub() {
    let hub = pacman_set().to_hub();
    for &hash in HashType::all() {
        let list = hashfile::Hashfile::from_hub(&hub, hash);
        let total = list.sfv.len()
            + list.md5.len()
            + list.sha1.len()
            + list.sha256.len()
            + list.sha384.len()
            + list.sha512.len()
            + list.spamsum.len();
        // Every rom, plus the disk where the hash applies to disks.
        let expected = if matches!(hash, HashType::Md5 | HashType::Sha1) { 2 } else { 1 };
        assert_eq!(total, expected, "{hash}");
    }
}

#[test]
fn hub_collections_hold_only_their_kind() {
    let hub = pacman_set().to_hub();
    for game in hub.machines() {
        let roms = game.read_all(machine::ROM, EntityKind::Rom);
        assert!(roms.iter().all(|r| r.is_kind(EntityKind::Rom)));
        assert!(game.read_all(machine::DISK, EntityKind::Rom).is_empty());
    }
}

#[test]
fn json_bridge_from_smdb_to_every_format() {
    let input = SMDB_JSON;
    let options = ConvertOptions::default();

    for &target in Format::all() {
        let json = convert_json(Format::EverdriveSmdb, target, input, &options, false)
            .unwrap_or_else(|e| panic!("smdb -> {}: {e}", target.short_name()));
        let hub = hub_from_json(target, &json)
            .unwrap_or_else(|e| panic!("{} re-read: {e}", target.short_name()));
        hub_to_json(Format::EverdriveSmdb, &hub, &options, false).unwrap();
    }
}

#[test]
fn smdb_through_logiqx_round_trips() {
    let input = SMDB_JSON;
    let options = ConvertOptions::default();

    let logiqx_json =
        convert_json(Format::EverdriveSmdb, Format::Logiqx, input, &options, false).unwrap();
    let back =
        convert_json(Format::Logiqx, Format::EverdriveSmdb, &logiqx_json, &options, false).unwrap();

    let expected: serde_json::Value = serde_json::from_str(input).unwrap();
    let actual: serde_json::Value = serde_json::from_str(&back).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn hub_json_round_trips() {
    let hub = pacman_set().to_hub();
    let json = serde_json::to_string(&hub).unwrap();
    let back: MetadataFile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hub);
}

#[test]
fn null_elements_never_reach_the_hub() {
    let input = r#"{"games":[{"kind":"game","name":"a","rom":[null,{"name":"r"}]}, null]}"#;
    let hub = hub_from_json(Format::Logiqx, input).unwrap();

    let machines = hub.machines();
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[0].read_str(machine::NAME), Some("a"));

    let roms = machines[0].read_all(machine::ROM, EntityKind::Rom);
    assert_eq!(roms.len(), 1);
    assert_eq!(roms[0].read_str(dathub_convert::keys::rom::NAME), Some("r"));
}
