use super::*;
use dathub_core::Value;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn iso() -> File {
    File {
        name: s("disc.iso"),
        source: s("original"),
        btih: s("c9e15763f722f23e98a29decdfae341b98d53056"),
        mtime: s("1612345678"),
        size: s("681574400"),
        md5: s("d41d8cd98f00b204e9800998ecf8427e"),
        crc32: s("1c291ca3"),
        sha1: s("da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        format: s("ISO Image"),
        ..Default::default()
    }
}

fn thumbnail() -> File {
    File {
        name: s("__ia_thumb.jpg"),
        source: s("derivative"),
        original: s("disc.iso"),
        format: s("Item Tile"),
        width: s("180"),
        height: s("135"),
        ..Default::default()
    }
}

#[test]
fn test_round_trip() {
    let files = Files {
        file: vec![iso(), thumbnail()],
    };
    let back = Files::from_hub(&files.to_hub(), ());
    assert_eq!(back, files);
}

#[test]
fn test_all_files_share_one_machine() {
    let hub = Files {
        file: vec![iso(), thumbnail()],
    }
    .to_hub();

    let machines = hub.machines();
    assert_eq!(machines.len(), 1);
    let roms = machines[0].read_all(machine::ROM, EntityKind::Rom);
    assert_eq!(roms.len(), 2);
    assert_eq!(roms[0].read_str(rom::CRC), Some("1c291ca3"));
    assert_eq!(
        roms[0].read_str(rom::BITTORRENT_MAGNET_HASH),
        Some("c9e15763f722f23e98a29decdfae341b98d53056")
    );
    assert_eq!(roms[1].read_str(rom::ORIGINAL), Some("disc.iso"));
}

#[test]
fn test_machine_roms_are_a_node_list() {
    let hub = Files { file: vec![iso()] }.to_hub();
    let machines = hub.machines();
    match machines[0].get(machine::ROM) {
        Some(Value::NodeList(roms)) => {
            assert_eq!(roms.len(), 1);
            assert!(roms[0].is_kind(EntityKind::Rom));
        }
        other => panic!("expected a rom list, got {other:?}"),
    }
    assert!(!machines[0].contains(machine::NAME));
}

#[test]
fn test_roms_from_every_machine_are_emitted() {
    let machines = ["a.bin", "b.bin"]
        .into_iter()
        .map(|name| {
            let mut file_rom = Entity::new(EntityKind::Rom);
            file_rom.set(rom::NAME, name);
            let mut game = Entity::new(EntityKind::Machine);
            game.set(machine::NAME, "set");
            game.set_entities(machine::ROM, vec![file_rom]);
            game
        })
        .collect();

    let back = Files::from_hub(&MetadataFile::new(None, machines), ());
    let names: Vec<_> = back.file.iter().map(|f| f.name.as_deref()).collect();
    assert_eq!(names, vec![Some("a.bin"), Some("b.bin")]);
}

#[test]
fn test_empty_listing_has_no_machine() {
    let hub = Files::default().to_hub();
    assert!(hub.machines().is_empty());
    assert!(hub.header().is_none());
    assert_eq!(Files::from_hub(&hub, ()), Files::default());
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<Files>(None).is_none());
    assert!(crate::from_hub::<Files>(None, ()).is_none());
}
