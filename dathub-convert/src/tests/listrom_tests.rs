use super::*;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn rom_row(name: &str) -> Row {
    Row {
        name: s(name),
        size: s("16384"),
        bad: false,
        crc: s("c1e6ab10"),
        sha1: s("e87e059c5be45753f7e9f33dff851f16d6751181"),
        no_good_dump_known: false,
    }
}

fn disk_row(name: &str) -> Row {
    Row {
        name: s(name),
        size: None,
        bad: false,
        crc: None,
        sha1: s("0123456789abcdef0123456789abcdef01234567"),
        no_good_dump_known: false,
    }
}

#[test]
fn test_driver_and_device_sets_round_trip() {
    let file = ListromFile {
        sets: vec![
            Set {
                driver: s("pacman"),
                device: None,
                rows: vec![rom_row("pacman.6e"), rom_row("pacman.6f")],
            },
            Set {
                driver: None,
                device: s("z80"),
                rows: Vec::new(),
            },
        ],
    };

    let back = ListromFile::from_hub(&file.to_hub(), ());
    assert_eq!(back, file);
}

#[test]
fn test_device_is_flagged_in_hub() {
    let file = ListromFile {
        sets: vec![Set {
            driver: None,
            device: s("z80"),
            rows: Vec::new(),
        }],
    };

    let hub = file.to_hub();
    let machines = hub.machines();
    assert_eq!(machines[0].read_str(machine::NAME), Some("z80"));
    assert_eq!(machines[0].read_str(machine::IS_DEVICE), Some("yes"));
}

#[test]
fn test_rows_without_size_are_disks() {
    let file = ListromFile {
        sets: vec![Set {
            driver: s("area51"),
            device: None,
            rows: vec![rom_row("a51.bin"), disk_row("area51")],
        }],
    };

    let hub = file.to_hub();
    let machines = hub.machines();
    assert_eq!(machines[0].read_all(machine::ROM, EntityKind::Rom).len(), 1);
    let disks = machines[0].read_all(machine::DISK, EntityKind::Disk);
    assert_eq!(disks.len(), 1);
    assert_eq!(disks[0].read_str(disk::NAME), Some("area51"));

    let back = ListromFile::from_hub(&hub, ());
    assert_eq!(back, file);
}

#[test]
fn test_dump_quality_maps_to_status() {
    let mut bad = rom_row("bad.bin");
    bad.bad = true;
    let mut missing = rom_row("missing.bin");
    missing.no_good_dump_known = true;
    missing.crc = None;
    missing.sha1 = None;

    let file = ListromFile {
        sets: vec![Set {
            driver: s("game"),
            device: None,
            rows: vec![bad, missing],
        }],
    };

    let hub = file.to_hub();
    let machines = hub.machines();
    let roms = machines[0].read_all(machine::ROM, EntityKind::Rom);
    assert_eq!(roms[0].read_str(rom::STATUS), Some("baddump"));
    assert_eq!(roms[1].read_str(rom::STATUS), Some("nodump"));

    let back = ListromFile::from_hub(&hub, ());
    assert_eq!(back, file);
}

#[test]
fn test_nodump_wins_over_bad() {
    let mut row = rom_row("x.bin");
    row.bad = true;
    row.no_good_dump_known = true;
    let file = ListromFile {
        sets: vec![Set {
            driver: s("game"),
            device: None,
            rows: vec![row],
        }],
    };

    let back = ListromFile::from_hub(&file.to_hub(), ());
    let row = &back.sets[0].rows[0];
    assert!(row.no_good_dump_known);
    assert!(!row.bad);
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<ListromFile>(None).is_none());
    assert!(crate::from_hub::<ListromFile>(None, ()).is_none());
}
