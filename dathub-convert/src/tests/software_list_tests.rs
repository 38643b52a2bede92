use super::*;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn sample_list() -> SoftwareList {
    SoftwareList {
        name: s("nes"),
        description: s("Nintendo NES cartridges"),
        notes: s("Dumped by the NES preservation project"),
        software: vec![Software {
            name: s("smb3"),
            clone_of: s("smb3j"),
            supported: s("yes"),
            description: s("Super Mario Bros. 3 (USA)"),
            year: s("1990"),
            publisher: s("Nintendo"),
            notes: s("PRG rev 1"),
            info: vec![Info {
                name: s("serial"),
                value: s("NES-UM-USA"),
            }],
            shared_feat: vec![SharedFeat {
                name: s("compatibility"),
                value: s("NTSC"),
            }],
            part: vec![Part {
                name: s("cart"),
                interface: s("nes_cart"),
                feature: vec![Feature {
                    name: s("slot"),
                    value: s("txrom"),
                }],
                data_area: vec![DataArea {
                    name: s("prg"),
                    size: s("262144"),
                    width: s("8"),
                    endianness: s("little"),
                    rom: vec![Rom {
                        name: s("smb3.prg"),
                        size: s("262144"),
                        length: None,
                        crc: s("a0f42ee8"),
                        sha1: s("2e4b1c5c9d6c2e3a1b2b0b5e0e6b7a8c7c1d2f3a"),
                        offset: s("0"),
                        value: None,
                        status: s("good"),
                        load_flag: s("load16_byte"),
                    }],
                }],
                disk_area: vec![DiskArea {
                    name: s("cdrom"),
                    disk: vec![Disk {
                        name: s("disc1"),
                        md5: None,
                        sha1: s("0123456789abcdef0123456789abcdef01234567"),
                        status: s("baddump"),
                        writeable: s("no"),
                    }],
                }],
                dip_switch: vec![DipSwitch {
                    name: s("Region"),
                    tag: s("DSW"),
                    mask: s("1"),
                    dip_value: vec![DipValue {
                        name: s("USA"),
                        value: s("0"),
                        default: s("yes"),
                    }],
                }],
            }],
        }],
    }
}

#[test]
fn test_round_trip() {
    let list = sample_list();
    let back = SoftwareList::from_hub(&list.to_hub(), ());
    assert_eq!(back, list);
}

#[test]
fn test_roms_stay_inside_data_areas() {
    let hub = sample_list().to_hub();
    let machines = hub.machines();
    let software = machines[0];

    assert!(!software.contains(machine::ROM));
    let parts = software.read_all(machine::PART, EntityKind::Part);
    let areas = parts[0].read_all(part::DATA_AREA, EntityKind::DataArea);
    let roms = areas[0].read_all(data_area::ROM, EntityKind::Rom);
    assert_eq!(roms[0].read_str(rom::CRC), Some("a0f42ee8"));
}

#[test]
fn test_header_fields() {
    let hub = sample_list().to_hub();
    let hub_header = hub.header().unwrap();
    assert_eq!(hub_header.read_str(header::NAME), Some("nes"));
    assert_eq!(hub_header.read_str(header::NOTES), Some("Dumped by the NES preservation project"));
}

#[test]
fn test_foreign_kinds_under_part_are_skipped() {
    let mut bogus = Entity::new(EntityKind::Rom);
    bogus.set(rom::NAME, "stray");
    let mut software = Entity::new(EntityKind::Machine);
    software.set(machine::NAME, "x");
    software.set(machine::PART, vec![bogus]);

    let back = SoftwareList::from_hub(&MetadataFile::new(None, vec![software]), ());
    assert!(back.software[0].part.is_empty());
}

#[test]
fn test_null_propagation() {
    assert!(crate::to_hub::<SoftwareList>(None).is_none());
    assert!(crate::from_hub::<SoftwareList>(None, ()).is_none());
}
