use super::*;
use std::collections::HashSet;

const LOGIQX_JSON: &str = r#"{
    "header": { "name": "Test DAT", "version": "1.0" },
    "games": [
        {
            "kind": "game",
            "name": "pacman",
            "description": "Pac-Man",
            "rom": [ { "name": "pacman.6e", "size": "4096", "crc": "c1e6ab10" } ]
        }
    ]
}"#;

// -- Registry --

#[test]
fn test_all_formats_listed_once() {
    let all = Format::all();
    assert_eq!(all.len(), 15);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_short_names_round_trip() {
    for &format in Format::all() {
        assert_eq!(format.short_name().parse::<Format>(), Ok(format));
        assert!(format.aliases().contains(&format.short_name()));
    }
}

#[test]
fn test_aliases_are_unambiguous() {
    let mut seen = HashSet::new();
    for format in Format::all() {
        for alias in format.aliases() {
            assert!(seen.insert(*alias), "alias {alias:?} used twice");
        }
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("CMP".parse::<Format>(), Ok(Format::ClrMamePro));
    assert_eq!(" Csv ".parse::<Format>(), Ok(Format::SeparatedValue));
    assert_eq!("MAME".parse::<Format>(), Ok(Format::Listxml));
}

#[test]
fn test_parse_unknown_format() {
    let err = "nointro".parse::<Format>().unwrap_err();
    assert_eq!(err, FormatParseError("nointro".to_string()));
    assert_eq!(err.to_string(), "unknown format: 'nointro'");
}

#[test]
fn test_variant_selectors() {
    assert_eq!(Format::Logiqx.variant_selector(), Some(VariantSelector::Record));
    assert_eq!(Format::ClrMamePro.variant_selector(), Some(VariantSelector::Record));
    assert_eq!(Format::Hashfile.variant_selector(), Some(VariantSelector::Hash));
    assert_eq!(Format::OpenMsx.variant_selector(), None);
}

#[test]
fn test_selector_values_parse_back() {
    assert_eq!(VariantSelector::Record.flag(), "record");
    assert_eq!(VariantSelector::Record.values(), vec!["game", "machine"]);
    for value in VariantSelector::Hash.values() {
        assert!(value.parse::<HashType>().is_ok(), "{value} does not parse");
    }
    assert_eq!(VariantSelector::Hash.values().len(), HashType::all().len());
}

#[test]
fn test_options_report_selected_value() {
    let options = ConvertOptions {
        record: RecordKind::Machine,
        hash: HashType::Sha1,
    };
    assert_eq!(options.selected(VariantSelector::Record), "machine");
    assert_eq!(options.selected(VariantSelector::Hash), HashType::Sha1.short_name());
}

// -- JSON bridge --

#[test]
fn test_hub_from_json_reads_logiqx() {
    let hub = hub_from_json(Format::Logiqx, LOGIQX_JSON).unwrap();
    let machines = hub.machines();
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[0].read_str(crate::keys::machine::NAME), Some("pacman"));
    assert_eq!(
        hub.header().and_then(|h| h.read_str(crate::keys::header::NAME)),
        Some("Test DAT")
    );
}

#[test]
fn test_logiqx_to_sfv() {
    let options = ConvertOptions {
        hash: HashType::Crc32,
        ..Default::default()
    };
    let json = convert_json(Format::Logiqx, Format::Hashfile, LOGIQX_JSON, &options, false).unwrap();

    let list: hashfile::Hashfile = serde_json::from_str(&json).unwrap();
    assert_eq!(list.sfv.len(), 1);
    assert_eq!(list.sfv[0].file.as_deref(), Some("pacman.6e"));
    assert_eq!(list.sfv[0].hash.as_deref(), Some("c1e6ab10"));
    assert!(list.md5.is_empty());
}

#[test]
fn test_record_kind_reaches_the_writer() {
    let options = ConvertOptions {
        record: RecordKind::Machine,
        ..Default::default()
    };
    let json = convert_json(Format::Logiqx, Format::ClrMamePro, LOGIQX_JSON, &options, true).unwrap();

    let file: clrmamepro::MetadataFile = serde_json::from_str(&json).unwrap();
    assert_eq!(file.games.len(), 1);
    assert_eq!(file.games[0].kind(), RecordKind::Machine);
    assert_eq!(file.games[0].base().name.as_deref(), Some("pacman"));
}

#[test]
fn test_pretty_output_is_multiline() {
    let hub = hub_from_json(Format::Logiqx, LOGIQX_JSON).unwrap();
    let options = ConvertOptions::default();
    let compact = hub_to_json(Format::M1, &hub, &options, false).unwrap();
    let pretty = hub_to_json(Format::M1, &hub, &options, true).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
}

#[test]
fn test_empty_input_is_rejected() {
    let err = hub_from_json(Format::Listxml, "   ").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInput(_)));
}

#[test]
fn test_malformed_json_is_reported() {
    let err = hub_from_json(Format::Listxml, "{ not json").unwrap_err();
    assert!(matches!(err, ConvertError::Json(_)));
}

#[test]
fn test_every_format_accepts_an_empty_object() {
    for &format in Format::all() {
        let hub = hub_from_json(format, "{}")
            .unwrap_or_else(|e| panic!("{} rejected {{}}: {e}", format.short_name()));
        assert!(hub.machines().is_empty(), "{}", format.short_name());
        hub_to_json(format, &hub, &ConvertOptions::default(), false).unwrap();
    }
}
