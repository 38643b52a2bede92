use super::*;

fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_settings_path_ends_with_app_dir() {
    let path = settings_path();
    assert!(path.ends_with("dathub/settings.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_convert_table_is_read() {
    let (_dir, path) = write_settings(
        r#"
[convert]
record = "machine"
hash = "sha1"
pretty = false
"#,
    );
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.convert.record, Some(RecordKind::Machine));
    assert_eq!(settings.convert.hash, Some(HashType::Sha1));
    assert_eq!(settings.convert.pretty, Some(false));
}

#[test]
fn test_unrelated_tables_are_ignored() {
    let (_dir, path) = write_settings("[ui]\ntheme = \"dark\"\n");
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let (_dir, path) = write_settings("[convert]\nrecord = \"cabinet\"\n");
    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

// -- Priority chain --

#[test]
fn test_flag_beats_file_beats_default() {
    let settings = Settings {
        convert: ConvertSettings {
            record: Some(RecordKind::Machine),
            hash: None,
            pretty: None,
        },
    };

    assert_eq!(
        settings.record(Some(RecordKind::Game)),
        (RecordKind::Game, SettingSource::Flag)
    );
    assert_eq!(settings.record(None), (RecordKind::Machine, SettingSource::File));
    assert_eq!(settings.hash(None), (HashType::Crc32, SettingSource::Default));
}

#[test]
fn test_pretty_resolution() {
    let mut settings = Settings::default();
    assert_eq!(settings.pretty(false), (true, SettingSource::Default));
    assert_eq!(settings.pretty(true), (false, SettingSource::Flag));

    settings.convert.pretty = Some(false);
    assert_eq!(settings.pretty(false), (false, SettingSource::File));
}

#[test]
fn test_convert_options_combine_flags_and_file() {
    let settings = Settings {
        convert: ConvertSettings {
            record: Some(RecordKind::Machine),
            hash: Some(HashType::Md5),
            pretty: None,
        },
    };
    let options = settings.convert_options(None, Some(HashType::SpamSum));
    assert_eq!(options.record, RecordKind::Machine);
    assert_eq!(options.hash, HashType::SpamSum);
}
