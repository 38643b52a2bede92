use super::*;
use std::path::PathBuf;

#[test]
fn test_explicit_format_wins() {
    let format = resolve_format(Some(Format::M1), Path::new("set.logiqx.json")).unwrap();
    assert_eq!(format, Format::M1);
}

#[test]
fn test_format_from_inner_extension() {
    let format = resolve_format(None, Path::new("dats/pacman.logiqx.json")).unwrap();
    assert_eq!(format, Format::Logiqx);

    let format = resolve_format(None, Path::new("list.CSV.json")).unwrap();
    assert_eq!(format, Format::SeparatedValue);
}

#[test]
fn test_plain_name_needs_from() {
    let err = resolve_format(None, Path::new("pacman.json")).unwrap_err();
    assert!(matches!(err, CliError::Other(_)));
}

#[test]
fn test_unknown_inner_extension() {
    let err = resolve_format(None, Path::new("pacman.nointro.json")).unwrap_err();
    assert!(matches!(err, CliError::UnknownFormat(_)));
}

#[test]
fn test_read_input_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("in.json");
    std::fs::write(&path, "{}").unwrap();
    assert_eq!(read_input(&path).unwrap(), "{}");
}

#[test]
fn test_read_input_missing_file() {
    let err = read_input(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}
