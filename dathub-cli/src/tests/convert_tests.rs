use super::*;
use std::path::Path;

const PACMAN_LOGIQX: &str = r#"{
    "header": { "name": "Pac-Man", "version": "1.0" },
    "games": [
        {
            "kind": "game",
            "name": "pacman",
            "rom": [
                { "name": "pacman.6e", "size": "4096", "crc": "c1e6ab10", "md5": "aa" },
                { "name": "pacman.6f", "size": "4096", "crc": "1a6fb2d4" }
            ]
        }
    ]
}"#;

fn args(input: &Path, output: &Path) -> ConvertArgs {
    ConvertArgs {
        from: None,
        to: Format::Hashfile,
        record: None,
        hash: None,
        compact: false,
        output: Some(output.to_path_buf()),
        input: input.to_path_buf(),
    }
}

fn read_output(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_logiqx_file_to_sfv_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pacman.logiqx.json");
    let output = dir.path().join("pacman.sfv.json");
    std::fs::write(&input, PACMAN_LOGIQX).unwrap();

    convert_with(&Settings::default(), args(&input, &output)).unwrap();

    let list = read_output(&output);
    let sfv = list["sfv"].as_array().unwrap();
    assert_eq!(sfv.len(), 2);
    assert_eq!(sfv[0]["file"], "pacman.6e");
    assert_eq!(sfv[0]["hash"], "c1e6ab10");
    assert_eq!(sfv[1]["file"], "pacman.6f");
}

#[test]
fn test_hash_flag_selects_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pacman.logiqx.json");
    let output = dir.path().join("pacman.md5.json");
    std::fs::write(&input, PACMAN_LOGIQX).unwrap();

    let mut md5 = args(&input, &output);
    md5.hash = Some(HashType::Md5);
    convert_with(&Settings::default(), md5).unwrap();

    let list = read_output(&output);
    assert_eq!(list["md5"][0]["hash"], "aa");
    assert!(list["sfv"].as_array().unwrap().is_empty());
}

#[test]
fn test_compact_output_is_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pacman.logiqx.json");
    let output = dir.path().join("pacman.json");
    std::fs::write(&input, PACMAN_LOGIQX).unwrap();

    let mut compact = args(&input, &output);
    compact.compact = true;
    convert_with(&Settings::default(), compact).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents.trim_end().lines().count(), 1);
}

#[test]
fn test_missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.logiqx.json");
    let output = dir.path().join("out.json");

    let err = convert_with(&Settings::default(), args(&input, &output)).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
    assert!(!output.exists());
}
