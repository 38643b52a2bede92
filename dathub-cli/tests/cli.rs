use std::path::Path;
use std::process::{Command, Output};

const PACMAN_LOGIQX: &str = r#"{
    "games": [
        {
            "kind": "game",
            "name": "pacman",
            "rom": [ { "name": "pacman.6e", "size": "4096", "crc": "c1e6ab10" } ]
        }
    ]
}"#;

/// Run the binary with an empty config directory and no `RUST_LOG`.
fn dathub(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dathub"))
        .args(args)
        .env("HOME", config)
        .env("XDG_CONFIG_HOME", config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_input(dir: &Path) -> String {
    let input = dir.join("pacman.logiqx.json");
    std::fs::write(&input, PACMAN_LOGIQX).unwrap();
    input.to_string_lossy().into_owned()
}

#[test]
fn verbose_convert_keeps_stdout_clean() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = dathub(dir.path(), &["-v", "convert", "--to", "sfv", &input]);
    assert!(out.status.success());

    let list: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(list["sfv"][0]["file"], "pacman.6e");
    assert_eq!(list["sfv"][0]["hash"], "c1e6ab10");

    let log = String::from_utf8_lossy(&out.stderr);
    assert!(log.contains("DEBUG"), "debug lines expected on stderr: {log}");
}

#[test]
fn inspect_json_is_a_hub_tree() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = dathub(dir.path(), &["-v", "inspect", "--json", &input]);
    assert!(out.status.success());

    let hub: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(hub["kind"], "metadata_file");
    assert_eq!(hub["fields"]["machine"][0]["fields"]["name"], "pacman");
}

#[test]
fn failures_report_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.logiqx.json");

    let out = dathub(dir.path(), &["convert", "--to", "sfv", &missing.to_string_lossy()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error"));
}
