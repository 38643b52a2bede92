//! Logiqx XML datafile (`<datafile>`), the de-facto standard DAT dialect.

use serde::{Deserialize, Serialize};

use crate::common::GameRecord;

/// Root `<datafile>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datafile {
    pub build: Option<String>,
    pub debug: Option<String>,
    pub schema_location: Option<String>,
    pub header: Option<Header>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub games: Vec<GameRecord<GameBase>>,
    /// RomVault-style nested directories of games.
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dirs: Vec<Dir>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub root_dir: Option<String>,
    pub category: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<String>,
    pub url: Option<String>,
    pub comment: Option<String>,
    pub r#type: Option<String>,
    pub clrmamepro: Option<ClrMamePro>,
    pub romcenter: Option<RomCenter>,
}

/// `<clrmamepro>` options block inside the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClrMamePro {
    pub header: Option<String>,
    pub force_merging: Option<String>,
    pub force_nodump: Option<String>,
    pub force_packing: Option<String>,
}

/// `<romcenter>` options block inside the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RomCenter {
    pub plugin: Option<String>,
    pub rom_mode: Option<String>,
    pub bios_mode: Option<String>,
    pub sample_mode: Option<String>,
    pub lock_rom_mode: Option<String>,
    pub lock_bios_mode: Option<String>,
    pub lock_sample_mode: Option<String>,
}

/// A named directory containing games and further directories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dir {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dirs: Vec<Dir>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub games: Vec<GameRecord<GameBase>>,
}

/// Fields shared by `<game>` and `<machine>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameBase {
    pub name: Option<String>,
    pub source_file: Option<String>,
    pub is_bios: Option<String>,
    pub is_device: Option<String>,
    pub is_mechanical: Option<String>,
    pub clone_of: Option<String>,
    pub rom_of: Option<String>,
    pub sample_of: Option<String>,
    pub board: Option<String>,
    pub rebuild_to: Option<String>,
    pub id: Option<String>,
    pub clone_of_id: Option<String>,
    pub runnable: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub comment: Vec<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub manufacturer: Option<String>,
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub category: Vec<String>,
    pub trurip: Option<Trurip>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub release: Vec<Release>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub bios_set: Vec<BiosSet>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rom: Vec<Rom>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub disk: Vec<Disk>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub media: Vec<Media>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub device_ref: Vec<DeviceRef>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sample: Vec<Sample>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub archive: Vec<Archive>,
    pub driver: Option<Driver>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub software_list: Vec<SoftwareList>,
}

/// Trurip extension block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trurip {
    pub title_id: Option<String>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub subgenre: Option<String>,
    pub ratings: Option<String>,
    pub score: Option<String>,
    pub players: Option<String>,
    pub enabled: Option<String>,
    pub crc: Option<String>,
    pub source: Option<String>,
    pub clone_of: Option<String>,
    pub related_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub name: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiosSet {
    pub name: Option<String>,
    pub description: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rom {
    pub name: Option<String>,
    pub size: Option<String>,
    pub crc: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub sha384: Option<String>,
    pub sha512: Option<String>,
    pub spamsum: Option<String>,
    pub xxh3_64: Option<String>,
    pub xxh3_128: Option<String>,
    pub merge: Option<String>,
    pub status: Option<String>,
    pub serial: Option<String>,
    pub header: Option<String>,
    pub date: Option<String>,
    pub inverted: Option<String>,
    pub mia: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disk {
    pub name: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub merge: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub name: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub spamsum: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Archive {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    pub status: Option<String>,
    pub emulation: Option<String>,
    pub cocktail: Option<String>,
    pub save_state: Option<String>,
    pub requires_artwork: Option<String>,
    pub unofficial: Option<String>,
    pub no_sound_hardware: Option<String>,
    pub incomplete: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareList {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub filter: Option<String>,
}
