//! ClrMamePro bracketed text format (`clrmamepro ( ... )`, `game ( ... )`).

use serde::{Deserialize, Serialize};

use crate::common::GameRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    pub clrmamepro: Option<ClrMamePro>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub games: Vec<GameRecord<GameBase>>,
}

/// The `clrmamepro ( ... )` header block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClrMamePro {
    pub name: Option<String>,
    pub description: Option<String>,
    pub root_dir: Option<String>,
    pub category: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub homepage: Option<String>,
    pub url: Option<String>,
    pub comment: Option<String>,
    pub header: Option<String>,
    pub r#type: Option<String>,
    pub force_merging: Option<String>,
    pub force_zipping: Option<String>,
    pub force_packing: Option<String>,
}

/// Fields shared by `game ( ... )` and `machine ( ... )` blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameBase {
    pub name: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub clone_of: Option<String>,
    pub rom_of: Option<String>,
    pub sample_of: Option<String>,
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
    pub sample: Vec<Sample>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub archive: Vec<Archive>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub chip: Vec<Chip>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub video: Vec<Video>,
    pub sound: Option<Sound>,
    pub input: Option<Input>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dip_switch: Vec<DipSwitch>,
    pub driver: Option<Driver>,
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
    pub region: Option<String>,
    pub flags: Option<String>,
    pub offs: Option<String>,
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
    pub flags: Option<String>,
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
pub struct Chip {
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub flags: Option<String>,
    pub clock: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub screen: Option<String>,
    pub orientation: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub aspect_x: Option<String>,
    pub aspect_y: Option<String>,
    pub freq: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub channels: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    pub players: Option<String>,
    pub control: Option<String>,
    pub buttons: Option<String>,
    pub coins: Option<String>,
    pub tilt: Option<String>,
    pub service: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipSwitch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub entry: Vec<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    pub status: Option<String>,
    pub color: Option<String>,
    pub sound: Option<String>,
    pub palette_size: Option<String>,
    pub blit: Option<String>,
}
