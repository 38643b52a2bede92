//! RomCenter INI-style DAT (`[CREDITS]`, `[DAT]`, `[EMULATOR]`, `[GAMES]`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    pub credits: Option<Credits>,
    pub dat: Option<Dat>,
    pub emulator: Option<Emulator>,
    pub games: Option<Games>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub author: Option<String>,
    pub version: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dat {
    pub version: Option<String>,
    pub plugin: Option<String>,
    /// Split-set indicator, `1`/`0` in the wild.
    pub split: Option<String>,
    /// Merge-set indicator, `1`/`0` in the wild.
    pub merge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emulator {
    pub ref_name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Games {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rom: Vec<Rom>,
}

/// One `¬`-delimited line of the `[GAMES]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rom {
    pub parent_name: Option<String>,
    pub parent_description: Option<String>,
    pub game_name: Option<String>,
    pub game_description: Option<String>,
    pub rom_name: Option<String>,
    pub rom_crc: Option<String>,
    pub rom_size: Option<String>,
    pub rom_of: Option<String>,
    pub merge_name: Option<String>,
}
