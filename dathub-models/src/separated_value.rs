//! Comma/tab/semicolon separated DAT listings (one row per item).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    /// Column names from the first line.
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub header: Vec<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub file_name: Option<String>,
    pub internal_name: Option<String>,
    pub description: Option<String>,
    pub game_name: Option<String>,
    pub game_description: Option<String>,
    /// `rom`, `disk` or `media`.
    pub r#type: Option<String>,
    pub rom_name: Option<String>,
    pub disk_name: Option<String>,
    pub size: Option<String>,
    pub crc: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub sha384: Option<String>,
    pub sha512: Option<String>,
    pub spamsum: Option<String>,
    pub status: Option<String>,
}
