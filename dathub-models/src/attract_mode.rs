//! AttractMode romlist (`;`-separated, one row per game).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    /// Column names from the `#Name;Title;...` line.
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub header: Vec<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub name: Option<String>,
    pub title: Option<String>,
    pub emulator: Option<String>,
    pub clone_of: Option<String>,
    pub year: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub players: Option<String>,
    pub rotation: Option<String>,
    pub control: Option<String>,
    pub status: Option<String>,
    pub display_count: Option<String>,
    pub display_type: Option<String>,
    pub alt_romname: Option<String>,
    pub alt_title: Option<String>,
    pub extra: Option<String>,
    pub buttons: Option<String>,
    pub favorite: Option<String>,
    pub tags: Option<String>,
    pub played_count: Option<String>,
    pub played_time: Option<String>,
    pub file_is_available: Option<String>,
}
