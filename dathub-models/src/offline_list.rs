//! OfflineList XML DAT (`<dat>` with `<configuration>`, `<games>`, `<gui>`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dat {
    pub no_namespace_schema_location: Option<String>,
    pub configuration: Option<Configuration>,
    pub games: Option<Games>,
    pub gui: Option<Gui>,
}

// ── Configuration ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub dat_name: Option<String>,
    pub im_folder: Option<String>,
    pub dat_version: Option<String>,
    pub system: Option<String>,
    pub screenshots_width: Option<String>,
    pub screenshots_height: Option<String>,
    pub infos: Option<Infos>,
    pub can_open: Option<CanOpen>,
    pub new_dat: Option<NewDat>,
    pub search: Option<Search>,
    pub rom_title: Option<String>,
}

/// Which columns the OfflineList UI shows, and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infos {
    pub title: Option<InfoItem>,
    pub location: Option<InfoItem>,
    pub publisher: Option<InfoItem>,
    pub source_rom: Option<InfoItem>,
    pub save_type: Option<InfoItem>,
    pub rom_size: Option<InfoItem>,
    pub release_number: Option<InfoItem>,
    pub language_number: Option<InfoItem>,
    pub comment: Option<InfoItem>,
    pub rom_crc: Option<InfoItem>,
    pub im1_crc: Option<InfoItem>,
    pub im2_crc: Option<InfoItem>,
    pub files: Option<InfoItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoItem {
    pub visible: Option<String>,
    pub in_naming_option: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanOpen {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub extension: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewDat {
    pub dat_version_url: Option<String>,
    pub dat_url: Option<DatUrl>,
    pub im_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatUrl {
    pub file_name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub to: Vec<To>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct To {
    pub value: Option<String>,
    pub default: Option<String>,
    pub auto: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub find: Vec<Find>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Find {
    pub operation: Option<String>,
    pub value: Option<String>,
    pub content: Option<String>,
}

// ── Games ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Games {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub game: Vec<Game>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub image_number: Option<String>,
    pub release_number: Option<String>,
    pub title: Option<String>,
    pub save_type: Option<String>,
    /// Total size in bytes. Readers sometimes hand over non-numeric junk.
    pub rom_size: Option<String>,
    pub publisher: Option<String>,
    pub location: Option<String>,
    pub source_rom: Option<String>,
    pub language: Option<String>,
    pub files: Option<Files>,
    pub im1_crc: Option<String>,
    pub im2_crc: Option<String>,
    pub comment: Option<String>,
    pub duplicate_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rom_crc: Vec<FileRomCrc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRomCrc {
    pub extension: Option<String>,
    pub content: Option<String>,
}

// ── GUI ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gui {
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub width: Option<String>,
    pub height: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub image: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub x: Option<String>,
    pub y: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}
