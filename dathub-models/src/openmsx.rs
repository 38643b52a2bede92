//! openMSX software database (`softwaredb.xml`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareDb {
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub software: Vec<Software>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Software {
    pub title: Option<String>,
    pub genmsxid: Option<String>,
    pub system: Option<String>,
    pub company: Option<String>,
    pub year: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dump: Vec<Dump>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dump {
    pub original: Option<Original>,
    pub rom: Option<DumpRom>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Original {
    pub value: Option<String>,
    pub content: Option<String>,
}

/// The three structurally identical ROM elements a dump can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DumpRom {
    Rom(RomBase),
    MegaRom(RomBase),
    SccPlusCart(RomBase),
}

impl DumpRom {
    pub fn base(&self) -> &RomBase {
        match self {
            Self::Rom(base) | Self::MegaRom(base) | Self::SccPlusCart(base) => base,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RomBase {
    pub start: Option<String>,
    pub r#type: Option<String>,
    pub hash: Option<String>,
    pub remark: Option<String>,
}
