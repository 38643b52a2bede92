//! DOSCenter DAT (`DOSCenter ( ... )` header plus `game ( ... )` blocks).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    pub doscenter: Option<DosCenter>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DosCenter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub homepage: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub file: Vec<File>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub name: Option<String>,
    pub size: Option<String>,
    pub crc: Option<String>,
    pub date: Option<String>,
}
