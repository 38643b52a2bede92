//! Everdrive SMDB (tab-separated `sha256 name sha1 md5 crc32 [size]`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub sha256: Option<String>,
    pub name: Option<String>,
    pub sha1: Option<String>,
    pub md5: Option<String>,
    pub crc32: Option<String>,
    pub size: Option<String>,
}
