//! MAME `-listroms` output: one set per driver or device, one row per dump.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataFile {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sets: Vec<Set>,
}

/// A `ROMs required for driver "x".` or `... for device "x".` block.
///
/// Exactly one of `driver` / `device` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Set {
    pub driver: Option<String>,
    pub device: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rows: Vec<Row>,
}

/// One dump line. Rows without a size are disks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub name: Option<String>,
    pub size: Option<String>,
    pub bad: bool,
    pub crc: Option<String>,
    pub sha1: Option<String>,
    pub no_good_dump_known: bool,
}
