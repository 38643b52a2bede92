//! MAME software lists (`hash/*.xml`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareList {
    pub name: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub software: Vec<Software>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Software {
    pub name: Option<String>,
    pub clone_of: Option<String>,
    pub supported: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub publisher: Option<String>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub info: Vec<Info>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub shared_feat: Vec<SharedFeat>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub part: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedFeat {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    pub name: Option<String>,
    pub interface: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub feature: Vec<Feature>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub data_area: Vec<DataArea>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub disk_area: Vec<DiskArea>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dip_switch: Vec<DipSwitch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataArea {
    pub name: Option<String>,
    pub size: Option<String>,
    pub width: Option<String>,
    pub endianness: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rom: Vec<Rom>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rom {
    pub name: Option<String>,
    pub size: Option<String>,
    pub length: Option<String>,
    pub crc: Option<String>,
    pub sha1: Option<String>,
    pub offset: Option<String>,
    pub value: Option<String>,
    pub status: Option<String>,
    pub load_flag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskArea {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub disk: Vec<Disk>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disk {
    pub name: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub status: Option<String>,
    pub writeable: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipSwitch {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub mask: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dip_value: Vec<DipValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipValue {
    pub name: Option<String>,
    pub value: Option<String>,
    pub default: Option<String>,
}
