//! MAME `-listxml` output (`<mame>` with `<machine>` children).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mame {
    pub build: Option<String>,
    pub debug: Option<String>,
    pub mame_config: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub machines: Vec<Machine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Machine {
    pub name: Option<String>,
    pub source_file: Option<String>,
    pub is_bios: Option<String>,
    pub is_device: Option<String>,
    pub is_mechanical: Option<String>,
    pub runnable: Option<String>,
    pub clone_of: Option<String>,
    pub rom_of: Option<String>,
    pub sample_of: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub manufacturer: Option<String>,
    pub history: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub bios_set: Vec<BiosSet>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub rom: Vec<Rom>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub disk: Vec<Disk>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub device_ref: Vec<DeviceRef>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sample: Vec<Sample>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub chip: Vec<Chip>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub display: Vec<Display>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub video: Vec<Video>,
    pub sound: Option<Sound>,
    pub input: Option<Input>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dip_switch: Vec<DipSwitch>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub configuration: Vec<Configuration>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub port: Vec<Port>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub adjuster: Vec<Adjuster>,
    pub driver: Option<Driver>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub feature: Vec<Feature>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub device: Vec<Device>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub slot: Vec<Slot>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub software_list: Vec<SoftwareList>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub ram_option: Vec<RamOption>,
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
    pub bios: Option<String>,
    pub size: Option<String>,
    pub crc: Option<String>,
    pub sha1: Option<String>,
    pub merge: Option<String>,
    pub region: Option<String>,
    pub offset: Option<String>,
    pub status: Option<String>,
    pub optional: Option<String>,
    pub dispose: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disk {
    pub name: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub merge: Option<String>,
    pub region: Option<String>,
    pub index: Option<String>,
    pub writable: Option<String>,
    pub status: Option<String>,
    pub optional: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chip {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub r#type: Option<String>,
    pub sound_only: Option<String>,
    pub clock: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    pub tag: Option<String>,
    pub r#type: Option<String>,
    pub rotate: Option<String>,
    pub flip_x: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub refresh: Option<String>,
    pub pix_clock: Option<String>,
    pub h_total: Option<String>,
    pub hb_end: Option<String>,
    pub hb_start: Option<String>,
    pub v_total: Option<String>,
    pub vb_end: Option<String>,
    pub vb_start: Option<String>,
}

/// Pre-0.106 `<video>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub screen: Option<String>,
    pub orientation: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub aspect_x: Option<String>,
    pub aspect_y: Option<String>,
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub channels: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    pub service: Option<String>,
    pub tilt: Option<String>,
    pub players: Option<String>,
    pub buttons: Option<String>,
    pub coins: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub control: Vec<Control>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Control {
    pub r#type: Option<String>,
    pub player: Option<String>,
    pub buttons: Option<String>,
    pub req_buttons: Option<String>,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub sensitivity: Option<String>,
    pub key_delta: Option<String>,
    pub reverse: Option<String>,
    pub ways: Option<String>,
    pub ways2: Option<String>,
    pub ways3: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub tag: Option<String>,
    pub mask: Option<String>,
    pub relation: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipSwitch {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub mask: Option<String>,
    pub condition: Option<Condition>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dip_location: Vec<DipLocation>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub dip_value: Vec<DipValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipLocation {
    pub name: Option<String>,
    pub number: Option<String>,
    pub inverted: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipValue {
    pub name: Option<String>,
    pub value: Option<String>,
    pub default: Option<String>,
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub mask: Option<String>,
    pub condition: Option<Condition>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub conf_location: Vec<ConfLocation>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub conf_setting: Vec<ConfSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfLocation {
    pub name: Option<String>,
    pub number: Option<String>,
    pub inverted: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfSetting {
    pub name: Option<String>,
    pub value: Option<String>,
    pub default: Option<String>,
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub analog: Vec<Analog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analog {
    pub mask: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjuster {
    pub name: Option<String>,
    pub default: Option<String>,
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    pub status: Option<String>,
    pub color: Option<String>,
    pub sound: Option<String>,
    pub palette_size: Option<String>,
    pub emulation: Option<String>,
    pub cocktail: Option<String>,
    pub save_state: Option<String>,
    pub requires_artwork: Option<String>,
    pub unofficial: Option<String>,
    pub no_sound_hardware: Option<String>,
    pub incomplete: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub r#type: Option<String>,
    pub status: Option<String>,
    pub overall: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub r#type: Option<String>,
    pub tag: Option<String>,
    pub fixed_image: Option<String>,
    pub mandatory: Option<String>,
    pub interface: Option<String>,
    pub instance: Option<Instance>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub extension: Vec<Extension>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub name: Option<String>,
    pub brief_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slot {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub slot_option: Vec<SlotOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotOption {
    pub name: Option<String>,
    pub dev_name: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareList {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RamOption {
    pub name: Option<String>,
    pub default: Option<String>,
    pub content: Option<String>,
}
