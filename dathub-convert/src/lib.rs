//! Bidirectional adapters between concrete DAT formats and the hub.
//!
//! Each supported format implements [`HubConvert`]: `to_hub` maps the
//! format's object model into a hub [`MetadataFile`], and `from_hub` builds
//! the object model back from any hub document, regardless of which format
//! produced it. Converting format A to format B is always
//! `B::from_hub(&a.to_hub(), variant)`; adapters never talk to each other.

pub mod archive_dot_org;
pub mod attract_mode;
pub mod clrmamepro;
pub mod doscenter;
pub mod error;
pub mod everdrive_smdb;
pub mod format;
pub mod hashfile;
pub mod listrom;
pub mod listxml;
pub mod logiqx;
pub mod m1;
pub mod offline_list;
pub mod openmsx;
pub mod romcenter;
pub mod separated_value;
pub mod software_list;
mod util;

pub use dathub_core::{Entity, EntityKind, MetadataFile, Value, keys};
pub use dathub_models::{HashType, RecordKind};
pub use error::ConvertError;
pub use format::{ConvertOptions, Format, FormatParseError, VariantSelector};

/// A concrete format that can be mapped to and from the hub.
pub trait HubConvert: Sized {
    /// Selects among concrete shapes the hub does not distinguish
    /// (`game` vs `machine` records, which hash a hash list carries).
    /// Formats without such a choice use `()`.
    type Variant: Copy + Default;

    /// Map this document into a fresh hub tree.
    fn to_hub(&self) -> MetadataFile;

    /// Build this format's document from a hub tree, reading only the keys
    /// the format understands.
    fn from_hub(hub: &MetadataFile, variant: Self::Variant) -> Self;
}

/// Convert an optional document. `None` in gives `None` out.
pub fn to_hub<T: HubConvert>(document: Option<&T>) -> Option<MetadataFile> {
    document.map(HubConvert::to_hub)
}

/// Build an optional document from an optional hub. `None` in gives `None` out.
pub fn from_hub<T: HubConvert>(hub: Option<&MetadataFile>, variant: T::Variant) -> Option<T> {
    hub.map(|hub| T::from_hub(hub, variant))
}

/// Convert one format into another through the hub.
pub fn convert<S: HubConvert, T: HubConvert>(source: &S, variant: T::Variant) -> T {
    T::from_hub(&source.to_hub(), variant)
}
