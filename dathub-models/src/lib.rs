//! Concrete object models for every supported DAT format.
//!
//! These types are what each format's reader produces and writer consumes.
//! They carry no parsing logic: an XML, delimited-text or INI lexer fills
//! them in, and `dathub-convert` maps them to and from the hub.
//!
//! Scalar fields are `Option<String>` so that an absent attribute stays
//! distinguishable from an empty one. Repeated children are plain `Vec`s.

pub mod archive_dot_org;
pub mod attract_mode;
pub mod clrmamepro;
pub mod common;
pub mod doscenter;
pub mod everdrive_smdb;
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

pub use common::{GameRecord, RecordKind, RecordKindParseError, skip_nulls};
pub use hashfile::{HashType, HashTypeParseError};
