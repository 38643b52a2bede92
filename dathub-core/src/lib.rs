//! Hub data model shared by every DAT format adapter.
//!
//! The hub is a tree of [`Entity`] values: string-keyed attribute bags tagged
//! with an [`EntityKind`]. Canonical key names live in [`schema::keys`].

pub mod entity;
pub mod schema;

pub use entity::{Entity, Value};
pub use schema::{EntityKind, MetadataFile, keys};
