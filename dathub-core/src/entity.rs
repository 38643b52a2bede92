//! The attribute entity: the hub's only structural primitive.
//!
//! An [`Entity`] is a string-keyed bag of [`Value`]s tagged with the
//! [`EntityKind`] it represents. Every reader is total: asking for a key that
//! is missing, or that holds a different shape than requested, yields `None`
//! (or an empty sequence) instead of an error. This is what lets one schema
//! serve formats that each populate a different subset of keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::EntityKind;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
    Node(Entity),
    NodeList(Vec<Entity>),
}

impl Value {
    /// Short human-readable name of the value's shape.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::Node(_) => "node",
            Self::NodeList(_) => "node list",
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Entity> for Value {
    fn from(value: Entity) -> Self {
        Self::Node(value)
    }
}

impl From<Vec<Entity>> for Value {
    fn from(value: Vec<Entity>) -> Self {
        Self::NodeList(value)
    }
}

/// A typed, string-keyed attribute container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    kind: EntityKind,
    #[serde(default)]
    fields: BTreeMap<String, Value>,
}

impl Entity {
    /// Create an empty entity of the given kind.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_kind(&self, kind: EntityKind) -> bool {
        self.kind == kind
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over all keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over all `(key, value)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Store `value` only when it is `Some`. Absent concrete fields must stay
    /// absent in the hub.
    pub fn set_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Store a string sequence only when it is non-empty.
    pub fn set_strings(&mut self, key: &str, values: Vec<String>) {
        if !values.is_empty() {
            self.set(key, Value::List(values));
        }
    }

    /// Store a nested entity when present.
    pub fn set_entity(&mut self, key: &str, entity: Option<Entity>) {
        if let Some(entity) = entity {
            self.set(key, Value::Node(entity));
        }
    }

    /// Store a sequence of nested entities only when it is non-empty.
    pub fn set_entities(&mut self, key: &str, entities: Vec<Entity>) {
        if !entities.is_empty() {
            self.set(key, Value::NodeList(entities));
        }
    }

    // -- Typed readers -------------------------------------------------------

    /// Borrow the scalar stored under `key`.
    pub fn read_str(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            Value::Scalar(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The scalar stored under `key`, if present and scalar.
    pub fn read_string(&self, key: &str) -> Option<String> {
        self.read_str(key).map(str::to_string)
    }

    /// The string sequence stored under `key`.
    ///
    /// A scalar is wrapped into a one-element sequence, so formats that use a
    /// single value where others use a list read each other's data.
    pub fn read_string_array(&self, key: &str) -> Option<Vec<String>> {
        match self.fields.get(key)? {
            Value::Scalar(s) => Some(vec![s.clone()]),
            Value::List(items) => Some(items.clone()),
            _ => None,
        }
    }

    /// The scalar under `key` parsed as a signed integer.
    pub fn read_i64(&self, key: &str) -> Option<i64> {
        self.read_str(key)?.trim().parse().ok()
    }

    /// The scalar under `key` parsed as an unsigned integer.
    pub fn read_u64(&self, key: &str) -> Option<u64> {
        self.read_str(key)?.trim().parse().ok()
    }

    /// The scalar under `key` interpreted as a yes/no flag.
    pub fn read_bool(&self, key: &str) -> Option<bool> {
        match self.read_str(key)?.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => Some(true),
            "no" | "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// The nested entity under `key`, if it has the expected kind.
    pub fn read(&self, key: &str, kind: EntityKind) -> Option<&Entity> {
        match self.fields.get(key)? {
            Value::Node(entity) if entity.is_kind(kind) => Some(entity),
            _ => None,
        }
    }

    /// The nested entities under `key` that have the expected kind.
    ///
    /// A single nested entity is treated as a one-element sequence. Elements
    /// of any other kind are skipped, so the result never contains a foreign
    /// shape. Missing keys and non-entity values yield an empty vector.
    pub fn read_all(&self, key: &str, kind: EntityKind) -> Vec<&Entity> {
        match self.fields.get(key) {
            Some(Value::Node(entity)) if entity.is_kind(kind) => vec![entity],
            Some(Value::NodeList(entities)) => {
                entities.iter().filter(|e| e.is_kind(kind)).collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "tests/entity_tests.rs"]
mod tests;
