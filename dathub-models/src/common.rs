//! Types shared by more than one format model.

use serde::{Deserialize, Deserializer, Serialize};

/// Which leaf shape a top-level ClrMamePro/Logiqx record uses.
///
/// Both shapes carry identical fields; only the element name differs
/// (`game` vs `machine`). The hub does not keep the distinction, so writers
/// pick one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Game,
    Machine,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Machine => "machine",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string doesn't name a record kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind: {0} (expected \"game\" or \"machine\")")]
pub struct RecordKindParseError(pub String);

impl std::str::FromStr for RecordKind {
    type Err = RecordKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "game" => Ok(Self::Game),
            "machine" => Ok(Self::Machine),
            _ => Err(RecordKindParseError(s.to_string())),
        }
    }
}

/// A top-level record that is either a `game` or a `machine`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameRecord<G> {
    Game(G),
    Machine(G),
}

impl<G> GameRecord<G> {
    pub fn new(kind: RecordKind, base: G) -> Self {
        match kind {
            RecordKind::Game => Self::Game(base),
            RecordKind::Machine => Self::Machine(base),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Game(_) => RecordKind::Game,
            Self::Machine(_) => RecordKind::Machine,
        }
    }

    pub fn base(&self) -> &G {
        match self {
            Self::Game(base) | Self::Machine(base) => base,
        }
    }

    pub fn base_mut(&mut self) -> &mut G {
        match self {
            Self::Game(base) | Self::Machine(base) => base,
        }
    }

    pub fn into_base(self) -> G {
        match self {
            Self::Game(base) | Self::Machine(base) => base,
        }
    }
}

/// Read a sequence, dropping `null` elements. A `null` sequence reads as
/// empty.
///
/// Partially filled documents carry holes in their arrays; the holes never
/// reach the adapters.
pub fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().flatten().collect())
}
