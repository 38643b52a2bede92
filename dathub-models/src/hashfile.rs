//! Plain hash lists: SFV, `md5sum`/`sha1sum`-style files and SpamSum lists.
//!
//! A single physical file holds one hash kind. The model keeps one vector per
//! kind so a reader can fill whichever one it found.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hashfile {
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sfv: Vec<Sfv>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub md5: Vec<Md5>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sha1: Vec<Sha1>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sha256: Vec<Sha256>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sha384: Vec<Sha384>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub sha512: Vec<Sha512>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub spamsum: Vec<SpamSum>,
}

/// `filename crc32` line of an SFV file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sfv {
    pub file: Option<String>,
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Md5 {
    pub hash: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sha1 {
    pub hash: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sha256 {
    pub hash: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sha384 {
    pub hash: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sha512 {
    pub hash: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpamSum {
    pub hash: Option<String>,
    pub file: Option<String>,
}

/// The hash kind a hash list is written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    /// CRC32, written as an SFV file.
    #[default]
    Crc32,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    SpamSum,
}

/// All hash types in declaration order.
const ALL_HASH_TYPES: &[HashType] = &[
    HashType::Crc32,
    HashType::Md5,
    HashType::Sha1,
    HashType::Sha256,
    HashType::Sha384,
    HashType::Sha512,
    HashType::SpamSum,
];

impl HashType {
    pub fn all() -> &'static [HashType] {
        ALL_HASH_TYPES
    }

    /// Canonical short name, also the conventional file extension.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Crc32 => "sfv",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::SpamSum => "spamsum",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Crc32 => &["sfv", "crc", "crc32"],
            Self::Md5 => &["md5"],
            Self::Sha1 => &["sha1", "sha-1"],
            Self::Sha256 => &["sha256", "sha-256"],
            Self::Sha384 => &["sha384", "sha-384"],
            Self::Sha512 => &["sha512", "sha-512"],
            Self::SpamSum => &["spamsum", "ssdeep"],
        }
    }
}

impl std::fmt::Display for HashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when a string doesn't name a hash type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash type: {0}")]
pub struct HashTypeParseError(pub String);

impl std::str::FromStr for HashType {
    type Err = HashTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_HASH_TYPES
            .iter()
            .copied()
            .find(|t| t.aliases().contains(&lower.as_str()))
            .ok_or_else(|| HashTypeParseError(s.to_string()))
    }
}
