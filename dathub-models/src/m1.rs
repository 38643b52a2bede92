//! M1 music-player DAT: a version plus Listxml-shaped machines.

use serde::{Deserialize, Serialize};

use crate::listxml;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct M1 {
    pub version: Option<String>,
    #[serde(default, deserialize_with = "crate::common::skip_nulls")]
    pub games: Vec<listxml::Machine>,
}
