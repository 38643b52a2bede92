//! Conversion settings (`~/.config/dathub/settings.toml`).
//!
//! Every value resolves through a priority chain: command-line flag, then
//! the `[convert]` table of the settings file, then the built-in default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use dathub_convert::{ConvertOptions, HashType, RecordKind};

use crate::error::CliError;

/// Canonical path to the settings file: `~/.config/dathub/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("dathub").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub convert: ConvertSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ConvertSettings {
    pub record: Option<RecordKind>,
    pub hash: Option<HashType>,
    pub pretty: Option<bool>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    File,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::File => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl Settings {
    /// Load the settings file at `path`. A missing file yields the defaults;
    /// a file that exists but does not parse is an error.
    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    pub(crate) fn record(&self, flag: Option<RecordKind>) -> (RecordKind, SettingSource) {
        resolve(flag, self.convert.record)
    }

    pub(crate) fn hash(&self, flag: Option<HashType>) -> (HashType, SettingSource) {
        resolve(flag, self.convert.hash)
    }

    /// Pretty output is on unless the file turns it off or `--compact` is given.
    pub(crate) fn pretty(&self, compact: bool) -> (bool, SettingSource) {
        if compact {
            return (false, SettingSource::Flag);
        }
        match self.convert.pretty {
            Some(pretty) => (pretty, SettingSource::File),
            None => (true, SettingSource::Default),
        }
    }

    /// Resolve the writer options for a conversion.
    pub(crate) fn convert_options(
        &self,
        record: Option<RecordKind>,
        hash: Option<HashType>,
    ) -> ConvertOptions {
        ConvertOptions {
            record: self.record(record).0,
            hash: self.hash(hash).0,
        }
    }
}

fn resolve<T: Default>(flag: Option<T>, file: Option<T>) -> (T, SettingSource) {
    match (flag, file) {
        (Some(value), _) => (value, SettingSource::Flag),
        (None, Some(value)) => (value, SettingSource::File),
        (None, None) => (T::default(), SettingSource::Default),
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
