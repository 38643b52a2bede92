//! Format identifiers for every supported DAT format, plus the JSON bridge
//! that moves serialized models in and out of the hub.

use serde::Serialize;
use serde::de::DeserializeOwned;

use dathub_core::MetadataFile;
use dathub_models::{
    HashType, RecordKind, archive_dot_org, attract_mode, clrmamepro, doscenter, everdrive_smdb,
    hashfile, listrom, listxml, logiqx, m1, offline_list, openmsx, romcenter, separated_value,
    software_list,
};

use crate::HubConvert;
use crate::error::ConvertError;

/// Format identifiers. Centralizes short names, display names and aliases
/// so callers never match on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    ArchiveDotOrg,
    AttractMode,
    ClrMamePro,
    DosCenter,
    EverdriveSmdb,
    Hashfile,
    Listrom,
    Listxml,
    Logiqx,
    M1,
    OfflineList,
    OpenMsx,
    RomCenter,
    SeparatedValue,
    SoftwareList,
}

/// All format variants in registration order.
const ALL_FORMATS: &[Format] = &[
    Format::ArchiveDotOrg,
    Format::AttractMode,
    Format::ClrMamePro,
    Format::DosCenter,
    Format::EverdriveSmdb,
    Format::Hashfile,
    Format::Listrom,
    Format::Listxml,
    Format::Logiqx,
    Format::M1,
    Format::OfflineList,
    Format::OpenMsx,
    Format::RomCenter,
    Format::SeparatedValue,
    Format::SoftwareList,
];

impl Format {
    /// Canonical short name used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::ArchiveDotOrg => "archive",
            Self::AttractMode => "attractmode",
            Self::ClrMamePro => "clrmamepro",
            Self::DosCenter => "doscenter",
            Self::EverdriveSmdb => "smdb",
            Self::Hashfile => "hashfile",
            Self::Listrom => "listrom",
            Self::Listxml => "listxml",
            Self::Logiqx => "logiqx",
            Self::M1 => "m1",
            Self::OfflineList => "offlinelist",
            Self::OpenMsx => "openmsx",
            Self::RomCenter => "romcenter",
            Self::SeparatedValue => "sv",
            Self::SoftwareList => "softwarelist",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ArchiveDotOrg => "Internet Archive file listing",
            Self::AttractMode => "AttractMode romlist",
            Self::ClrMamePro => "ClrMamePro DAT",
            Self::DosCenter => "DOSCenter DAT",
            Self::EverdriveSmdb => "Everdrive SMDB",
            Self::Hashfile => "Hash list (SFV, MD5, SHA*, SpamSum)",
            Self::Listrom => "MAME -listrom output",
            Self::Listxml => "MAME -listxml output",
            Self::Logiqx => "Logiqx XML DAT",
            Self::M1 => "M1 XML DAT",
            Self::OfflineList => "OfflineList XML DAT",
            Self::OpenMsx => "openMSX software database",
            Self::RomCenter => "RomCenter DAT",
            Self::SeparatedValue => "Separated-value list (CSV, TSV, SSV)",
            Self::SoftwareList => "MAME software list",
        }
    }

    /// All accepted names for this format (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::ArchiveDotOrg => &["archive", "archivedotorg", "archive.org", "ia"],
            Self::AttractMode => &["attractmode", "am"],
            Self::ClrMamePro => &["clrmamepro", "cmp"],
            Self::DosCenter => &["doscenter", "dc"],
            Self::EverdriveSmdb => &["smdb", "everdrive", "everdrivesmdb"],
            Self::Hashfile => &["hashfile", "hash", "sfv"],
            Self::Listrom => &["listrom", "lr"],
            Self::Listxml => &["listxml", "mame", "lx"],
            Self::Logiqx => &["logiqx", "xml"],
            Self::M1 => &["m1"],
            Self::OfflineList => &["offlinelist", "ol"],
            Self::OpenMsx => &["openmsx", "msx"],
            Self::RomCenter => &["romcenter", "rc"],
            Self::SeparatedValue => &["sv", "csv", "tsv", "ssv", "separatedvalue"],
            Self::SoftwareList => &["softwarelist", "sl"],
        }
    }

    /// The output-shape selector `from_hub` takes, if any.
    pub fn variant_selector(&self) -> Option<VariantSelector> {
        match self {
            Self::ClrMamePro | Self::Logiqx => Some(VariantSelector::Record),
            Self::Hashfile => Some(VariantSelector::Hash),
            _ => None,
        }
    }

    pub fn all() -> &'static [Format] {
        ALL_FORMATS
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Format`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format: '{0}'")]
pub struct FormatParseError(pub String);

impl std::str::FromStr for Format {
    type Err = FormatParseError;

    /// Matches against `short_name()` and every entry of `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_FORMATS
            .iter()
            .copied()
            .find(|format| {
                format.short_name() == lower || format.aliases().iter().any(|a| *a == lower)
            })
            .ok_or_else(|| FormatParseError(s.to_string()))
    }
}

/// The choice a format's writer needs that the hub does not record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantSelector {
    /// `game` or `machine` records ([`RecordKind`]).
    Record,
    /// Which hash list to fill ([`HashType`]).
    Hash,
}

impl VariantSelector {
    /// Command-line flag name (without the leading `--`).
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Hash => "hash",
        }
    }

    /// Every value the selector accepts, by short name.
    pub fn values(&self) -> Vec<&'static str> {
        match self {
            Self::Record => [RecordKind::Game, RecordKind::Machine]
                .iter()
                .map(|k| k.as_str())
                .collect(),
            Self::Hash => HashType::all().iter().map(|h| h.short_name()).collect(),
        }
    }
}

impl std::fmt::Display for VariantSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.flag())
    }
}

/// Output-shape choices for formats whose `from_hub` takes a selector.
/// Formats without one ignore these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub record: RecordKind,
    pub hash: HashType,
}

impl ConvertOptions {
    /// The chosen value for `selector`, as its short name.
    pub fn selected(&self, selector: VariantSelector) -> &'static str {
        match selector {
            VariantSelector::Record => self.record.as_str(),
            VariantSelector::Hash => self.hash.short_name(),
        }
    }
}

// -- JSON bridge --

fn read_json<T>(input: &str) -> Result<MetadataFile, ConvertError>
where
    T: HubConvert + DeserializeOwned,
{
    let document: T = serde_json::from_str(input)?;
    Ok(document.to_hub())
}

fn write_json<T>(hub: &MetadataFile, variant: T::Variant, pretty: bool) -> Result<String, ConvertError>
where
    T: HubConvert + Serialize,
{
    let document = T::from_hub(hub, variant);
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Deserialize a `format` document from JSON and map it into the hub.
pub fn hub_from_json(format: Format, input: &str) -> Result<MetadataFile, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::invalid_input(format!(
            "empty {} document",
            format.short_name()
        )));
    }
    log::debug!("Reading {} document into the hub", format.short_name());

    match format {
        Format::ArchiveDotOrg => read_json::<archive_dot_org::Files>(input),
        Format::AttractMode => read_json::<attract_mode::MetadataFile>(input),
        Format::ClrMamePro => read_json::<clrmamepro::MetadataFile>(input),
        Format::DosCenter => read_json::<doscenter::MetadataFile>(input),
        Format::EverdriveSmdb => read_json::<everdrive_smdb::MetadataFile>(input),
        Format::Hashfile => read_json::<hashfile::Hashfile>(input),
        Format::Listrom => read_json::<listrom::MetadataFile>(input),
        Format::Listxml => read_json::<listxml::Mame>(input),
        Format::Logiqx => read_json::<logiqx::Datafile>(input),
        Format::M1 => read_json::<m1::M1>(input),
        Format::OfflineList => read_json::<offline_list::Dat>(input),
        Format::OpenMsx => read_json::<openmsx::SoftwareDb>(input),
        Format::RomCenter => read_json::<romcenter::MetadataFile>(input),
        Format::SeparatedValue => read_json::<separated_value::MetadataFile>(input),
        Format::SoftwareList => read_json::<software_list::SoftwareList>(input),
    }
}

/// Build a `format` document from the hub and serialize it as JSON.
pub fn hub_to_json(
    format: Format,
    hub: &MetadataFile,
    options: &ConvertOptions,
    pretty: bool,
) -> Result<String, ConvertError> {
    log::debug!(
        "Writing hub as {} ({} machines)",
        format.short_name(),
        hub.machines().len()
    );

    match format {
        Format::ArchiveDotOrg => write_json::<archive_dot_org::Files>(hub, (), pretty),
        Format::AttractMode => write_json::<attract_mode::MetadataFile>(hub, (), pretty),
        Format::ClrMamePro => write_json::<clrmamepro::MetadataFile>(hub, options.record, pretty),
        Format::DosCenter => write_json::<doscenter::MetadataFile>(hub, (), pretty),
        Format::EverdriveSmdb => write_json::<everdrive_smdb::MetadataFile>(hub, (), pretty),
        Format::Hashfile => write_json::<hashfile::Hashfile>(hub, options.hash, pretty),
        Format::Listrom => write_json::<listrom::MetadataFile>(hub, (), pretty),
        Format::Listxml => write_json::<listxml::Mame>(hub, (), pretty),
        Format::Logiqx => write_json::<logiqx::Datafile>(hub, options.record, pretty),
        Format::M1 => write_json::<m1::M1>(hub, (), pretty),
        Format::OfflineList => write_json::<offline_list::Dat>(hub, (), pretty),
        Format::OpenMsx => write_json::<openmsx::SoftwareDb>(hub, (), pretty),
        Format::RomCenter => write_json::<romcenter::MetadataFile>(hub, (), pretty),
        Format::SeparatedValue => write_json::<separated_value::MetadataFile>(hub, (), pretty),
        Format::SoftwareList => write_json::<software_list::SoftwareList>(hub, (), pretty),
    }
}

/// Convert a JSON document of one format into a JSON document of another.
pub fn convert_json(
    from: Format,
    to: Format,
    input: &str,
    options: &ConvertOptions,
    pretty: bool,
) -> Result<String, ConvertError> {
    let hub = hub_from_json(from, input)?;
    hub_to_json(to, &hub, options, pretty)
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
