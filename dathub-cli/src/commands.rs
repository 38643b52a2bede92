pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod formats;
pub(crate) mod inspect;

use std::io::Read;
use std::path::Path;

use dathub_convert::Format;

use crate::error::CliError;

/// Read a whole input document; `-` reads stdin.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        return Ok(contents);
    }
    log::debug!("Reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

/// The explicit format, or the one named by the input's inner extension
/// (`pacman.logiqx.json` is Logiqx).
pub(crate) fn resolve_format(explicit: Option<Format>, input: &Path) -> Result<Format, CliError> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    let stem = Path::new(input.file_stem().unwrap_or_default());
    let name = stem
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            CliError::other(format!(
                "cannot tell the format of {}; pass --from",
                input.display()
            ))
        })?;
    let format = name.parse::<Format>()?;
    log::debug!("Detected {} from {}", format.short_name(), input.display());
    Ok(format)
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;

