//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dathub_convert::{Format, HashType, RecordKind};

#[derive(Parser)]
#[command(name = "dathub")]
#[command(about = "Convert DAT metadata between formats through a common hub", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List all supported formats
    Formats,

    /// Convert a JSON-serialized document from one format to another
    Convert {
        /// Source format name or alias (e.g., logiqx, cmp, csv). Defaults to
        /// the inner extension of the input name (`set.logiqx.json`)
        #[arg(short, long)]
        from: Option<Format>,

        /// Target format name or alias
        #[arg(short, long)]
        to: Format,

        /// Record shape for ClrMamePro/Logiqx output (game or machine)
        #[arg(long)]
        record: Option<RecordKind>,

        /// Hash kind for hash-list output (sfv, md5, sha1, sha256, sha384, sha512, spamsum)
        #[arg(long)]
        hash: Option<HashType>,

        /// Write compact JSON even if settings ask for pretty output
        #[arg(long)]
        compact: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input file, or `-` for stdin
        input: PathBuf,
    },

    /// Summarize the hub built from a document
    Inspect {
        /// Format of the input document. Defaults to the inner extension of
        /// the input name
        #[arg(short, long)]
        from: Option<Format>,

        /// Print the full hub tree as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Input file, or `-` for stdin
        input: PathBuf,
    },

    /// Show or locate the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved conversion settings and their sources
    Show,

    /// Print the settings file path
    Path,
}
