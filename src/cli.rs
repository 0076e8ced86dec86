//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::identifier::IdentifierFormat;
use crate::share::DEFAULT_PAGE_URL;

/// Top-level CLI parser for `utilkit`.
#[derive(Debug, Parser)]
#[command(name = "utilkit", version, about = "Generate UUIDs, convert Base64, build QR share links")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one or more UUIDs.
    Generate {
        /// Layout: `v4` (random) or `v1` (time-based).
        #[arg(short, long, value_enum, default_value_t = IdentifierFormat::V4)]
        format: IdentifierFormat,
        /// How many to generate (1-100).
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
        /// Print a JSON array instead of one UUID per line.
        #[arg(long)]
        json: bool,
        /// Copy the whole batch to the clipboard, one UUID per line.
        #[arg(long, conflicts_with = "copy_item")]
        copy: bool,
        /// Copy only the UUID at this 1-based position.
        #[arg(long, value_name = "INDEX")]
        copy_item: Option<usize>,
    },
    /// Show the layout and embedded timestamp of a UUID.
    Inspect {
        /// The UUID to inspect.
        id: String,
    },
    /// Encode text as Base64.
    Encode {
        /// Text to encode; read from stdin when omitted.
        text: Option<String>,
        /// Also copy the Base64 result to the clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Decode Base64 back into text.
    Decode {
        /// Base64 to decode; read from stdin when omitted.
        text: Option<String>,
        /// Also copy the decoded text to the clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Build a shareable viewer link for QR content.
    Share {
        /// URL of the QR generator page the link is relative to.
        #[arg(long, env = "UTILKIT_PAGE_URL", default_value = DEFAULT_PAGE_URL)]
        page_url: String,
        /// Content the QR code carries; read from stdin when omitted.
        text: Option<String>,
        /// Also copy the link to the clipboard.
        #[arg(long)]
        copy: bool,
    },
}
