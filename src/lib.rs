//! Core library entry for the `utilkit` CLI.
//!
//! The centre of the crate is [`generator::IdentifierGenerator`], which
//! synthesizes random (v4-style) and time-based (v1-style) identifiers from
//! injectable [`ports::Clock`] and [`ports::Entropy`] sources. The Base64
//! [`codec`] and QR [`share`] helpers sit beside it.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod context;
pub mod generator;
pub mod identifier;
pub mod logging;
pub mod notice;
pub mod ports;
pub mod share;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// `--help` and `--version` are printed to stdout and count as success.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => {
            return Err(err.to_string().trim_start_matches("error: ").trim_end().to_string());
        }
    };
    commands::dispatch(&cli.command)
}
