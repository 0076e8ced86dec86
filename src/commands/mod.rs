//! Command dispatch and handlers.

pub mod codec;
pub mod generate;
pub mod inspect;
pub mod share;
#[cfg(test)]
mod testing;

use std::env;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;
use crate::notice::Notice;

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "UTILKIT_RECORD";
/// Environment variable naming a cassette file or directory to replay.
pub const REPLAY_ENV: &str = "UTILKIT_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `UTILKIT_REPLAY` is set, clock and entropy are served from the named
/// cassette file or recording directory. Otherwise, when `UTILKIT_RECORD` is
/// set, live clock and entropy calls are recorded to per-port cassettes in
/// that directory.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = if let Ok(path) = env::var(REPLAY_ENV) {
        info!(path = %path, "replaying cassettes");
        (ServiceContext::replaying_path(Path::new(&path))?, None)
    } else if let Ok(path) = env::var(RECORD_ENV) {
        info!(path = %path, "recording cassettes");
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let stdout = io::stdout();
    let result = dispatch_with_context(command, &ctx, &mut stdout.lock());

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context, writing results to `out`.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::Generate { format, count, json, copy, copy_item } => {
            let options = generate::GenerateOptions {
                format: *format,
                count: *count,
                json: *json,
                copy: match (*copy, copy_item) {
                    (_, Some(index)) => generate::CopyTarget::Item(*index),
                    (true, None) => generate::CopyTarget::All,
                    (false, None) => generate::CopyTarget::None,
                },
            };
            generate::run(ctx, &options, out)
        }
        Command::Inspect { id } => inspect::run(id, out),
        Command::Encode { text, copy } => {
            codec::run_encode(ctx, &read_input(text.as_deref())?, *copy, out)
        }
        Command::Decode { text, copy } => {
            codec::run_decode(ctx, &read_input(text.as_deref())?, *copy, out)
        }
        Command::Share { page_url, text, copy } => {
            share::run(ctx, page_url, &read_input(text.as_deref())?, *copy, out)
        }
    }
}

/// Use the argument when given, otherwise read stdin with one trailing
/// newline removed.
fn read_input(arg: Option<&str>) -> Result<String, String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(|e| format!("Failed to read stdin: {e}"))?;
    Ok(strip_trailing_newline(buf))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Write one line of command output.
pub(crate) fn emit(out: &mut dyn Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|e| format!("Failed to write output: {e}"))
}

/// Put `text` on the clipboard and confirm with `confirmation`.
///
/// A clipboard failure never fails the command. The text is already on
/// stdout, so an info notice carrying `fallback` points the user there.
pub(crate) fn copy_to_clipboard(
    ctx: &ServiceContext,
    text: &str,
    confirmation: impl Into<String>,
    fallback: &str,
) {
    match ctx.clipboard.copy(text) {
        Ok(()) => Notice::success(confirmation).show(),
        Err(e) => {
            debug!(error = %e, "clipboard copy failed");
            Notice::info(fallback).show();
        }
    }
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
