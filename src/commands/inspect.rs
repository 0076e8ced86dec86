//! `utilkit inspect` command.

use std::io::Write;

use chrono::{DateTime, SecondsFormat};

use super::emit;
use crate::identifier::Identifier;

/// Execute the `inspect` command.
///
/// Prints the version, the layout when it is one `generate` produces, the
/// variant bits, and for time-based identifiers the embedded timestamp.
///
/// # Errors
///
/// Returns an error string when `raw` is not a canonical identifier.
pub fn run(raw: &str, out: &mut dyn Write) -> Result<(), String> {
    let id = raw.trim().parse::<Identifier>().map_err(|e| e.to_string())?;

    emit(out, &format!("version: {}", id.version()))?;
    emit(
        out,
        &format!("format: {}", id.format().map_or_else(|| "unknown".to_string(), |f| f.to_string())),
    )?;
    emit(out, &format!("variant: {}", if id.has_reserved_variant() { "10xx" } else { "other" }))?;

    if let Some(millis) = id.embedded_millis() {
        let when = i64::try_from(millis)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .map_or_else(
                || "out of range".to_string(),
                |t| t.to_rfc3339_opts(SecondsFormat::Millis, true),
            );
        emit(out, &format!("timestamp: {when} ({millis} ms)"))?;
    }
    Ok(())
}
