//! `utilkit encode` and `utilkit decode` commands.

use std::io::Write;

use super::{copy_to_clipboard, emit};
use crate::codec;
use crate::context::ServiceContext;
use crate::notice::Notice;

const COPIED: &str = "Result copied to clipboard!";
const SELECT_MANUALLY: &str = "Clipboard unavailable; select the result above to copy it";

/// Execute the `encode` command, optionally copying the Base64 result.
///
/// # Errors
///
/// Returns an error string for blank input or when output cannot be written.
pub fn run_encode(
    ctx: &ServiceContext,
    text: &str,
    copy: bool,
    out: &mut dyn Write,
) -> Result<(), String> {
    let encoded = codec::encode(text).map_err(|e| e.to_string())?;
    emit(out, &encoded)?;
    Notice::success("Text encoded to Base64 successfully!").show();
    if copy {
        copy_to_clipboard(ctx, &encoded, COPIED, SELECT_MANUALLY);
    }
    Ok(())
}

/// Execute the `decode` command, optionally copying the decoded text.
///
/// # Errors
///
/// Returns an error string for blank or invalid Base64, or when output
/// cannot be written.
pub fn run_decode(
    ctx: &ServiceContext,
    text: &str,
    copy: bool,
    out: &mut dyn Write,
) -> Result<(), String> {
    let decoded = codec::decode(text).map_err(|e| e.to_string())?;
    emit(out, &decoded)?;
    Notice::success("Base64 decoded successfully!").show();
    if copy {
        copy_to_clipboard(ctx, &decoded, COPIED, SELECT_MANUALLY);
    }
    Ok(())
}
