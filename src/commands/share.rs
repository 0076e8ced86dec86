//! `utilkit share` command.

use std::io::Write;

use super::{copy_to_clipboard, emit};
use crate::context::ServiceContext;
use crate::notice::Notice;
use crate::share::share_link;

/// Execute the `share` command, optionally copying the link.
///
/// # Errors
///
/// Returns an error string for blank content, an unparseable page URL, or
/// when output cannot be written.
pub fn run(
    ctx: &ServiceContext,
    page_url: &str,
    content: &str,
    copy: bool,
    out: &mut dyn Write,
) -> Result<(), String> {
    let link = share_link(page_url, content).map_err(|e| e.to_string())?;
    emit(out, &link)?;
    Notice::info("Shareable link generated! The QR code will open this URL.").show();
    if copy {
        copy_to_clipboard(
            ctx,
            &link,
            "URL copied to clipboard!",
            "Clipboard unavailable; select the URL above to copy it",
        );
    }
    Ok(())
}
