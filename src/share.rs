//! Shareable viewer links for QR content.

use thiserror::Error;
use url::Url;

/// Page the QR tool is served from when nothing else is configured.
pub const DEFAULT_PAGE_URL: &str = "http://localhost/qr-generator.html";

const QR_PAGE: &str = "qr-generator.html";
const VIEWER_PAGE: &str = "viewer.html";

/// Why a share link could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    /// There is no content to share.
    #[error("Please enter some text to share")]
    EmptyContent,
    /// The page URL could not be parsed.
    #[error("invalid page URL {url:?}: {reason}")]
    InvalidPageUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        reason: String,
    },
}

/// Builds the viewer link that displays `content`.
///
/// The viewer lives next to the QR page: the link is the page's origin and
/// path with `qr-generator.html` dropped, followed by
/// `viewer.html?content=<percent-encoded content>`. Query and fragment of the
/// page URL are ignored. Content is trimmed before encoding.
///
/// # Errors
///
/// Returns [`ShareError::EmptyContent`] for blank content and
/// [`ShareError::InvalidPageUrl`] when `page_url` does not parse.
pub fn share_link(page_url: &str, content: &str) -> Result<String, ShareError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ShareError::EmptyContent);
    }

    let page = Url::parse(page_url).map_err(|e| ShareError::InvalidPageUrl {
        url: page_url.to_string(),
        reason: e.to_string(),
    })?;
    let base =
        format!("{}{}", page.origin().ascii_serialization(), page.path().replacen(QR_PAGE, "", 1));

    Ok(format!("{base}{VIEWER_PAGE}?content={}", urlencoding::encode(content)))
}
