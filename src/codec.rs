//! Text <-> Base64 conversion.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use thiserror::Error;

/// Standard alphabet that, like a browser's `atob`, accepts missing `=`
/// padding and non-zero trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a conversion was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Nothing but whitespace was given to encode.
    #[error("Please enter some text to encode")]
    EmptyText,
    /// Nothing was given to decode.
    #[error("Please enter Base64 text to decode")]
    EmptyBase64,
    /// The input is not Base64, or does not decode to UTF-8 text.
    #[error("Error decoding Base64: Invalid Base64 string")]
    InvalidBase64,
}

/// Encodes the UTF-8 bytes of `text` as padded standard Base64.
///
/// The text is encoded as given, surrounding whitespace included.
///
/// # Errors
///
/// Returns [`CodecError::EmptyText`] when `text` is empty or only whitespace.
pub fn encode(text: &str) -> Result<String, CodecError> {
    if text.trim().is_empty() {
        return Err(CodecError::EmptyText);
    }
    Ok(STANDARD.encode(text.as_bytes()))
}

/// Decodes standard Base64 back into UTF-8 text.
///
/// ASCII whitespace anywhere in the input is ignored, so line-wrapped
/// Base64 decodes, and `=` padding is optional.
///
/// # Errors
///
/// Returns [`CodecError::EmptyBase64`] for blank input and
/// [`CodecError::InvalidBase64`] when decoding fails or the bytes are not
/// valid UTF-8.
pub fn decode(text: &str) -> Result<String, CodecError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(CodecError::EmptyBase64);
    }
    let bytes = LENIENT.decode(compact).map_err(|_| CodecError::InvalidBase64)?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidBase64)
}
