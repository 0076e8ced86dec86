//! Clipboard port for handing text to the user's system clipboard.

use thiserror::Error;

/// Failure to place text on the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard mechanism is available on this platform.
    #[error("no clipboard tool available")]
    Unavailable,
    /// A clipboard tool was found but failed.
    #[error("clipboard tool `{tool}` failed: {reason}")]
    ToolFailed {
        /// Name of the tool that was invoked.
        tool: String,
        /// Human-readable failure description.
        reason: String,
    },
}

/// Accepts a string and makes it available on the system clipboard.
///
/// Callers treat any error as "fall back to manual selection" rather than
/// as a hard failure.
pub trait Clipboard: Send + Sync {
    /// Copies `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the text could not be placed on the
    /// clipboard.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
