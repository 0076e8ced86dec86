//! User-facing status notices.
//!
//! Notices go to stderr so stdout only ever carries results that can be
//! piped or redirected.

use std::fmt;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The requested action completed.
    Success,
    /// The requested action was refused or failed.
    Error,
    /// Neutral information.
    Info,
}

impl NoticeKind {
    fn label(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A short message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    /// Confirmation after a batch of identifiers was generated.
    #[must_use]
    pub fn generated(count: usize) -> Self {
        let plural = if count == 1 { "" } else { "s" };
        Self::success(format!("{count} UUID{plural} generated successfully!"))
    }

    /// Writes the notice to stderr.
    pub fn show(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.message)
    }
}
