//! Identifier value type and its two layouts.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Length of an identifier in its canonical hyphenated form.
pub const IDENTIFIER_LEN: usize = 36;

/// Layout used when synthesizing an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum IdentifierFormat {
    /// Random layout with fixed version and variant bits (version 4 style).
    #[default]
    #[value(name = "v4", alias = "4")]
    V4,
    /// Time-ordered layout: millisecond timestamp, random sequence and node
    /// (version 1 style).
    #[value(name = "v1", alias = "1")]
    V1,
}

impl IdentifierFormat {
    /// The version nibble stamped into the first digit of group 3.
    #[must_use]
    pub const fn version(self) -> u8 {
        match self {
            Self::V4 => 4,
            Self::V1 => 1,
        }
    }

    fn from_version(version: usize) -> Option<Self> {
        match version {
            4 => Some(Self::V4),
            1 => Some(Self::V1),
            _ => None,
        }
    }
}

impl fmt::Display for IdentifierFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version())
    }
}

/// Reasons a string is not a canonical identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIdentifierError {
    /// Not a UUID at all.
    #[error("not a valid identifier: {0}")]
    Malformed(String),
    /// A UUID, but not in lowercase 8-4-4-4-12 hyphenated form.
    #[error("identifier must be lowercase 8-4-4-4-12 hexadecimal: {0}")]
    NotCanonical(String),
}

/// A 36-character identifier: five hyphen-separated lowercase hex groups of
/// lengths 8-4-4-4-12.
///
/// Produced by [`crate::generator::IdentifierGenerator`] or parsed from text.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps a string the generator has already laid out canonically.
    pub(crate) fn from_canonical(raw: String) -> Self {
        debug_assert_eq!(raw.len(), IDENTIFIER_LEN);
        Self(raw)
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn uuid(&self) -> Uuid {
        // Every constructor guarantees canonical text.
        Uuid::parse_str(&self.0).unwrap_or_default()
    }

    /// The version nibble (first digit of group 3).
    #[must_use]
    pub fn version(&self) -> usize {
        self.uuid().get_version_num()
    }

    /// The layout this identifier follows, if its version is one we produce.
    #[must_use]
    pub fn format(&self) -> Option<IdentifierFormat> {
        IdentifierFormat::from_version(self.version())
    }

    /// Whether the top two bits of group 4 are `10`.
    #[must_use]
    pub fn has_reserved_variant(&self) -> bool {
        self.uuid().get_variant() == uuid::Variant::RFC4122
    }

    /// For time-ordered identifiers, the Unix millisecond timestamp carried
    /// in groups 1-3 (low 32, next 16, next 12 bits).
    #[must_use]
    pub fn embedded_millis(&self) -> Option<u64> {
        if self.format() != Some(IdentifierFormat::V1) {
            return None;
        }
        let (low, mid, high, _) = self.uuid().as_fields();
        Some(u64::from(low) | (u64::from(mid) << 32) | (u64::from(high & 0x0fff) << 48))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::try_parse(s).map_err(|_| ParseIdentifierError::Malformed(s.into()))?;
        let canonical = uuid.hyphenated().to_string();
        if canonical != s {
            return Err(ParseIdentifierError::NotCanonical(s.into()));
        }
        Ok(Self(canonical))
    }
}
