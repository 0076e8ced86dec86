//! Identifier generation.
//!
//! Two layouts are produced, both rendered as 8-4-4-4-12 lowercase hex:
//!
//! - [`IdentifierFormat::V4`]: 30 uniformly random hex digits, a literal `4`
//!   leading group 3, and a group-4 lead digit from `{8, 9, a, b}`.
//! - [`IdentifierFormat::V1`]: the clock's Unix milliseconds spread over
//!   groups 1-3 (low 32 bits, next 16, next 12 under a `1` version nibble),
//!   a random 14-bit sequence under the `10` variant bits in group 4, and a
//!   random 48-bit node in group 5.
//!
//! Randomness and time come from the [`Entropy`] and [`Clock`] ports, so a
//! scripted source yields exact, repeatable strings.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::debug;

use crate::context::ServiceContext;
use crate::identifier::{Identifier, IdentifierFormat, IDENTIFIER_LEN};
use crate::ports::{Clock, Entropy};

/// Smallest quantity a single request may ask for.
pub const MIN_COUNT: u32 = 1;
/// Largest quantity a single request may ask for.
pub const MAX_COUNT: u32 = 100;

const V4_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

const SEQUENCE_BOUND: u64 = 1 << 14;
const NODE_BOUND: u64 = 1 << 48;

/// A requested quantity outside `MIN_COUNT..=MAX_COUNT`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Please enter a number between 1 and 100 (got {count})")]
pub struct ValidationError {
    /// The rejected count.
    pub count: u32,
}

/// A validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierRequest {
    format: IdentifierFormat,
    count: u32,
}

impl IdentifierRequest {
    /// Validates `count` and builds a request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `count` is outside `1..=100`. Counts
    /// are never clamped.
    pub fn new(format: IdentifierFormat, count: u32) -> Result<Self, ValidationError> {
        if (MIN_COUNT..=MAX_COUNT).contains(&count) {
            Ok(Self { format, count })
        } else {
            Err(ValidationError { count })
        }
    }

    /// The requested layout.
    #[must_use]
    pub fn format(&self) -> IdentifierFormat {
        self.format
    }

    /// The requested quantity.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Produces identifiers from injected clock and entropy sources.
///
/// Holds no state of its own; every call is independent.
#[derive(Clone, Copy)]
pub struct IdentifierGenerator<'a> {
    clock: &'a dyn Clock,
    entropy: &'a dyn Entropy,
}

impl<'a> IdentifierGenerator<'a> {
    /// Creates a generator over the given ports.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, entropy: &'a dyn Entropy) -> Self {
        Self { clock, entropy }
    }

    /// Creates a generator using the clock and entropy of a service context.
    #[must_use]
    pub fn from_context(ctx: &'a ServiceContext) -> Self {
        Self::new(ctx.clock.as_ref(), ctx.entropy.as_ref())
    }

    /// Generates `count` identifiers in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `count` is outside `1..=100`; nothing
    /// is generated in that case.
    pub fn generate(
        &self,
        format: IdentifierFormat,
        count: u32,
    ) -> Result<Vec<Identifier>, ValidationError> {
        let request = IdentifierRequest::new(format, count)?;
        Ok(self.generate_request(&request))
    }

    /// Generates the identifiers for an already validated request, in
    /// generation order.
    #[must_use]
    pub fn generate_request(&self, request: &IdentifierRequest) -> Vec<Identifier> {
        let ids: Vec<Identifier> = (0..request.count)
            .map(|_| match request.format {
                IdentifierFormat::V4 => self.random_v4(),
                IdentifierFormat::V1 => self.time_based_v1(),
            })
            .collect();
        debug!(format = %request.format, count = ids.len(), "generated identifiers");
        ids
    }

    fn hex_digit(&self, bound: u64, mask: u64) -> char {
        let value = self.entropy.below(bound) | mask;
        char::from(HEX_DIGITS[usize::try_from(value & 0xf).unwrap_or_default()])
    }

    fn random_v4(&self) -> Identifier {
        let raw: String = V4_TEMPLATE
            .chars()
            .map(|slot| match slot {
                'x' => self.hex_digit(16, 0),
                'y' => self.hex_digit(4, 0x8),
                literal => literal,
            })
            .collect();
        Identifier::from_canonical(raw)
    }

    fn time_based_v1(&self) -> Identifier {
        let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let sequence = self.entropy.below(SEQUENCE_BOUND);
        let node = self.entropy.below(NODE_BOUND);

        let time_low = millis & 0xffff_ffff;
        let time_mid = (millis >> 32) & 0xffff;
        let time_high = ((millis >> 48) & 0x0fff) | 0x1000;
        let seq_high = (sequence >> 8) | 0x80;
        let seq_low = sequence & 0xff;

        let mut raw = String::with_capacity(IDENTIFIER_LEN);
        let _ = write!(
            raw,
            "{time_low:08x}-{time_mid:04x}-{time_high:04x}-{seq_high:02x}{seq_low:02x}-{node:012x}"
        );
        Identifier::from_canonical(raw)
    }
}
