//! Adapter implementations for the port traits.
//!
//! - `live`: real system clock, thread RNG and clipboard tools.
//! - `recording`: wraps a live adapter and captures each call to a cassette.
//! - `replaying`: serves previously recorded outputs from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
