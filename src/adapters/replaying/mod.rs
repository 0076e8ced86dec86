//! Replaying adapters that replay recorded interactions.

pub mod clock;
pub mod entropy;

pub use clock::ReplayingClock;
pub use entropy::ReplayingEntropy;
