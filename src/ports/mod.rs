//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator core and something
//! outside the process (time, randomness, the system clipboard).
//! Implementations live in `src/adapters/`.

pub mod clipboard;
pub mod clock;
pub mod entropy;

pub use clipboard::{Clipboard, ClipboardError};
pub use clock::Clock;
pub use entropy::Entropy;
