//! Live adapters for real external interactions.

pub mod clipboard;
pub mod clock;
pub mod entropy;

pub use clipboard::SystemClipboard;
pub use clock::LiveClock;
pub use entropy::ThreadEntropy;
