//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::{LiveClock, SystemClipboard, ThreadEntropy};
use crate::adapters::recording::{RecordingClock, RecordingEntropy};
use crate::adapters::replaying::{ReplayingClock, ReplayingEntropy};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::{Clipboard, ClipboardError, Clock, Entropy};

/// Bundles all port trait objects into a single context.
///
/// Built once per process and handed to each command. Constructors wire up
/// different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Random source for identifier digits.
    pub entropy: Box<dyn Entropy>,
    /// Destination for copy requests.
    pub clipboard: Box<dyn Clipboard>,
}

impl ServiceContext {
    /// Creates a live context with the system clock, thread RNG and system
    /// clipboard.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            entropy: Box::new(ThreadEntropy),
            clipboard: Box::new(SystemClipboard::new()),
        }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn with_ports(
        clock: Box<dyn Clock>,
        entropy: Box<dyn Entropy>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self { clock, entropy, clipboard }
    }

    /// Creates a recording context that captures clock and entropy calls
    /// into per-port cassettes under `dir`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(dir: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir)?;
        let ctx = Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&session.clock))),
            entropy: Box::new(RecordingEntropy::new(
                Box::new(ThreadEntropy),
                Arc::clone(&session.entropy),
            )),
            clipboard: Box::new(SystemClipboard::new()),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// cursors stay independent. Copy requests are never sent to the system
    /// clipboard while replaying.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteConfig::load_cassette(path)?)),
            entropy: Box::new(ReplayingEntropy::new(CassetteConfig::load_cassette(path)?)),
            clipboard: Box::new(ManualClipboard),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use a panicking adapter that
    /// fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            entropy: match replayers.entropy {
                Some(r) => Box::new(ReplayingEntropy::new(r)),
                None => Box::new(PanickingEntropy),
            },
            clipboard: Box::new(ManualClipboard),
        })
    }

    /// Replays either a recording directory (per-port cassettes) or a single
    /// cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or a cassette cannot be loaded.
    pub fn replaying_path(path: &Path) -> Result<Self, String> {
        if path.is_dir() {
            Self::replaying_from(&CassetteConfig::from_dir(path))
        } else if path.is_file() {
            Self::replaying(path)
        } else {
            Err(format!("Replay cassette not found: {}", path.display()))
        }
    }
}

/// Clipboard that never reaches the system, so callers fall back to
/// printing the text for manual selection.
struct ManualClipboard;
impl Clipboard for ManualClipboard {
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingEntropy;
impl Entropy for PanickingEntropy {
    fn below(&self, _bound: u64) -> u64 {
        panic!("Entropy port not configured in CassetteConfig: no cassette loaded for entropy");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::config::{CLOCK_CASSETTE, ENTROPY_CASSETTE};
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = std::env::temp_dir().join("utilkit_ctx_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");

        let mut rec = CassetteRecorder::new(&path, "test", "0.1.0");
        rec.record("clock", "now", json!(null), json!("2024-06-15T10:30:00Z"));
        rec.record("entropy", "below", json!({"bound": 16}), json!(11));
        rec.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.clock.now().to_rfc3339(), "2024-06-15T10:30:00+00:00");
        assert_eq!(ctx.entropy.below(16), 11);
        assert!(ctx.clipboard.copy("x").is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_path_accepts_recording_directory() {
        let dir = std::env::temp_dir().join("utilkit_ctx_test_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let mut clock = CassetteRecorder::new(dir.join(CLOCK_CASSETTE), "c", "0.1.0");
        clock.record("clock", "now", json!(null), json!("2024-01-01T00:00:00Z"));
        clock.finish().unwrap();
        let mut entropy = CassetteRecorder::new(dir.join(ENTROPY_CASSETTE), "e", "0.1.0");
        entropy.record("entropy", "below", json!({"bound": 4}), json!(2));
        entropy.finish().unwrap();

        let ctx = ServiceContext::replaying_path(&dir).unwrap();
        assert_eq!(ctx.clock.now().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(ctx.entropy.below(4), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_path_reports_missing_cassette() {
        let err = ServiceContext::replaying_path(Path::new("/nonexistent/utilkit-replay"))
            .err()
            .unwrap();
        assert!(err.contains("not found"));
    }

    #[test]
    fn recording_context_writes_cassettes_after_drop() {
        let dir = std::env::temp_dir().join("utilkit_ctx_test_recording");
        let _ = std::fs::remove_dir_all(&dir);

        let (ctx, session) = ServiceContext::recording_at(dir.clone()).unwrap();
        let drawn = ctx.entropy.below(16);
        let _ = ctx.clock.now();
        drop(ctx);
        session.finish().unwrap();

        let replay = ServiceContext::replaying_path(&dir).unwrap();
        assert_eq!(replay.entropy.below(16), drawn);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unspecified_port_panics_with_clear_message() {
        let ctx = ServiceContext::replaying_from(&CassetteConfig::panic_on_unspecified()).unwrap();
        let _ = ctx.entropy.below(16);
    }
}
