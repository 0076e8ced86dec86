//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::config::{CLOCK_CASSETTE, ENTROPY_CASSETTE};
use super::recorder::CassetteRecorder;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file
/// inside one output directory, which [`super::config::CassetteConfig::from_dir`]
/// can later load for replay.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for entropy interactions.
    pub entropy: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a recording session writing into `output_dir`.
    ///
    /// The directory is created if needed. Existing cassettes in it are
    /// overwritten when the session finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn at(output_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", output_dir.display())
        })?;

        let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let make_recorder = |file: &str, port: &str| {
            Arc::new(Mutex::new(CassetteRecorder::new(
                output_dir.join(file),
                format!("{stamp}-{port}"),
                env!("CARGO_PKG_VERSION"),
            )))
        };

        Ok(Self {
            clock: make_recorder(CLOCK_CASSETTE, "clock"),
            entropy: make_recorder(ENTROPY_CASSETTE, "entropy"),
            output_dir,
        })
    }

    /// Directory the cassettes will be written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Every adapter holding a recorder must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a cassette file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.entropy, "entropy")?;

        Ok(self.output_dir)
    }
}
