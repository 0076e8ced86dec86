//! Live clipboard that pipes text into a platform clipboard tool.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::ports::{Clipboard, ClipboardError};

/// Candidate clipboard tools, tried in order.
const TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("clip", &[]),
];

/// Clipboard backed by whichever system tool is installed.
pub struct SystemClipboard {
    tools: Vec<(String, Vec<String>)>,
}

impl SystemClipboard {
    /// Creates a clipboard that tries the standard platform tools.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tools(
            TOOLS
                .iter()
                .map(|(tool, args)| {
                    ((*tool).to_string(), args.iter().map(|a| (*a).to_string()).collect())
                })
                .collect(),
        )
    }

    /// Creates a clipboard that tries only the given `(program, args)` pairs.
    #[must_use]
    pub fn with_tools(tools: Vec<(String, Vec<String>)>) -> Self {
        Self { tools }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn pipe_into(tool: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
    let failed = |reason: String| ClipboardError::ToolFailed { tool: tool.to_string(), reason };

    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ClipboardError::Unavailable
            } else {
                failed(e.to_string())
            }
        })?;

    // stdin is dropped before waiting so the tool sees EOF; the child is
    // always reaped, even when the write fails.
    let written = child.stdin.take().map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
    let waited = child.wait();

    written.map_err(|e| failed(e.to_string()))?;
    let status = waited.map_err(|e| failed(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(failed(format!("exited with {status}")))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = ClipboardError::Unavailable;
        for (tool, args) in &self.tools {
            match pipe_into(tool, args, text) {
                Ok(()) => {
                    debug!(tool = %tool, bytes = text.len(), "copied to clipboard");
                    return Ok(());
                }
                Err(ClipboardError::Unavailable) => {}
                Err(e) => {
                    debug!(tool = %tool, error = %e, "clipboard tool failed");
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}
