//! Clipboard double shared by command tests.

use std::sync::{Arc, Mutex};

use crate::ports::{Clipboard, ClipboardError};

/// Records every copy request instead of touching the system clipboard.
#[derive(Clone, Default)]
pub(crate) struct CapturingClipboard(Arc<Mutex<Vec<String>>>);

impl CapturingClipboard {
    pub(crate) fn copied(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Clipboard for CapturingClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
