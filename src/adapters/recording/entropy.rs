//! Recording adapter for the `Entropy` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Entropy;

/// Records every draw (bound and value) while delegating to an inner source.
pub struct RecordingEntropy {
    inner: Box<dyn Entropy>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording entropy source wrapping the given implementation.
    pub fn new(inner: Box<dyn Entropy>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Entropy for RecordingEntropy {
    fn below(&self, bound: u64) -> u64 {
        let value = self.inner.below(bound);
        record_interaction(&self.recorder, "entropy", "below", &json!({ "bound": bound }), &value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::entropy::ThreadEntropy;

    #[test]
    fn records_bound_and_value_for_each_draw() {
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new("unused.yaml", "test", "0.0.0")));

        let drawn = {
            let entropy = RecordingEntropy::new(Box::new(ThreadEntropy), Arc::clone(&recorder));
            [entropy.below(16), entropy.below(4)]
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        let cassette = recorder.snapshot();

        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input, json!({ "bound": 16 }));
        assert_eq!(cassette.interactions[0].output, json!(drawn[0]));
        assert_eq!(cassette.interactions[1].input, json!({ "bound": 4 }));
        assert_eq!(cassette.interactions[1].output, json!(drawn[1]));
    }
}
