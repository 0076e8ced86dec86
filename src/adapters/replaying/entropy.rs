//! Replaying adapter for the `Entropy` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::Entropy;

/// Replays recorded random draws from a cassette.
///
/// Each replayed draw must have been recorded with the same bound; a
/// mismatch means the caller's draw pattern changed since recording.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying entropy source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Entropy for ReplayingEntropy {
    fn below(&self, bound: u64) -> u64 {
        let (seq, recorded_bound, output) = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("entropy", "below");
            (
                interaction.seq,
                interaction.input.get("bound").and_then(serde_json::Value::as_u64),
                interaction.output.clone(),
            )
        };

        if let Some(recorded) = recorded_bound {
            assert_eq!(
                recorded, bound,
                "entropy::below: cassette seq={seq} was recorded with bound {recorded}, \
                 replay requested bound {bound}"
            );
        }

        let value = output.as_u64().expect("entropy::below: expected unsigned integer output");
        assert!(value < bound, "entropy::below: replayed value {value} is not below {bound}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(draws: &[(u64, u64)]) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions: draws
                .iter()
                .enumerate()
                .map(|(seq, (bound, value))| Interaction {
                    seq: seq as u64,
                    port: "entropy".into(),
                    method: "below".into(),
                    input: json!({ "bound": bound }),
                    output: json!(value),
                })
                .collect(),
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn serves_draws_in_order() {
        let entropy = ReplayingEntropy::new(make_replayer(&[(16, 3), (4, 2), (16, 15)]));
        assert_eq!(entropy.below(16), 3);
        assert_eq!(entropy.below(4), 2);
        assert_eq!(entropy.below(16), 15);
    }

    #[test]
    #[should_panic(expected = "was recorded with bound 16")]
    fn mismatched_bound_panics() {
        let entropy = ReplayingEntropy::new(make_replayer(&[(16, 3)]));
        let _ = entropy.below(4);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_cassette_panics() {
        let entropy = ReplayingEntropy::new(make_replayer(&[(16, 1)]));
        let _ = entropy.below(16);
        let _ = entropy.below(16);
    }
}
