//! Live entropy backed by the thread-local RNG.

use rand::Rng;

use crate::ports::Entropy;

/// Draws from `rand`'s thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn below(&self, bound: u64) -> u64 {
        rand::rng().random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_below_bound() {
        let entropy = ThreadEntropy;
        for bound in [1, 4, 16, 0x4000, 1 << 48] {
            for _ in 0..200 {
                assert!(entropy.below(bound) < bound);
            }
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        assert_eq!(ThreadEntropy.below(1), 0);
    }

    #[test]
    fn hex_digit_draws_cover_the_range() {
        let entropy = ThreadEntropy;
        let mut seen = [false; 16];
        for _ in 0..4000 {
            let digit = usize::try_from(entropy.below(16)).unwrap();
            seen[digit] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
