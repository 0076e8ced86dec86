//! Entropy port for drawing random numbers.

/// Source of uniformly distributed random integers.
///
/// Not required to be cryptographically secure. Substituting a scripted
/// source lets tests assert exact identifier strings.
pub trait Entropy: Send + Sync {
    /// Returns a value drawn uniformly from `0..bound`.
    ///
    /// Callers always pass a non-zero `bound`.
    fn below(&self, bound: u64) -> u64;
}
