//! Deterministic integer stream derived from a seed string.
//!
//! The state is a single `u32`. It is initialized by folding every UTF-16 code
//! unit of the seed into a base-31 rolling hash and advanced with the classic
//! Numerical Recipes LCG constants. All arithmetic wraps at 2^32.

const HASH_MULTIPLIER: u32 = 31;
const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Reproducible stream of bounded integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Create a stream whose draws depend only on `seed`
    pub fn new(seed: &str) -> Self {
        let state = seed.encode_utf16().fold(0u32, |hash, unit| {
            hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(unit))
        });
        Self { state }
    }

    /// Advance the stream and return a value in `1..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero.
    pub fn next(&mut self, max: u32) -> u32 {
        assert!(max > 0, "SeededStream::next requires a positive bound");
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state % max + 1
    }

    #[cfg(test)]
    fn state(&self) -> u32 {
        self.state
    }
}
