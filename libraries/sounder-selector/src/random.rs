//! Uniform random source abstraction
//!
//! Lets callers plug in seeded or scripted randomness for reproducible runs.

use rand::Rng;

/// Source of uniformly distributed integers
pub trait RandomSource: Send {
    /// Uniform integer in `[0, upper)`
    ///
    /// `upper` is always greater than zero.
    fn next_below(&mut self, upper: u32) -> u32;
}

impl<R: rand::RngCore + Send> RandomSource for R {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.gen_range(0..upper)
    }
}

/// Random source replaying a fixed sequence of values
///
/// Each value is reduced modulo the requested bound. Once exhausted the
/// sequence starts over. Intended for tests and demonstrations.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, upper: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.next_below(100) < 100);
        }
    }

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![5, 150]);
        assert_eq!(source.next_below(100), 5);
        assert_eq!(source.next_below(100), 50);
        assert_eq!(source.next_below(100), 5);
    }
}
