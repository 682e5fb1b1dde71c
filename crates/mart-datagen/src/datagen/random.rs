use mart_config::Bounds;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Uniform random draws for the generators.
///
/// Wraps a seedable PRNG so tests can replay a run exactly. Not suitable for
/// anything security-sensitive.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Deterministic source: the same seed yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform choice from `choices`; `None` when empty.
    pub fn choose<'a, T>(&mut self, choices: &'a [T]) -> Option<&'a T> {
        choices.choose(&mut self.rng)
    }

    /// Uniform integer in `[lo, hi]`. `lo` must not exceed `hi`.
    pub fn int_inclusive<T>(&mut self, lo: T, hi: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.random_range(lo..=hi)
    }

    /// Uniform float in `[lo, hi]`. `lo` must not exceed `hi`.
    pub fn float_inclusive(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.random_range(lo..=hi)
    }

    /// Uniform draw from a configured range.
    pub fn within<T>(&mut self, bounds: &Bounds<T>) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        self.rng.random_range(bounds.min..=bounds.max)
    }
}
