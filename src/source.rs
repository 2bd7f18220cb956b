use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Source of the integers making up a batch. The production binary samples a
/// uniform distribution; tests swap in a scripted sequence.
pub trait ValueSource {
    fn next_value(&mut self) -> u32;
}

/// Uniform sampling over an inclusive range, so both endpoints are producible.
pub struct UniformSource<R: Rng> {
    rng: R,
    distribution: Uniform<u32>,
}

impl UniformSource<SmallRng> {
    pub fn from_entropy(range: RangeInclusive<u32>) -> Self {
        Self::new(SmallRng::from_entropy(), range)
    }
}

impl<R: Rng> UniformSource<R> {
    pub fn new(rng: R, range: RangeInclusive<u32>) -> Self {
        Self {
            rng,
            distribution: Uniform::from(range),
        }
    }
}

impl<R: Rng> ValueSource for UniformSource<R> {
    fn next_value(&mut self) -> u32 {
        self.distribution.sample(&mut self.rng)
    }
}
