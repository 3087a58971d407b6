use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform choices for the generator
pub trait Picker {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picker backed by any `rand` generator
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        RandomPicker { rng }
    }
}

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        RandomPicker::new(rand::thread_rng())
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomPicker::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
