use std::collections::VecDeque;

use rand::{Rng, SeedableRng};

/// Uniform randomness injected into anything that needs a coin flip or an
/// index draw. Implementations return floats in `[0, 1)` and indices in
/// `0..bound`; callers guarantee `bound >= 1`.
pub trait Randomness {
    fn next_float(&mut self) -> f64;

    fn pick_index(&mut self, bound: usize) -> usize;
}

impl<R: Randomness + ?Sized> Randomness for &mut R {
    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }

    fn pick_index(&mut self, bound: usize) -> usize {
        (**self).pick_index(bound)
    }
}

/// [`Randomness`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct StdRandomness<R> {
    rng: R,
}

pub type ThreadRandomness = StdRandomness<rand::rngs::ThreadRng>;

impl StdRandomness<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl StdRandomness<rand::rngs::StdRng> {
    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StdRandomness<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Randomness for StdRandomness<R> {
    fn next_float(&mut self) -> f64 {
        self.rng.gen()
    }

    fn pick_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Returns the same sample on every draw. Turns probabilistic termination
/// fully on or off.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomness(pub f64);

impl Randomness for FixedRandomness {
    fn next_float(&mut self) -> f64 {
        self.0
    }

    fn pick_index(&mut self, bound: usize) -> usize {
        index_from_float(self.0, bound)
    }
}

/// Replays a scripted list of samples, then repeats the last one.
#[derive(Debug, Clone)]
pub struct ScriptedRandomness {
    samples: VecDeque<f64>,
    last: f64,
}

impl ScriptedRandomness {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        let samples: VecDeque<f64> = samples.into_iter().collect();
        let last = samples.back().copied().unwrap_or(0.0);
        Self { samples, last }
    }
}

impl Randomness for ScriptedRandomness {
    fn next_float(&mut self) -> f64 {
        match self.samples.pop_front() {
            Some(sample) => {
                self.last = sample;
                sample
            }
            None => self.last,
        }
    }

    fn pick_index(&mut self, bound: usize) -> usize {
        index_from_float(self.next_float(), bound)
    }
}

fn index_from_float(sample: f64, bound: usize) -> usize {
    ((sample * bound as f64) as usize).min(bound - 1)
}
