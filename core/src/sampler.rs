use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Source of integer randomness for the initializer and the displacement steps.
// `sample(min, max)` must return a value in [min, max] inclusive and must
// handle min == max without looping.
pub trait Sampler {
    fn sample(&mut self, min: i32, max: i32) -> i32;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, min: i32, max: i32) -> i32 {
        (**self).sample(min, max)
    }
}

// Uniform sampler over any `rand` generator
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<ThreadRng> {
    // Ambient per-thread generator, seeded from the OS
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSampler<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn sample(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "sample range [{min}, {max}] is inverted");
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

// Replays a fixed list of values, then keeps returning `fallback`.
// Every value is clamped into the requested range, so a zero range
// always yields zero displacement.
#[derive(Debug, Clone)]
pub struct SequenceSampler {
    values: Vec<i32>,
    next: usize,
    fallback: i32,
}

impl SequenceSampler {
    pub fn new(values: impl Into<Vec<i32>>, fallback: i32) -> Self {
        Self {
            values: values.into(),
            next: 0,
            fallback,
        }
    }

    // Always returns `value` (clamped)
    pub fn constant(value: i32) -> Self {
        Self::new(Vec::new(), value)
    }

    // Number of samples drawn so far
    pub fn drawn(&self) -> usize {
        self.next
    }

    pub fn rewind(&mut self) {
        self.next = 0;
    }
}

impl Sampler for SequenceSampler {
    fn sample(&mut self, min: i32, max: i32) -> i32 {
        let raw = self.values.get(self.next).copied().unwrap_or(self.fallback);
        self.next += 1;
        raw.clamp(min, max.max(min))
    }
}
