// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Seedable uniform float sampler for Monte Carlo integration.
//!
//! A sampler owns its integer source and is not synchronized. Give every
//! worker thread its own instance, see [`UniformFloatSampler::for_stream`].

use crate::conditioning::{self, Float};
use crate::rngs::{mersenne::Mt19937, Uint32Source};

/// Seed used by `new()` and `default()`.
/// Fixed so default constructed samplers reproduce across runs.
pub const DEFAULT_SEED: u32 = 2013;

#[derive(Debug, Clone)]
pub struct UniformFloatSampler<R: Uint32Source = Mt19937> {
    source: R,
}

/// SplitMix64 finalizer folded down to 32 bits.
fn derive_stream_seed(master_seed: u32, stream: u32) -> u32 {
    let mut z = ((master_seed as u64) << 32 | stream as u64).wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^= z >> 31;
    (z >> 32) as u32 ^ z as u32
}

impl<R: Uint32Source> UniformFloatSampler<R> {
    /// Sampler seeded with `DEFAULT_SEED`.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Sampler whose source is seeded with `seed`, unchanged.
    pub fn with_seed(seed: u32) -> Self {
        UniformFloatSampler {
            source: R::new(seed),
        }
    }

    /// Wrap an already constructed source.
    pub fn from_source(source: R) -> Self {
        UniformFloatSampler { source }
    }

    /// Sampler for worker `stream`, seeded from a shared master seed.
    /// The same (master_seed, stream) pair always yields the same sequence.
    pub fn for_stream(master_seed: u32, stream: u32) -> Self {
        Self::with_seed(derive_stream_seed(master_seed, stream))
    }

    /// Restart the sequence as if constructed with `with_seed(seed)`.
    pub fn reseed(&mut self, seed: u32) {
        self.source.seed(seed);
    }

    /// Uniform value in [0, 1). Never returns 1.0.
    #[inline(always)]
    pub fn sample_half_open(&mut self) -> Float {
        conditioning::u32_to_half_open(self.source.next())
    }

    /// Uniform value in (0, 1). Never returns 0.0 or 1.0.
    #[inline(always)]
    pub fn sample_open(&mut self) -> Float {
        conditioning::u32_to_open(self.source.next())
    }

    /// Fill `out` with half open samples, one source step per element.
    pub fn fill_half_open(&mut self, out: &mut [Float]) {
        for x in out.iter_mut() {
            *x = self.sample_half_open();
        }
    }

    pub fn into_source(self) -> R {
        self.source
    }
}

impl<R: Uint32Source> Default for UniformFloatSampler<R> {
    fn default() -> Self {
        Self::new()
    }
}
