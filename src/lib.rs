// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Seedable uniform float sampling for Monte Carlo algorithms,
//! with the integer sources that drive it and methods for statistical analysis.
//!
//! ```
//! use unitfloat::sampler::UniformFloatSampler;
//!
//! let mut sampler: UniformFloatSampler = UniformFloatSampler::with_seed(7);
//! let u = sampler.sample_half_open();
//! assert!((0.0..1.0).contains(&u));
//! let v = sampler.sample_open();
//! assert!(v > 0.0 && v < 1.0);
//! ```

pub mod conditioning;
pub mod rngs;
pub mod sampler;
pub mod sampler_testing;
pub mod stats;
mod strings;
pub mod testdata;
pub mod utils;

pub use conditioning::Float;
pub use rngs::Uint32Source;
pub use sampler::UniformFloatSampler;
