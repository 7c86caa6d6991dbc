// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Collection of methods for statistical analysis of float samples.

use std::time::Instant;

use crate::{
    conditioning::Float,
    rngs::Uint32Source,
    sampler::UniformFloatSampler,
    utils,
};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Number of equal width buckets used by `bucket_uniformity_test`.
pub const UNIFORMITY_BUCKETS: usize = 256;

/// Which of the two sampler operations produced a batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleMode {
    /// `sample_half_open`, values in [0, 1).
    HalfOpen,
    /// `sample_open`, values in (0, 1).
    Open,
}

impl SampleMode {
    /// True if `x` lies inside the interval this mode guarantees.
    pub fn contains(self, x: Float) -> bool {
        match self {
            SampleMode::HalfOpen => (0.0..1.0).contains(&x),
            SampleMode::Open => x > 0.0 && x < 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SampleMode::HalfOpen => "[0, 1)",
            SampleMode::Open => "(0, 1)",
        }
    }

    fn draw<R: Uint32Source>(self, sampler: &mut UniformFloatSampler<R>) -> Float {
        match self {
            SampleMode::HalfOpen => sampler.sample_half_open(),
            SampleMode::Open => sampler.sample_open(),
        }
    }
}

/// Draw 'sample_size' floats from the sampler in the given mode.
///     -> consumes 'sample_size' * 4 bytes of source output.
/// Returns the samples and the generation speed in bytes/s.
pub fn generate_test_data<R: Uint32Source>(
    sampler: &mut UniformFloatSampler<R>,
    sample_size: usize,
    mode: SampleMode,
) -> (Vec<Float>, f64) {
    let start = Instant::now();
    let data: Vec<Float> = (0..sample_size).map(|_| mode.draw(sampler)).collect();
    let elapsed = start.elapsed().as_secs_f64();
    let speed = if elapsed > 0.0 {
        (sample_size * 4) as f64 / elapsed
    } else {
        f64::INFINITY
    };
    (data, speed)
}

/// Get p value for given degrees of freedom and chi squared value.
/// None if the distribution cannot be constructed (df == 0).
fn chi_squared_p_value(df: u32, chi_squared: f64) -> Option<f64> {
    ChiSquared::new(df as f64)
        .ok()
        .map(|dist| 1.0 - dist.cdf(chi_squared))
}

/// Checks that every sample lies inside the interval guaranteed by `mode`.
/// Returns 1.0 if all do, 0.0 otherwise.
pub fn boundary_test(data: &[Float], mode: SampleMode) -> f64 {
    if data.iter().all(|&x| mode.contains(x)) {
        1.0
    } else {
        0.0
    }
}

/// Counts samples that fall outside the interval guaranteed by `mode`.
pub fn count_out_of_bounds(data: &[Float], mode: SampleMode) -> usize {
    data.iter().filter(|&&x| !mode.contains(x)).count()
}

/// Chi squared goodness of fit against the uniform distribution,
/// using 'buckets' equal width buckets over [0, 1).
/// Returns chi2 statistic, p value
pub fn bucket_uniformity(data: &[Float], buckets: usize) -> (f64, Option<f64>) {
    assert!(buckets > 1);
    let mut counts: Vec<usize> = vec![0; buckets];
    for &x in data {
        let bucket = ((x as f64 * buckets as f64) as usize).min(buckets - 1);
        counts[bucket] += 1;
    }
    let expected: f64 = data.len() as f64 / buckets as f64;
    let mut chi_squared: f64 = 0.0;
    for value in counts {
        chi_squared += (value as f64 - expected).powi(2) / expected;
    }
    (
        chi_squared,
        chi_squared_p_value(buckets as u32 - 1, chi_squared),
    )
}

/// `bucket_uniformity` with `UNIFORMITY_BUCKETS` buckets, p value only.
pub fn bucket_uniformity_test(data: &[Float], _mode: SampleMode) -> f64 {
    bucket_uniformity(data, UNIFORMITY_BUCKETS).1.unwrap_or(0.0)
}

/// Compares the sample mean against 0.5 assuming variance 1/12.
/// Returns the mean, p value
pub fn mean(data: &[Float]) -> (f64, f64) {
    let n = data.len() as f64;
    let mean: f64 = data.iter().fold(0.0, |acc, &x| acc + x as f64) / n;
    let z = (mean - 0.5) / f64::sqrt(1.0 / (12.0 * n));
    let p = statrs::function::erf::erfc(z.abs() * utils::INV_ROOT2);
    (mean, p)
}

pub fn mean_test(data: &[Float], _mode: SampleMode) -> f64 {
    mean(data).1
}

/// Serial correlation between consecutive samples.
/// Returns correlation coefficient, p value
pub fn lag_correlation(data: &[Float]) -> (f64, f64) {
    let pairs = data.len().saturating_sub(1) as f64;
    let sum: f64 = data
        .windows(2)
        .map(|w| (w[0] as f64 - 0.5) * (w[1] as f64 - 0.5))
        .sum();
    // Var(x) = 1/12 for the uniform distribution.
    let r = sum * 12.0 / pairs;
    let z = r * f64::sqrt(pairs);
    let p = statrs::function::erf::erfc(z.abs() * utils::INV_ROOT2);
    (r, p)
}

pub fn lag_correlation_test(data: &[Float], _mode: SampleMode) -> f64 {
    lag_correlation(data).1
}
