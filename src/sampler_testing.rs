// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Statistical testing of a samplers output.

use std::{ops::Mul, time::Duration, time::Instant};

use crate::stats::SampleMode;
use crate::utils::write_and_print;
use crate::{
    conditioning::Float,
    rngs::{ReferenceRand, Uint32Source},
    sampler::UniformFloatSampler,
    stats, strings, testdata, utils,
};

const P_LOG_STAT_LIMIT: f64 = 3.0;
const TEST_SEED_COUNT: usize = 4;
const BOUNDARY_TEST_ID: usize = 0;

const TEST_F_POINTERS: [fn(&[Float], SampleMode) -> f64; 4] = [
    stats::boundary_test,
    stats::bucket_uniformity_test,
    stats::mean_test,
    stats::lag_correlation_test,
];

#[derive(Debug, Copy, Clone)]
struct TestResult {
    test_id: usize,
    mode: SampleMode,
    p: f64,
    time_used: Duration,
}

impl TestResult {
    pub fn logstat(&self) -> f64 {
        if self.test_id == BOUNDARY_TEST_ID {
            if self.p > 0.0 {
                0.0
            } else {
                9.9999
            }
        } else {
            p_log_stat(self.p)
        }
    }
    pub fn passed(&self) -> bool {
        if self.test_id == BOUNDARY_TEST_ID {
            // Any forbidden value is a hard failure, not a statistical one.
            self.p > 0.0
        } else {
            self.logstat() < P_LOG_STAT_LIMIT
        }
    }
    pub fn format(&self) -> String {
        format!(
            "{:<8} {}: Time: {}     p: {:.6}     pls: {:.4}   - {}",
            strings::TEST_NAMES[self.test_id],
            self.mode.name(),
            utils::format_elapsed_time(self.time_used),
            self.p,
            self.logstat(),
            if self.passed() {
                strings::PASS_STR
            } else {
                strings::FAIL_STR
            }
        )
    }
}

/// Get the file path used for saving test results.
fn get_result_file_path() -> String {
    "rslt.txt".to_owned()
}

/// Run a test function located at `TEST_F_POINTERS[test_id]`
/// and return the result and excution time.
fn run_single_test(test_data: &[Float], mode: SampleMode, test_id: usize) -> TestResult {
    let start: Instant = Instant::now();
    let p: f64 = TEST_F_POINTERS[test_id](test_data, mode);
    let time_used: Duration = start.elapsed();
    TestResult {
        test_id,
        mode,
        p,
        time_used,
    }
}

/// Measure the speed of a sampler over the rand crates default RNG.
/// Return in bytes per second.
fn measure_reference_speed(sample_size: usize) -> f64 {
    let mut ref_sampler: UniformFloatSampler<ReferenceRand> = UniformFloatSampler::with_seed(0);
    let (_, speed) = stats::generate_test_data(&mut ref_sampler, sample_size, SampleMode::HalfOpen);
    speed
}

/// Logarithmic quantity to specify how close to 1.0 or 0.0 a p-value is.
/// Has a range of 0-9.9999.
/// -0.2 * (log2(min(p, 1-p)) - 1) clamped to 9.9999
fn p_log_stat(p: f64) -> f64 {
    (p.min(1.0 - p).log2() - 1.0).mul(-0.2).min(9.9999)
}

/// Measure sampler speed over sample size and report in bytes/s.
/// Also reports speed relative to reference speed.
fn speed_test<R: Uint32Source>(
    sampler: &mut UniformFloatSampler<R>,
    sample_size: usize,
) -> String {
    sampler.reseed(testdata::sampler_test::STATIC_TEST_SEEDS[0]);
    let (_, speed) = stats::generate_test_data(sampler, sample_size, SampleMode::HalfOpen);
    let ref_speed: f64 = measure_reference_speed(sample_size);
    let rel_speed: f64 = (speed / ref_speed) * 100.0;
    format!(
        "Generated {} test data. (Speed: {}/s  ({:.4}%))",
        utils::format_byte_count(sample_size * 4),
        utils::format_byte_count(speed as usize),
        rel_speed,
    )
}

/// Peform all tests listed in `TEST_F_POINTERS` for both sample modes
/// and add the results to `test_results`.
fn test_single_seed<R: Uint32Source>(
    sampler: &mut UniformFloatSampler<R>,
    sample_size: usize,
    seed: u32,
    test_results: &mut Vec<TestResult>,
    result_file_path: &str,
) {
    write_and_print(format!("Testing for seed: {:#010x}", seed), result_file_path);
    for mode in [SampleMode::HalfOpen, SampleMode::Open] {
        sampler.reseed(seed);
        let (test_data, _) = stats::generate_test_data(sampler, sample_size, mode);
        for test_id in 0..TEST_F_POINTERS.len() {
            let rslt = run_single_test(&test_data, mode, test_id);
            write_and_print(rslt.format(), result_file_path);
            test_results.push(rslt);
        }
    }
}

/// Format a slice of `TestResults` and print a summary of the results.
fn format_test_results_summary(test_results: &[TestResult]) -> String {
    const P_LOG_STAT_BINS: usize = 10;
    let mut p_logstat_bins = [0u32; P_LOG_STAT_BINS];
    let mut passed_tests = 0usize;
    for rslt in test_results {
        p_logstat_bins[(rslt.logstat().floor() as usize).min(P_LOG_STAT_BINS - 1)] += 1;
        if rslt.passed() {
            passed_tests += 1;
        }
    }
    let logstat_summary: String = p_logstat_bins
        .iter()
        .enumerate()
        .map(|(bin, &value)| {
            if bin == P_LOG_STAT_BINS - 1 {
                format!("{:>2}+ : {:04}", bin, value) // Handle last bin with '+'
            } else {
                format!("{:>2} : {:04}|", bin, value)
            }
        })
        .collect::<Vec<String>>()
        .join("");
    format!(
        "P log stats: \n{}\nOverall result: {}          ( {} / {} passed)",
        logstat_summary,
        if passed_tests == test_results.len() {
            strings::PASS_STR
        } else {
            strings::FAIL_STR
        },
        passed_tests,
        test_results.len()
    )
}

/// Perform quality tests for a sampler over the supplied source type.
/// Returns true if every test passed.
pub fn test_suite<R: Uint32Source>(sample_size: usize, source_name: &str) -> bool {
    test_suite_with_seeds::<R>(
        sample_size,
        &testdata::sampler_test::STATIC_TEST_SEEDS[0..TEST_SEED_COUNT],
        source_name,
    )
}

/// Perform quality tests for a sampler over the supplied source type.
/// Allows supplying a custom list of seeds for testing.
/// Returns true if every test passed.
pub fn test_suite_with_seeds<R: Uint32Source>(
    sample_size: usize,
    seeds: &[u32],
    source_name: &str,
) -> bool {
    let full_start = Instant::now();
    let result_file_path = get_result_file_path();
    write_and_print(
        format!("\nTesting: {} ({})", source_name, utils::report_timestamp()),
        &result_file_path,
    );
    let mut sampler: UniformFloatSampler<R> = UniformFloatSampler::new();
    let mut test_results: Vec<TestResult> = vec![];
    write_and_print(speed_test(&mut sampler, sample_size), &result_file_path);
    for &seed in seeds.iter() {
        test_single_seed(
            &mut sampler,
            sample_size,
            seed,
            &mut test_results,
            &result_file_path,
        );
    }
    write_and_print(format!("\nSummary for: {}", source_name), &result_file_path);
    write_and_print(
        format_test_results_summary(&test_results),
        &result_file_path,
    );
    write_and_print(
        format!("Total runtime: {:?}", full_start.elapsed()),
        &result_file_path,
    );
    test_results.iter().all(|r| r.passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(test_id: usize, p: f64) -> TestResult {
        TestResult {
            test_id,
            mode: SampleMode::HalfOpen,
            p,
            time_used: Duration::ZERO,
        }
    }

    #[test]
    fn p_log_stat_range() {
        assert!((p_log_stat(0.5) - 0.4).abs() < 1e-12);
        assert_eq!(p_log_stat(0.0), 9.9999);
        assert_eq!(p_log_stat(1.0), 9.9999);
        assert!(p_log_stat(1e-6) > P_LOG_STAT_LIMIT);
    }

    #[test]
    fn boundary_result_is_pass_fail() {
        assert!(result(BOUNDARY_TEST_ID, 1.0).passed());
        assert!(!result(BOUNDARY_TEST_ID, 0.0).passed());
        assert_eq!(result(BOUNDARY_TEST_ID, 1.0).logstat(), 0.0);
        assert!(result(2, 0.4).passed());
        assert!(!result(2, 1e-9).passed());
    }

    #[test]
    fn summary_counts_passes() {
        let results = [result(0, 1.0), result(1, 0.5), result(2, 1e-12)];
        let summary = format_test_results_summary(&results);
        assert!(summary.contains("( 2 / 3 passed)"));
        assert!(summary.contains(strings::FAIL_STR));
    }
}
