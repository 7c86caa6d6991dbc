// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Quality report for the uniform float sampler over every bundled source.

use unitfloat::rngs::{self, mersenne::Mt19937};
use unitfloat::sampler_testing::{test_suite, test_suite_with_seeds};

fn main() {
    let start = std::time::Instant::now();
    const TEST_SIZE_EXPONENT: usize = 22;
    const TEST_SIZE: usize = 1 << TEST_SIZE_EXPONENT;
    test_suite::<Mt19937>(TEST_SIZE, "MT19937");
    test_suite::<rngs::ReferenceRand>(TEST_SIZE, "Reference");
    test_suite::<rngs::xorshift::XORShift128>(TEST_SIZE, "XORShift128");
    test_suite_with_seeds::<rngs::testgens::OnlyOne>(TEST_SIZE, &[0], "OnlyOnes");
    test_suite_with_seeds::<rngs::testgens::OnlyZero>(TEST_SIZE, &[0], "OnlyZero");
    test_suite_with_seeds::<rngs::testgens::Counter>(TEST_SIZE, &[0], "Counter");
    println!("Full program runtime: {:?}", start.elapsed());
}
