// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Fixed inputs for the quality report.

pub mod sampler_test {
    /// Seeds used when no explicit seed list is supplied.
    pub const STATIC_TEST_SEEDS: [u32; 8] = [
        0x00000000, 0x000007dd, 0xffffffff, 0x9e3779b9, 0x12345678, 0xdeadbeef, 0x80000000,
        0x0badf00d,
    ];
}
