// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Methods to turn random bits into floats on the unit interval.
//!
//! Only the low 24 bits of each u32 are used. A 24 bit integer times 2**-24
//! is exact in single precision, so the half open conversion can never round
//! up to 1.0. Dividing the full 32 bit range by 2**32 would: in f32,
//! 2**32 - 1 and 2**32 have the same representation.

#[cfg(not(feature = "f64"))]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;

pub const FLOAT_MASK: u32 = 0x00ffffff;
pub const TWO_POW_24: u32 = 16777216;
pub const TWO_POW_25: u32 = 33554432;
pub const INV_TWO_POW_24: Float = 1.0 / TWO_POW_24 as Float;
pub const INV_TWO_POW_25: Float = 1.0 / TWO_POW_25 as Float;

/// Largest Float strictly below 1.0.
pub const ONE_MINUS_EPSILON: Float = 1.0 - Float::EPSILON / 2.0;

/// Maps a u32 to [0, 1 - 2**-24].
/// Uniform over 2**24 equally spaced values, the upper byte is discarded.
#[inline(always)]
pub fn u32_to_half_open(int: u32) -> Float {
    (int & FLOAT_MASK) as Float * INV_TWO_POW_24
}

/// Maps a u32 to the open interval (0, 1).
/// Same grid as `u32_to_half_open`, shifted up by half a bucket.
///
/// In f32 the shifted value is a rounding tie for every masked input >= 2**23
/// and the topmost one rounds to exactly 1.0, so the result is clamped to
/// `ONE_MINUS_EPSILON`. In f64 the shift is exact and the clamp is a no-op.
#[inline(always)]
pub fn u32_to_open(int: u32) -> Float {
    ((int & FLOAT_MASK) as Float * INV_TWO_POW_24 + INV_TWO_POW_25).min(ONE_MINUS_EPSILON)
}
