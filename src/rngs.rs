// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! 32-bit integer sources that feed the float samplers.
//! All implement the Uint32Source interface, some feature additional methods.

use rand::{RngCore, SeedableRng};

/// General trait for generators of uniformly distributed u32 values.
pub trait Uint32Source {
    /// Initialize with specified seed.
    fn new(seed: u32) -> Self;
    /// Reset to inital state, equivalent to replacing with ::new(seed).
    fn seed(&mut self, seed: u32);
    /// Generate u32 over the full range and advance the state one step.
    fn next(&mut self) -> u32;
    /// Advance the generator state by the specified amount of steps.
    /// For generators that dont support seek this takes a similar
    /// amount of time to generating (delta) outputs.
    fn advance(&mut self, delta: usize) {
        for _ in 0..delta {
            let _ = self.next();
        }
    }
}

/// The rand crates standard generator, used as a speed and quality reference.
pub struct ReferenceRand {
    rng: rand::rngs::StdRng,
}

impl Uint32Source for ReferenceRand {
    fn new(seed: u32) -> Self {
        ReferenceRand {
            rng: rand::rngs::StdRng::seed_from_u64(seed as u64),
        }
    }

    fn seed(&mut self, seed: u32) {
        self.rng = rand::rngs::StdRng::seed_from_u64(seed as u64);
    }

    fn next(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

/// Mersenne Twister (MT19937), 32-bit variant.
/// Default source of the float samplers.
pub mod mersenne {
    use super::Uint32Source;

    const N: usize = 624;
    const M: usize = 397;
    const MATRIX_A: u32 = 0x9908b0df;
    const UPPER_MASK: u32 = 0x80000000;
    const LOWER_MASK: u32 = 0x7fffffff;
    const INIT_MULTIPLIER: u32 = 1812433253;

    #[derive(Debug, Clone)]
    pub struct Mt19937 {
        state: [u32; N],
        index: usize,
    }

    fn init_state(seed: u32) -> [u32; N] {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        state
    }

    fn temper(mut y: u32) -> u32 {
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c5680;
        y ^= (y << 15) & 0xefc60000;
        y ^ (y >> 18)
    }

    impl Mt19937 {
        /// Regenerate the full block of N words in place.
        fn twist(&mut self) {
            for i in 0..N {
                let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
                let mut next = self.state[(i + M) % N] ^ (y >> 1);
                if y & 1 != 0 {
                    next ^= MATRIX_A;
                }
                self.state[i] = next;
            }
            self.index = 0;
        }
    }

    impl Uint32Source for Mt19937 {
        fn new(seed: u32) -> Self {
            Mt19937 {
                state: init_state(seed),
                index: N,
            }
        }

        fn seed(&mut self, seed: u32) {
            self.state = init_state(seed);
            self.index = N;
        }

        fn next(&mut self) -> u32 {
            if self.index >= N {
                self.twist();
            }
            let y = self.state[self.index];
            self.index += 1;
            temper(y)
        }

        fn advance(&mut self, delta: usize) {
            let mut remaining = delta;
            while remaining > 0 {
                if self.index >= N {
                    self.twist();
                }
                // Skip whole untempered words without tempering them.
                let step = remaining.min(N - self.index);
                self.index += step;
                remaining -= step;
            }
        }
    }

}

// Xorshift PRNGs
pub mod xorshift {
    use super::Uint32Source;

    #[derive(Debug, Copy, Clone)]
    pub struct XORShift128 {
        state: [u32; 4],
    }

    /// Spread the seed over all four words, never producing the all zero state.
    fn seed_state(seed: u32) -> [u32; 4] {
        [seed, !seed, seed ^ 0x9e3779b9, !seed ^ 0x7f4a7c15]
    }

    impl Uint32Source for XORShift128 {
        fn new(seed: u32) -> Self {
            XORShift128 {
                state: seed_state(seed),
            }
        }

        fn seed(&mut self, seed: u32) {
            self.state = seed_state(seed);
        }

        fn next(&mut self) -> u32 {
            let mut t: u32 = self.state[3];
            let s: u32 = self.state[0];
            self.state[3] = self.state[2];
            self.state[2] = self.state[1];
            self.state[1] = s;
            t ^= t << 11;
            t ^= t >> 8;
            self.state[0] = t ^ s ^ (s >> 19);
            self.state[0]
        }
    }
}

/// Degenerate sources that drive the conversions into their edge cases.
pub mod testgens {
    use super::Uint32Source;

    /// Always returns 0xffffffff.
    pub struct OnlyOne {}
    impl Uint32Source for OnlyOne {
        fn new(_seed: u32) -> Self {
            OnlyOne {}
        }

        fn seed(&mut self, _seed: u32) {}

        fn next(&mut self) -> u32 {
            u32::MAX
        }

        fn advance(&mut self, _delta: usize) {}
    }

    /// Always returns 0.
    pub struct OnlyZero {}
    impl Uint32Source for OnlyZero {
        fn new(_seed: u32) -> Self {
            OnlyZero {}
        }

        fn seed(&mut self, _seed: u32) {}

        fn next(&mut self) -> u32 {
            0
        }

        fn advance(&mut self, _delta: usize) {}
    }

    /// Returns seed, seed + 1, seed + 2, ... wrapping at u32::MAX.
    /// Sweeps every masked value in 2**24 calls.
    pub struct Counter {
        state: u32,
    }
    impl Uint32Source for Counter {
        fn new(seed: u32) -> Self {
            Counter { state: seed }
        }

        fn seed(&mut self, seed: u32) {
            self.state = seed;
        }

        fn next(&mut self) -> u32 {
            let out = self.state;
            self.state = self.state.wrapping_add(1);
            out
        }

        fn advance(&mut self, delta: usize) {
            self.state = self.state.wrapping_add(delta as u32);
        }
    }
}
