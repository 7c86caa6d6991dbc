use unitfloat::conditioning::{Float, FLOAT_MASK, INV_TWO_POW_25, TWO_POW_24};
use unitfloat::rngs::{mersenne::Mt19937, testgens, xorshift::XORShift128, ReferenceRand};
use unitfloat::sampler::{UniformFloatSampler, DEFAULT_SEED};
use unitfloat::stats::{self, SampleMode};

const SEEDS: [u32; 5] = [0, 1, DEFAULT_SEED, 0x80000000, u32::MAX];

#[test]
fn half_open_never_leaves_unit_interval() {
    for seed in SEEDS {
        let mut s: UniformFloatSampler = UniformFloatSampler::with_seed(seed);
        for _ in 0..100_000 {
            let x = s.sample_half_open();
            assert!((0.0..1.0).contains(&x), "seed {seed}: {x}");
        }
    }
}

#[test]
fn open_never_hits_endpoints() {
    for seed in SEEDS {
        let mut s: UniformFloatSampler = UniformFloatSampler::with_seed(seed);
        for _ in 0..100_000 {
            let x = s.sample_open();
            assert!(x != 0.0 && x != 1.0 && x > 0.0 && x < 1.0, "seed {seed}: {x}");
        }
    }
}

#[test]
fn every_masked_integer_through_the_sampler() {
    // A counter source visits each of the 2**24 masked values exactly once.
    let mut half_open: UniformFloatSampler<testgens::Counter> =
        UniformFloatSampler::with_seed(0xff000000);
    let mut open: UniformFloatSampler<testgens::Counter> =
        UniformFloatSampler::with_seed(0xff000000);
    let mut max_half_open: Float = 0.0;
    let mut min_open: Float = 1.0;
    for _ in 0..TWO_POW_24 {
        let h = half_open.sample_half_open();
        let o = open.sample_open();
        assert!((0.0..1.0).contains(&h));
        assert!(o > 0.0 && o < 1.0);
        max_half_open = max_half_open.max(h);
        min_open = min_open.min(o);
    }
    assert_eq!(max_half_open, FLOAT_MASK as Float / TWO_POW_24 as Float);
    assert_eq!(min_open, INV_TWO_POW_25);
}

#[test]
fn same_seed_same_sequence() {
    let mut a: UniformFloatSampler = UniformFloatSampler::with_seed(12345);
    let mut b: UniformFloatSampler = UniformFloatSampler::with_seed(12345);
    for i in 0..10_000 {
        if i % 3 == 0 {
            assert_eq!(a.sample_open(), b.sample_open());
        } else {
            assert_eq!(a.sample_half_open(), b.sample_half_open());
        }
    }
}

#[test]
fn default_construction_is_reproducible() {
    let mut a: UniformFloatSampler = UniformFloatSampler::new();
    let mut b: UniformFloatSampler = UniformFloatSampler::default();
    let mut explicit: UniformFloatSampler = UniformFloatSampler::with_seed(DEFAULT_SEED);
    let mut other: UniformFloatSampler = UniformFloatSampler::with_seed(DEFAULT_SEED + 1);
    let seq_a: Vec<Float> = (0..256).map(|_| a.sample_half_open()).collect();
    let seq_b: Vec<Float> = (0..256).map(|_| b.sample_half_open()).collect();
    let seq_explicit: Vec<Float> = (0..256).map(|_| explicit.sample_half_open()).collect();
    let seq_other: Vec<Float> = (0..256).map(|_| other.sample_half_open()).collect();
    assert_eq!(seq_a, seq_b);
    assert_eq!(seq_a, seq_explicit);
    assert_ne!(seq_a, seq_other);
}

#[test]
fn distribution_sanity_for_both_modes() {
    const DRAWS: usize = 1_000_000;
    for mode in [SampleMode::HalfOpen, SampleMode::Open] {
        let mut s: UniformFloatSampler = UniformFloatSampler::new();
        let (data, _) = stats::generate_test_data(&mut s, DRAWS, mode);
        let (mean, _) = stats::mean(&data);
        assert!((mean - 0.5).abs() < 0.005, "{:?} mean {mean}", mode);
        let (chi_squared, p) = stats::bucket_uniformity(&data, 64);
        let p = p.unwrap();
        assert!(p > 1e-4, "{:?} chi2 {chi_squared} p {p}", mode);
        let (r, _) = stats::lag_correlation(&data);
        assert!(r.abs() < 0.01, "{:?} lag correlation {r}", mode);
    }
}

#[test]
fn distribution_sanity_for_other_sources() {
    let mut reference: UniformFloatSampler<ReferenceRand> = UniformFloatSampler::with_seed(3);
    let (data, _) = stats::generate_test_data(&mut reference, 200_000, SampleMode::Open);
    assert!((stats::mean(&data).0 - 0.5).abs() < 0.01);

    let mut xorshift: UniformFloatSampler<XORShift128> = UniformFloatSampler::with_seed(3);
    let (data, _) = stats::generate_test_data(&mut xorshift, 200_000, SampleMode::HalfOpen);
    assert!((stats::mean(&data).0 - 0.5).abs() < 0.01);
}

#[test]
fn all_ones_source_is_strictly_inside() {
    let mut s = UniformFloatSampler::from_source(testgens::OnlyOne {});
    let h = s.sample_half_open();
    let o = s.sample_open();
    assert!(h < 1.0);
    assert!(o < 1.0);
    assert!(o > 0.0);
}

#[test]
fn worker_streams_are_reproducible_and_independent() {
    let mut w0: UniformFloatSampler<Mt19937> = UniformFloatSampler::for_stream(DEFAULT_SEED, 0);
    let mut w0_again: UniformFloatSampler<Mt19937> =
        UniformFloatSampler::for_stream(DEFAULT_SEED, 0);
    let mut w1: UniformFloatSampler<Mt19937> = UniformFloatSampler::for_stream(DEFAULT_SEED, 1);
    let a: Vec<Float> = (0..64).map(|_| w0.sample_half_open()).collect();
    let b: Vec<Float> = (0..64).map(|_| w0_again.sample_half_open()).collect();
    let c: Vec<Float> = (0..64).map(|_| w1.sample_half_open()).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn one_sampler_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            std::thread::spawn(move || {
                let mut s: UniformFloatSampler = UniformFloatSampler::for_stream(7, worker);
                let mut buf = vec![0.0 as Float; 10_000];
                s.fill_half_open(&mut buf);
                stats::count_out_of_bounds(&buf, SampleMode::HalfOpen)
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 0);
    }
}
