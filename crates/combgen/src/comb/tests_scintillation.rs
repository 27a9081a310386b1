//! Full-stack scintillation tests: comb generator driving the bundled
//! scintillation envelope.

use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex64;
use pretty_assertions::assert_eq;

use crate::envelope::ScintillationEnvelope;
use crate::rng::SubSeedGenerator;

use super::{CombConfig, CombGenerator};

const FUNDAMENTAL: f64 = PI / 8.0;
const DECORRELATION: u64 = 500;

fn zeros(len: usize) -> Vec<Complex64> {
    vec![Complex64::new(0.0, 0.0); len]
}

/// Builds a scintillating two-tone comb from one master seed.
fn scintillating_comb(master_seed: u32) -> CombGenerator {
    let magnitudes: Arc<[f64]> = Arc::from(vec![1.0, 0.5]);

    let mut sub_seeds = SubSeedGenerator::new(master_seed);
    let mut envelope = ScintillationEnvelope::new(2);
    envelope.reset(
        2,
        DECORRELATION,
        Some(&magnitudes),
        sub_seeds.next_sub_seed(),
    );

    let mut comb = CombGenerator::new(2);
    comb.reset(
        CombConfig::new(2, FUNDAMENTAL)
            .with_magnitudes(magnitudes)
            .with_envelope(envelope),
    )
    .unwrap();
    comb
}

#[test]
fn test_scintillating_run_is_reproducible() {
    let mut first_comb = scintillating_comb(0x3210_dead);
    let mut second_comb = scintillating_comb(0x3210_dead);

    let mut first = zeros(4096);
    let mut second = zeros(4096);
    first_comb.get_samples(&mut first);
    second_comb.get_samples(&mut second);

    assert_eq!(first, second);
}

#[test]
fn test_different_master_seeds_decorrelate() {
    let mut comb_a = scintillating_comb(1);
    let mut comb_b = scintillating_comb(2);

    let mut a = zeros(2048);
    let mut b = zeros(2048);
    comb_a.get_samples(&mut a);
    comb_b.get_samples(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_epoch_split_continuity_through_full_stack() {
    // One 4096-sample epoch versus two 2048-sample epochs: the oscillator
    // sample counters keep the decorrelation grid aligned, so the outputs
    // are identical sample for sample.
    let mut whole_comb = scintillating_comb(0xfeed_f00d);
    let mut split_comb = scintillating_comb(0xfeed_f00d);

    let mut whole = zeros(4096);
    whole_comb.get_samples(&mut whole);

    let mut split = zeros(4096);
    {
        let (front, back) = split.split_at_mut(2048);
        split_comb.get_samples(front);
        split_comb.get_samples(back);
    }

    assert_eq!(whole, split);
}

#[test]
fn test_uneven_epoch_split_continuity() {
    let mut whole_comb = scintillating_comb(0x0bad_cafe);
    let mut split_comb = scintillating_comb(0x0bad_cafe);

    let mut whole = zeros(3000);
    whole_comb.get_samples(&mut whole);

    // Splits deliberately misaligned with the 500-sample decorrelation grid.
    let mut split = zeros(3000);
    {
        let (front, rest) = split.split_at_mut(123);
        split_comb.get_samples(front);
        let (middle, back) = rest.split_at_mut(1777);
        split_comb.get_samples(middle);
        split_comb.get_samples(back);
    }

    assert_eq!(whole, split);
}

#[test]
fn test_superimposed_instances_sum() {
    // Two independently seeded combs superimposed via accumulation equal
    // the per-sample sum of their separate outputs.
    let mut comb_a = scintillating_comb(11);
    let mut comb_b = scintillating_comb(22);

    let mut combined = zeros(1024);
    comb_a.get_samples(&mut combined);
    comb_b.accum_samples(&mut combined);

    let mut separate_a = zeros(1024);
    let mut separate_b = zeros(1024);
    scintillating_comb(11).get_samples(&mut separate_a);
    scintillating_comb(22).get_samples(&mut separate_b);

    // Summation order differs between the two paths, so allow for rounding.
    for (c, (a, b)) in combined.iter().zip(separate_a.iter().zip(&separate_b)) {
        assert!((c - (a + b)).norm() < 1e-12);
    }
}
