//! Envelope-scaled generation tests.

use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex64;
use pretty_assertions::assert_eq;

use crate::envelope::EnvelopeSource;
use crate::phasor::PhasorOscillator;

use super::{CombConfig, CombGenerator};

const EPOCH_SIZE: usize = 4096;
const FUNDAMENTAL: f64 = PI / 8.0;

/// Exponential-decay envelope keyed off the tone's cumulative sample count.
struct ExpDecayEnvelope {
    buffer: Vec<f64>,
    tau: f64,
}

impl ExpDecayEnvelope {
    fn new(tau: f64) -> Self {
        Self {
            buffer: Vec::new(),
            tau,
        }
    }
}

impl EnvelopeSource for ExpDecayEnvelope {
    fn envelope(
        &mut self,
        current_sample: u64,
        num_samples: usize,
        _harmonic: usize,
        nominal_mag: f64,
    ) -> &[f64] {
        if self.buffer.len() < num_samples {
            self.buffer.resize(num_samples, 0.0);
        }
        for (i, slot) in self.buffer[..num_samples].iter_mut().enumerate() {
            let t = (current_sample + i as u64) as f64;
            *slot = nominal_mag * (-t / self.tau).exp();
        }
        &self.buffer[..num_samples]
    }
}

fn zeros(len: usize) -> Vec<Complex64> {
    vec![Complex64::new(0.0, 0.0); len]
}

/// Reference rendering: drive oscillators by hand with envelope values from
/// an identically constructed source.
fn reference_enveloped(
    num_harmonics: usize,
    magnitudes: &[f64],
    tau: f64,
    len: usize,
) -> Vec<Complex64> {
    let mut envelope = ExpDecayEnvelope::new(tau);
    let mut buf = zeros(len);
    for i in 0..num_harmonics {
        let mut oscillator = PhasorOscillator::new();
        oscillator.reset((i as f64 + 1.0) * FUNDAMENTAL, 0.0);
        let scale = envelope.envelope(0, len, i, magnitudes[i]).to_vec();
        if i == 0 {
            oscillator.get_samples_enveloped(&mut buf, &scale);
        } else {
            oscillator.accum_samples_enveloped(&mut buf, &scale);
        }
    }
    buf
}

#[test]
fn test_default_mag_with_envelope_matches_reference_exactly() {
    let tau = EPOCH_SIZE as f64 / 2.0;
    let mut comb = CombGenerator::new(2);
    comb.reset(CombConfig::new(2, FUNDAMENTAL).with_envelope(ExpDecayEnvelope::new(tau)))
        .unwrap();

    let mut buf = zeros(EPOCH_SIZE);
    comb.get_samples(&mut buf);

    let reference = reference_enveloped(2, &[1.0, 1.0], tau, EPOCH_SIZE);
    assert_eq!(buf, reference);
}

#[test]
fn test_specific_mag_with_envelope_matches_reference_exactly() {
    let tau = EPOCH_SIZE as f64 / 2.0;
    let magnitudes: Arc<[f64]> = Arc::from(vec![2.0, 2.0]);

    let mut comb = CombGenerator::new(2);
    comb.reset(
        CombConfig::new(2, FUNDAMENTAL)
            .with_magnitudes(magnitudes.clone())
            .with_envelope(ExpDecayEnvelope::new(tau)),
    )
    .unwrap();

    let mut buf = zeros(EPOCH_SIZE);
    comb.get_samples(&mut buf);

    let reference = reference_enveloped(2, &magnitudes, tau, EPOCH_SIZE);
    assert_eq!(buf, reference);
}

#[test]
fn test_envelope_receives_running_sample_count() {
    // Across two epochs the envelope must see the cumulative count, so the
    // decay continues instead of restarting.
    let tau = 512.0;
    let mut split = CombGenerator::new(1);
    split
        .reset(CombConfig::new(1, FUNDAMENTAL).with_envelope(ExpDecayEnvelope::new(tau)))
        .unwrap();

    let mut two = zeros(1024);
    {
        let (front, back) = two.split_at_mut(512);
        split.get_samples(front);
        split.get_samples(back);
    }

    let mut whole = CombGenerator::new(1);
    whole
        .reset(CombConfig::new(1, FUNDAMENTAL).with_envelope(ExpDecayEnvelope::new(tau)))
        .unwrap();
    let mut one = zeros(1024);
    whole.get_samples(&mut one);

    assert_eq!(one, two);
}
