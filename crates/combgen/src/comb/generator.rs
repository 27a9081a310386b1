//! The comb generator proper.

use num_complex::Complex64;
use std::sync::Arc;

use crate::envelope::EnvelopeSource;
use crate::error::{CombError, CombResult};
use crate::phasor::PhasorOscillator;

use super::CombConfig;

/// Generates a harmonic spectrum as a complex time series.
///
/// A generator owns a fixed batch of phasor oscillators, sized at
/// construction. [`reset`](Self::reset) configures a run: harmonic `i`
/// rotates at `(i + 1)` times the fundamental step, so there is never a DC
/// tone. Each epoch request drives the configured oscillators into the
/// caller's buffer, each scaled either by its constant magnitude or by a
/// per-sample envelope obtained from the configured capability.
pub struct CombGenerator {
    oscillators: Vec<PhasorOscillator>,
    magnitudes: Option<Arc<[f64]>>,
    envelope: Option<Box<dyn EnvelopeSource + Send>>,
    num_harmonics: usize,
}

impl CombGenerator {
    /// Creates a generator with capacity for `max_harmonics` tones.
    ///
    /// The harmonic count starts at zero; until a reset, every epoch request
    /// yields silence.
    pub fn new(max_harmonics: usize) -> Self {
        Self {
            oscillators: vec![PhasorOscillator::new(); max_harmonics],
            magnitudes: None,
            envelope: None,
            num_harmonics: 0,
        }
    }

    /// Capacity fixed at construction.
    pub fn max_harmonics(&self) -> usize {
        self.oscillators.len()
    }

    /// Currently configured harmonic count.
    pub fn num_harmonics(&self) -> usize {
        self.num_harmonics
    }

    /// Configures a run.
    ///
    /// Fails if the requested harmonic count exceeds the construction-time
    /// capacity; the check happens before any oscillator is touched, so a
    /// failed reset leaves the previous configuration fully intact.
    /// Oscillator slots beyond the requested count are returned to their
    /// neutral state so a later, wider reset cannot observe stale phase.
    pub fn reset(&mut self, config: CombConfig) -> CombResult<()> {
        if config.num_harmonics > self.oscillators.len() {
            return Err(CombError::TooManyHarmonics {
                requested: config.num_harmonics,
                max: self.oscillators.len(),
            });
        }

        for (i, oscillator) in self
            .oscillators
            .iter_mut()
            .take(config.num_harmonics)
            .enumerate()
        {
            let step = (i as f64 + 1.0) * config.fundamental_rads_per_sample;
            let phase = config.phases.as_ref().map_or(0.0, |phases| phases[i]);
            oscillator.reset(step, phase);
        }
        for oscillator in self.oscillators.iter_mut().skip(config.num_harmonics) {
            oscillator.reset_neutral();
        }

        self.num_harmonics = config.num_harmonics;
        self.magnitudes = config.magnitudes;
        self.envelope = config.envelope;
        Ok(())
    }

    /// Returns the generator to its just-constructed state.
    ///
    /// Harmonic count drops to zero, magnitude and envelope references are
    /// released, and every oscillator slot is neutralized; subsequent epoch
    /// requests yield all zeros. Capacity is retained.
    pub fn clear(&mut self) {
        for oscillator in &mut self.oscillators {
            oscillator.reset_neutral();
        }
        self.magnitudes = None;
        self.envelope = None;
        self.num_harmonics = 0;
    }

    /// Fills `out` with one epoch of the configured comb.
    ///
    /// The first harmonic overwrites the buffer and the rest accumulate onto
    /// it, which spares a separate zero-fill pass whenever at least one
    /// harmonic is configured. With zero harmonics the buffer is zeroed.
    pub fn get_samples(&mut self, out: &mut [Complex64]) {
        if self.num_harmonics == 0 {
            out.fill(Complex64::new(0.0, 0.0));
            return;
        }
        self.drive(out, true);
    }

    /// Adds one epoch of the configured comb onto the existing contents of
    /// `out`.
    ///
    /// Every harmonic accumulates, including the first; use this to
    /// superimpose several generator instances into one signal.
    pub fn accum_samples(&mut self, out: &mut [Complex64]) {
        self.drive(out, false);
    }

    fn drive(&mut self, out: &mut [Complex64], overwrite_first: bool) {
        for i in 0..self.num_harmonics {
            let nominal = self.magnitudes.as_ref().map_or(1.0, |mags| mags[i]);
            let overwrite = overwrite_first && i == 0;

            match self.envelope.as_mut() {
                Some(envelope) => {
                    let current_sample = self.oscillators[i].sample_count();
                    let scale = envelope.envelope(current_sample, out.len(), i, nominal);
                    if overwrite {
                        self.oscillators[i].get_samples_enveloped(out, scale);
                    } else {
                        self.oscillators[i].accum_samples_enveloped(out, scale);
                    }
                }
                None => {
                    if overwrite {
                        self.oscillators[i].get_samples_scaled(out, nominal);
                    } else {
                        self.oscillators[i].accum_samples_scaled(out, nominal);
                    }
                }
            }
        }
    }
}
