//! Complex heterodyne tone generator.
//!
//! A [`PhasorOscillator`] produces a unit-magnitude complex exponential by
//! rotating a phasor once per sample with a fixed complex rate. Trigonometric
//! functions are evaluated only at reset time; the per-sample cost is one
//! complex multiply plus a cheap renormalization. The oscillator tracks a
//! cumulative sample count, which downstream envelope logic uses as its
//! decorrelation-grid clock.

use num_complex::Complex64;

/// Rotating-phasor tone generator.
///
/// The phasor state is `e^(j*theta)` and advances by multiplication with the
/// unit rate `e^(j*delta)` each sample. A first-order Newton step
/// (`p * (1.5 - 0.5*|p|^2)`) pins the magnitude back to 1.0 on every sample,
/// so output is bit-identical no matter how a run is split across calls.
#[derive(Debug, Clone, Copy)]
pub struct PhasorOscillator {
    phasor: Complex64,
    rate: Complex64,
    sample_count: u64,
}

impl Default for PhasorOscillator {
    fn default() -> Self {
        Self::new()
    }
}

impl PhasorOscillator {
    /// Creates an oscillator in the neutral state.
    ///
    /// A neutral oscillator emits zeros if driven and holds a zero sample
    /// count. Use [`reset`](Self::reset) to configure a tone.
    pub fn new() -> Self {
        Self {
            phasor: Complex64::new(0.0, 0.0),
            rate: Complex64::new(1.0, 0.0),
            sample_count: 0,
        }
    }

    /// Positions the phasor at `e^(j*initial_phase)` with an angular step of
    /// `radians_per_sample`, and zeroes the cumulative sample count.
    pub fn reset(&mut self, radians_per_sample: f64, initial_phase: f64) {
        self.phasor = Complex64::from_polar(1.0, initial_phase);
        self.rate = Complex64::from_polar(1.0, radians_per_sample);
        self.sample_count = 0;
    }

    /// Returns the oscillator to the neutral zero-output state.
    pub fn reset_neutral(&mut self) {
        *self = Self::new();
    }

    /// Cumulative number of samples produced since the last reset.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Emits the current sample and advances the phasor.
    #[inline]
    fn step(&mut self) -> Complex64 {
        let current = self.phasor;
        let advanced = self.phasor * self.rate;
        // Newton step toward |p| = 1; exact for |p| already 1, and applied
        // unconditionally so split runs stay bit-identical.
        let gain = 1.5 - 0.5 * advanced.norm_sqr();
        self.phasor = advanced * gain;
        self.sample_count += 1;
        current
    }

    /// Overwrites `out` with samples scaled by a constant magnitude.
    pub fn get_samples_scaled(&mut self, out: &mut [Complex64], scale: f64) {
        for slot in out.iter_mut() {
            *slot = self.step() * scale;
        }
    }

    /// Adds constant-scaled samples onto the existing contents of `out`.
    pub fn accum_samples_scaled(&mut self, out: &mut [Complex64], scale: f64) {
        for slot in out.iter_mut() {
            *slot += self.step() * scale;
        }
    }

    /// Overwrites `out` with samples scaled per-sample by `envelope`.
    ///
    /// `envelope` must hold at least `out.len()` values; this is a caller
    /// precondition, guaranteed by the comb generator's envelope contract.
    pub fn get_samples_enveloped(&mut self, out: &mut [Complex64], envelope: &[f64]) {
        for (slot, &env) in out.iter_mut().zip(envelope) {
            *slot = self.step() * env;
        }
    }

    /// Adds per-sample-scaled samples onto the existing contents of `out`.
    pub fn accum_samples_enveloped(&mut self, out: &mut [Complex64], envelope: &[f64]) {
        for (slot, &env) in out.iter_mut().zip(envelope) {
            *slot += self.step() * env;
        }
    }
}
