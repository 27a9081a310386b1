//! Run configuration for the comb generator.

use std::fmt;
use std::sync::Arc;

use crate::envelope::EnvelopeSource;

/// One tagged configuration value for [`CombGenerator::reset`].
///
/// Collapses the historical spread of reset signatures into a single struct:
/// harmonic count, fundamental step, and explicitly optional magnitude
/// vector, phase vector, and envelope capability. Absent magnitudes mean
/// 1.0 per tone; absent phases mean 0.0; an absent envelope means constant
/// per-tone scaling.
///
/// Magnitude and phase vectors are reference-counted slices so the same
/// allocation can be read by the generator and by a bound envelope adapter
/// for the lifetime of a run; they are never written after being shared.
///
/// Vectors shorter than the harmonic count are a caller precondition
/// violation, not a checked error.
///
/// [`CombGenerator::reset`]: super::CombGenerator::reset
pub struct CombConfig {
    /// Number of harmonics to generate.
    pub num_harmonics: usize,
    /// Fundamental frequency, and therefore tone spacing, in radians per
    /// sample.
    pub fundamental_rads_per_sample: f64,
    /// Per-harmonic magnitudes; `None` means 1.0 for every tone.
    pub magnitudes: Option<Arc<[f64]>>,
    /// Per-harmonic starting phases in radians; `None` means 0.0.
    pub phases: Option<Arc<[f64]>>,
    /// Per-sample envelope capability; `None` means constant magnitudes.
    pub envelope: Option<Box<dyn EnvelopeSource + Send>>,
}

impl CombConfig {
    /// Starts a configuration with defaults for everything optional.
    pub fn new(num_harmonics: usize, fundamental_rads_per_sample: f64) -> Self {
        Self {
            num_harmonics,
            fundamental_rads_per_sample,
            magnitudes: None,
            phases: None,
            envelope: None,
        }
    }

    /// Attaches a shared magnitude vector.
    pub fn with_magnitudes(mut self, magnitudes: Arc<[f64]>) -> Self {
        self.magnitudes = Some(magnitudes);
        self
    }

    /// Attaches a shared phase vector.
    pub fn with_phases(mut self, phases: Arc<[f64]>) -> Self {
        self.phases = Some(phases);
        self
    }

    /// Attaches a per-sample envelope capability.
    pub fn with_envelope(mut self, envelope: impl EnvelopeSource + Send + 'static) -> Self {
        self.envelope = Some(Box::new(envelope));
        self
    }
}

impl fmt::Debug for CombConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombConfig")
            .field("num_harmonics", &self.num_harmonics)
            .field(
                "fundamental_rads_per_sample",
                &self.fundamental_rads_per_sample,
            )
            .field("magnitudes", &self.magnitudes)
            .field("phases", &self.phases)
            .field("envelope", &self.envelope.as_ref().map(|_| "..."))
            .finish()
    }
}
