//! Per-tone magnitude envelope capability.
//!
//! The comb generator does not prescribe any particular envelope beyond a
//! constant magnitude per tone. Clients wanting per-sample modulation
//! implement [`EnvelopeSource`]; the bundled [`ScintillationEnvelope`] binds
//! the scintillation engine to a Rayleigh distributor, giving each harmonic
//! an independently ramping magnitude trajectory.

use crate::distributor::RayleighDistributor;
use crate::scintillation::{self, ScintillationState};

/// Per-sample magnitude envelope supplier.
///
/// The comb generator invokes this once per harmonic per epoch, in strictly
/// increasing harmonic order. Implementers own the buffer they hand back;
/// the returned slice must hold at least `num_samples` values and is
/// consumed immediately, so it only needs to stay valid until the next
/// invocation.
pub trait EnvelopeSource {
    /// Produces the envelope for one harmonic over one epoch.
    ///
    /// # Arguments
    /// * `current_sample` - The harmonic's cumulative sample count at the
    ///   start of the epoch.
    /// * `num_samples` - Number of envelope values required.
    /// * `harmonic` - Zero-based harmonic index (0 is the fundamental).
    /// * `nominal_mag` - The harmonic's configured magnitude.
    fn envelope(
        &mut self,
        current_sample: u64,
        num_samples: usize,
        harmonic: usize,
        nominal_mag: f64,
    ) -> &[f64];
}

/// Scintillating envelope: a piecewise-linear Rayleigh random walk per
/// harmonic.
///
/// One Rayleigh distributor serves every harmonic; reproducibility therefore
/// depends on the caller preserving increasing harmonic order, which the
/// comb generator guarantees.
#[derive(Clone)]
pub struct ScintillationEnvelope {
    states: Vec<ScintillationState>,
    scratch: Vec<f64>,
    decorrelation_period: u64,
    rayleigh: RayleighDistributor,
}

impl ScintillationEnvelope {
    /// Creates an adapter with capacity for `max_harmonics` tones.
    ///
    /// The adapter is inert until [`reset`](Self::reset) seeds it.
    pub fn new(max_harmonics: usize) -> Self {
        Self {
            states: vec![ScintillationState::new(0.0); max_harmonics],
            scratch: Vec::new(),
            decorrelation_period: 0,
            rayleigh: RayleighDistributor::new(0),
        }
    }

    /// Prepares a scintillation run.
    ///
    /// Reseeds the Rayleigh distributor, then draws an initial magnitude for
    /// each harmonic around its nominal magnitude (1.0 where
    /// `nominal_magnitudes` is absent) with a zero slope; the first true
    /// slope is computed by the engine on the first envelope request.
    ///
    /// `decorrelation_period` must be non-zero, and `num_harmonics` must not
    /// exceed the capacity given at construction; both are caller
    /// preconditions.
    pub fn reset(
        &mut self,
        num_harmonics: usize,
        decorrelation_period: u64,
        nominal_magnitudes: Option<&[f64]>,
        seed: u32,
    ) {
        self.decorrelation_period = decorrelation_period;
        self.rayleigh.reset(seed);

        for (i, state) in self.states.iter_mut().take(num_harmonics).enumerate() {
            let nominal = nominal_magnitudes.map_or(1.0, |mags| mags[i]);
            *state = ScintillationState::new(self.rayleigh.value(nominal));
        }
        for state in self.states.iter_mut().skip(num_harmonics) {
            *state = ScintillationState::new(0.0);
        }
    }
}

impl EnvelopeSource for ScintillationEnvelope {
    fn envelope(
        &mut self,
        current_sample: u64,
        num_samples: usize,
        harmonic: usize,
        nominal_mag: f64,
    ) -> &[f64] {
        if self.scratch.len() < num_samples {
            self.scratch.resize(num_samples, 0.0);
        }

        let Self {
            states,
            scratch,
            decorrelation_period,
            rayleigh,
        } = self;
        scintillation::run(
            &mut scratch[..num_samples],
            || rayleigh.value(nominal_mag),
            &mut states[harmonic],
            current_sample,
            *decorrelation_period,
        );
        &scratch[..num_samples]
    }
}
