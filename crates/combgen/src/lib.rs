//! Deterministic comb-spectrum synthesis.
//!
//! This crate generates harmonic combs — sets of tones at integer multiples
//! of a fundamental angular step — as complex-valued sample buffers, for use
//! as synthetic test and reference waveforms. Tones may carry constant
//! magnitudes or "scintillate": ramp linearly between Rayleigh-distributed
//! magnitude targets drawn once per decorrelation period.
//!
//! # Determinism
//!
//! Given the same master seed and configuration, output is byte-identical
//! across runs on the same platform, regardless of how a run is split across
//! epoch requests. All randomness flows through PCG32 engines; independent
//! streams (phase, magnitude targets, per-instance seeding) are derived from
//! one master seed with BLAKE3 so they can never alias one another.
//!
//! # Example
//!
//! ```
//! use combgen::{CombConfig, CombGenerator, Complex64, ScintillationEnvelope, SubSeedGenerator};
//! use std::sync::Arc;
//!
//! let mut sub_seeds = SubSeedGenerator::new(0x1234_5678);
//!
//! let magnitudes: Arc<[f64]> = Arc::from(vec![1.0, 0.7, 0.5]);
//! let mut envelope = ScintillationEnvelope::new(3);
//! envelope.reset(3, 4000, Some(&magnitudes), sub_seeds.next_sub_seed());
//!
//! let mut comb = CombGenerator::new(3);
//! comb.reset(
//!     CombConfig::new(3, std::f64::consts::PI / 16.0)
//!         .with_magnitudes(magnitudes)
//!         .with_envelope(envelope),
//! )?;
//!
//! let mut buffer = vec![Complex64::new(0.0, 0.0); 4096];
//! comb.get_samples(&mut buffer);
//! # Ok::<(), combgen::CombError>(())
//! ```
//!
//! # Crate structure
//!
//! - [`comb`] - the comb generator and its run configuration
//! - [`phasor`] - rotating-phasor tone generator (no per-sample trig)
//! - [`scintillation`] - piecewise-linear magnitude random walk
//! - [`envelope`] - envelope capability trait and the scintillation adapter
//! - [`distributor`] - seeded Rayleigh and uniform-phase sources
//! - [`rng`] - PCG32 construction and BLAKE3 sub-seed derivation
//! - [`error`] - error taxonomy

pub mod comb;
pub mod distributor;
pub mod envelope;
pub mod error;
pub mod phasor;
pub mod rng;
pub mod scintillation;

// Re-export main types at crate root
pub use comb::{CombConfig, CombGenerator};
pub use distributor::{RayleighDistributor, UniformPhaseDistributor};
pub use envelope::{EnvelopeSource, ScintillationEnvelope};
pub use error::{CombError, CombResult};
pub use phasor::PhasorOscillator;
pub use rng::SubSeedGenerator;

pub use num_complex::Complex64;
