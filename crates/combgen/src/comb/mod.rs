//! Harmonic comb-spectrum generation.
//!
//! A comb is a set of tones at integer multiples of a fundamental angular
//! step, accumulated into one complex sample buffer. This module owns the
//! batch of phasor oscillators, the run configuration, and the
//! constant-versus-envelope scaling decision; the scintillation machinery
//! lives in [`crate::envelope`] and plugs in through the envelope capability.

mod config;
mod generator;

#[cfg(test)]
mod tests_envelope;
#[cfg(test)]
mod tests_scintillation;

pub use config::CombConfig;
pub use generator::CombGenerator;
