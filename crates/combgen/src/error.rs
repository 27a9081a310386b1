//! Error types for comb-spectrum generation.

use thiserror::Error;

/// Result type for comb generator operations.
pub type CombResult<T> = Result<T, CombError>;

/// Errors that can occur while configuring a comb generator.
///
/// Sample-generation calls never fail; the only checked failure is raised
/// synchronously from [`CombGenerator::reset`](crate::CombGenerator::reset),
/// before any oscillator state has been touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombError {
    /// Requested harmonic count exceeds the capacity fixed at construction.
    #[error("requested {requested} harmonics but capacity is {max}")]
    TooManyHarmonics {
        /// Harmonic count requested at reset.
        requested: usize,
        /// Capacity specified at construction.
        max: usize,
    },
}
