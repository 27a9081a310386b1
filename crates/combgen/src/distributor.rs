//! Seeded random-value distributors.
//!
//! Each distributor owns its own PCG32 engine, injected with an explicit
//! seed, so independent streams never share hidden state. Reseeding via
//! `reset` fully restarts the stream.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use rand::Rng;
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;

use crate::rng::create_rng;

/// Rayleigh-distributed magnitude source.
///
/// Values are formed as the vector magnitude of two independent zero-mean
/// Gaussian draws with standard deviation `desired_mean / sqrt(pi/2)`; that
/// sigma relationship makes the expected value of the result equal the
/// requested mean.
#[derive(Clone)]
pub struct RayleighDistributor {
    engine: Pcg32,
}

impl RayleighDistributor {
    /// Creates a distributor seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            engine: create_rng(seed),
        }
    }

    /// Deterministically reseeds the internal engine.
    pub fn reset(&mut self, seed: u32) {
        self.engine = create_rng(seed);
    }

    /// Draws a Rayleigh-distributed value with the given expected mean.
    ///
    /// Returns 0.0 for a non-positive `desired_mean`.
    pub fn value(&mut self, desired_mean: f64) -> f64 {
        if desired_mean <= 0.0 {
            return 0.0;
        }

        let sigma = desired_mean / FRAC_PI_2.sqrt();
        let x: f64 = self.engine.sample::<f64, _>(StandardNormal) * sigma;
        let y: f64 = self.engine.sample::<f64, _>(StandardNormal) * sigma;
        (x * x + y * y).sqrt()
    }
}

/// Uniform phase source over `(-pi, pi]`.
#[derive(Clone)]
pub struct UniformPhaseDistributor {
    engine: Pcg32,
}

impl UniformPhaseDistributor {
    /// Creates a distributor seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            engine: create_rng(seed),
        }
    }

    /// Deterministically reseeds the internal engine.
    pub fn reset(&mut self, seed: u32) {
        self.engine = create_rng(seed);
    }

    /// Draws a phase uniformly distributed in `(-pi, pi]` radians.
    pub fn value(&mut self) -> f64 {
        // u in [0, 1) maps to (-pi, pi], keeping pi inclusive.
        let u: f64 = self.engine.gen();
        PI - TAU * u
    }
}
