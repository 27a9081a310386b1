//! Job description for a streaming run.
//!
//! A job captures everything needed to reproduce a run: comb geometry,
//! magnitude profile, scintillation rate, and the master seed. Jobs are
//! either assembled from command-line flags or deserialized from a JSON
//! file; the two routes yield identical configurations.

use std::f64::consts::PI;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Per-tone magnitude profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeProfile {
    /// Every tone at magnitude 1.0.
    Flat,
    /// 3 dB down per tone from the fundamental.
    Tapered,
}

/// One reproducible streaming run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Job {
    /// Tone spacing (and fundamental) in radians per sample.
    pub spacing_rads_per_sample: f64,
    /// Number of harmonics to generate.
    pub num_harmonics: usize,
    /// Samples per streamed epoch.
    pub epoch_size: usize,
    /// Number of epochs to stream.
    pub epochs: usize,
    /// Decorrelation period in samples; zero disables scintillation.
    pub decorrel_samples: u64,
    /// Per-tone magnitude profile.
    pub profile: MagnitudeProfile,
    /// Master seed for phase and scintillation streams.
    pub seed: u32,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            spacing_rads_per_sample: PI / 16.0,
            num_harmonics: 10,
            epoch_size: 2048,
            epochs: 1,
            decorrel_samples: 0,
            profile: MagnitudeProfile::Flat,
            seed: 0,
        }
    }
}

impl Job {
    /// Loads a job from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading job file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing job file {}", path.display()))
    }

    /// Builds the per-tone magnitude vector for the selected profile.
    pub fn magnitudes(&self) -> Arc<[f64]> {
        match self.profile {
            MagnitudeProfile::Flat => vec![1.0; self.num_harmonics].into(),
            MagnitudeProfile::Tapered => {
                let step = std::f64::consts::SQRT_2 / 2.0;
                (0..self.num_harmonics)
                    .map(|i| step.powi(i as i32))
                    .collect::<Vec<_>>()
                    .into()
            }
        }
    }
}
