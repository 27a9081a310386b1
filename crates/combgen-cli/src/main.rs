//! combgen - stream a deterministic comb spectrum to stdout.
//!
//! Configures a comb generator from command-line flags or a JSON job file,
//! wires up the seed-derivation discipline (master seed -> sub-seeds ->
//! phase and scintillation streams), and streams complex samples as
//! tab-separated `re im` text lines. Identical jobs produce identical
//! streams.

mod job;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use combgen::{
    CombConfig, CombGenerator, Complex64, ScintillationEnvelope, SubSeedGenerator,
    UniformPhaseDistributor,
};

use job::{Job, MagnitudeProfile};

/// Largest comb this driver will configure; generator capacity is allocated
/// once for this maximum and reset below it per job.
const MAX_HARMONICS: usize = 240;

/// Stream a deterministic comb spectrum to stdout
#[derive(Parser)]
#[command(name = "combgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tone spacing (and fundamental) in radians per sample
    #[arg(long, default_value_t = std::f64::consts::PI / 16.0)]
    spacing_rads_per_sample: f64,

    /// Number of harmonics to generate at the given spacing
    #[arg(long, default_value_t = 10)]
    num_harmonics: usize,

    /// Samples per streamed epoch
    #[arg(long, default_value_t = 2048)]
    epoch_size: usize,

    /// Number of epochs to stream
    #[arg(long, default_value_t = 1)]
    epochs: usize,

    /// Decorrelation period in samples; zero disables scintillation
    #[arg(long, default_value_t = 0)]
    decorrel_samples: u64,

    /// Per-tone magnitude profile
    #[arg(long, value_enum, default_value_t = MagnitudeProfile::Flat)]
    profile: MagnitudeProfile,

    /// Master seed for phase and scintillation streams
    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// JSON job file; when given, overrides all flags above
    #[arg(long)]
    job: Option<PathBuf>,
}

impl Cli {
    fn to_job(&self) -> Job {
        Job {
            spacing_rads_per_sample: self.spacing_rads_per_sample,
            num_harmonics: self.num_harmonics,
            epoch_size: self.epoch_size,
            epochs: self.epochs,
            decorrel_samples: self.decorrel_samples,
            profile: self.profile,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let job = match &cli.job {
        Some(path) => Job::from_path(path)?,
        None => cli.to_job(),
    };
    run(&job)
}

fn run(job: &Job) -> Result<()> {
    if job.num_harmonics > MAX_HARMONICS {
        bail!(
            "requested {} harmonics but this driver caps at {}",
            job.num_harmonics,
            MAX_HARMONICS
        );
    }
    info!(
        "streaming {} epoch(s) of {} samples: {} harmonics at {} rads/sample, \
         decorrelation {}, profile {:?}, seed {:#010x}",
        job.epochs,
        job.epoch_size,
        job.num_harmonics,
        job.spacing_rads_per_sample,
        job.decorrel_samples,
        job.profile,
        job.seed
    );

    // Seed-derivation discipline: one master seed hands out uncorrelated
    // sub-seeds, consumed in a fixed order (phase first, then
    // scintillation).
    let mut sub_seeds = SubSeedGenerator::new(job.seed);

    let mut phase_distributor = UniformPhaseDistributor::new(sub_seeds.next_sub_seed());
    let phases: Arc<[f64]> = (0..job.num_harmonics)
        .map(|_| phase_distributor.value())
        .collect::<Vec<_>>()
        .into();
    let magnitudes = job.magnitudes();

    let mut config = CombConfig::new(job.num_harmonics, job.spacing_rads_per_sample)
        .with_magnitudes(magnitudes.clone())
        .with_phases(phases);

    if job.decorrel_samples > 0 {
        let mut envelope = ScintillationEnvelope::new(MAX_HARMONICS);
        envelope.reset(
            job.num_harmonics,
            job.decorrel_samples,
            Some(&magnitudes),
            sub_seeds.next_sub_seed(),
        );
        config = config.with_envelope(envelope);
    }

    let mut comb = CombGenerator::new(MAX_HARMONICS);
    comb.reset(config).context("configuring comb generator")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut buffer = vec![Complex64::new(0.0, 0.0); job.epoch_size];
    for _ in 0..job.epochs {
        comb.get_samples(&mut buffer);
        for sample in &buffer {
            writeln!(out, "{:.17e}\t{:.17e}", sample.re, sample.im)?;
        }
    }
    out.flush()?;
    Ok(())
}
