//! Piecewise-linear magnitude random walk.
//!
//! The engine here is a pure algorithm over externally owned state: callers
//! hold one [`ScintillationState`] per tone and hand it back for every run,
//! together with the tone's cumulative sample counter. Keeping the state and
//! the random source outside the engine lets the ramp logic be exercised
//! without any particular distribution attached.

/// Ramp state for one scintillating tone.
///
/// `magnitude` is the value most recently written to the envelope output;
/// `slope` is the per-sample change in effect until the next decorrelation
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScintillationState {
    /// Current magnitude value.
    pub magnitude: f64,
    /// Change in magnitude per sample.
    pub slope: f64,
}

impl ScintillationState {
    /// Creates a state at `magnitude` with a zero slope.
    ///
    /// The first run over a fresh state recomputes the slope immediately at
    /// the sample-zero boundary, so zero is always the right starting slope.
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            slope: 0.0,
        }
    }
}

/// Fills `out` with a magnitude ramp, advancing `state` as it goes.
///
/// For each sample the current slope is accumulated into the magnitude and
/// the result written out. Whenever the running sample counter lands on a
/// multiple of `decorrelation_period`, a fresh target is drawn from
/// `draw_target` and the slope recomputed to arrive at that target exactly
/// one period later. Note the boundary test uses the counter value *before*
/// it advances: sample zero of a fresh state emits the pre-seeded magnitude
/// unchanged, and the first real slope takes effect from sample one.
///
/// Trajectories are reproducible across arbitrarily split runs as long as
/// `sample_counter` continues exactly where the previous run ended.
///
/// `decorrelation_period` must be non-zero; this is an unchecked caller
/// precondition.
pub fn run(
    out: &mut [f64],
    mut draw_target: impl FnMut() -> f64,
    state: &mut ScintillationState,
    mut sample_counter: u64,
    decorrelation_period: u64,
) {
    for slot in out.iter_mut() {
        state.magnitude += state.slope;
        *slot = state.magnitude;

        if sample_counter % decorrelation_period == 0 {
            let target = draw_target();
            state.slope = (target - state.magnitude) / decorrelation_period as f64;
        }
        sample_counter += 1;
    }
}
