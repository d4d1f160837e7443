// src/decay/series.rs

use crate::decay::material::MaterialComposition;
use crate::decay::model::DecayModel;
use crate::error::{RepoError, Result};

/// Seconds per simulation month (30 days).
pub const MONTH_SECONDS: f64 = 30.0 * 24.0 * 3600.0;

/// Conversion from the decay collaborator's megawatts to watts. This factor
/// is a hard contract of the [`DecayModel`](crate::decay::DecayModel)
/// interface, not a tunable.
pub const MEGAWATTS_TO_WATTS: f64 = 1e6;

/// Decay-heat history of one assembly: `(t months, Q watts)` pairs at a
/// fixed one-month step starting at `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatTimeSeries {
    times: Vec<f64>,
    watts: Vec<f64>,
}

impl HeatTimeSeries {
    /// Builds a series from parallel time and heat vectors.
    ///
    /// # Returns
    ///
    /// * `RepoError::DomainRange` when the vectors disagree in length, are
    ///   empty, or the times are not strictly increasing.
    pub fn new(times: Vec<f64>, watts: Vec<f64>) -> Result<Self> {
        if times.len() != watts.len() {
            return Err(RepoError::DomainRange(format!(
                "series length mismatch: {} times vs {} heat values",
                times.len(),
                watts.len()
            )));
        }
        if times.is_empty() {
            return Err(RepoError::DomainRange("empty heat series".to_string()));
        }
        if times.windows(2).any(|w| w[1] <= w[0]) {
            return Err(RepoError::DomainRange(
                "series times must be strictly increasing".to_string(),
            ));
        }
        Ok(HeatTimeSeries { times, watts })
    }

    /// Sample times [months].
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Heat values [W].
    pub fn watts(&self) -> &[f64] {
        &self.watts
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Whether the heat values never increase from one sample to the next.
    ///
    /// Decay heat of a purely decaying inventory should satisfy this, but
    /// fit artifacts or excluded nuclides can break it, so callers check
    /// rather than assume.
    pub fn is_non_increasing(&self) -> bool {
        self.watts.windows(2).all(|w| w[1] <= w[0])
    }
}

/// Total decay heat of `material` in watts: the per-nuclide megawatt
/// contributions summed and scaled by [`MEGAWATTS_TO_WATTS`].
pub fn decay_heat_watts<M: DecayModel>(model: &M, material: &MaterialComposition) -> Result<f64> {
    let per_nuclide = model.decay_heat(material)?;
    Ok(per_nuclide.values().sum::<f64>() * MEGAWATTS_TO_WATTS)
}

/// Generates the monthly decay-heat series of `initial` over `years`.
///
/// The series has `years * 12` samples. Sample 0 is the heat of the initial
/// composition at `t = 0`; each later sample ages the previous composition
/// by one 30-day month and queries its heat. `initial` itself is never
/// mutated.
///
/// # Arguments
///
/// * `model` - Decay-physics collaborator.
/// * `initial` - Discharge-time composition.
/// * `years` - Number of years to simulate, at least 1.
pub fn generate_series<M: DecayModel>(
    model: &M,
    initial: &MaterialComposition,
    years: u32,
) -> Result<HeatTimeSeries> {
    if years == 0 {
        return Err(RepoError::DomainRange(
            "series length must cover at least one year".to_string(),
        ));
    }
    let steps = (years * 12) as usize;
    let mut times = Vec::with_capacity(steps);
    let mut watts = Vec::with_capacity(steps);

    times.push(0.0);
    watts.push(decay_heat_watts(model, initial)?);

    let mut current = initial.clone();
    for step in 1..steps {
        current = model.age(&current, MONTH_SECONDS)?;
        times.push(step as f64);
        watts.push(decay_heat_watts(model, &current)?);
    }
    HeatTimeSeries::new(times, watts)
}
