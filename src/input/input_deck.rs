// src/input/input_deck.rs
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScenarioSettings {
    pub assembly_id: u64, // Assembly whose inventory seeds the heat source
    pub years: u32,       // Length of the decay-heat series [a]
    pub fit_order: usize, // Polynomial order of the source fit
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MediumProperties {
    pub thermal_conductivity: f64, // [W/(m*K)]
    pub thermal_diffusivity: f64,  // [m^2/s]
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CanisterGeometry {
    pub length: f64, // [m] Canister length, the finite-line source extent
}

/// How the fitted source relates to the canister total.
///
/// A per-assembly fit scales the kernel by the number of assemblies in the
/// canister; a fit computed for a whole canister keeps the kernel unscaled.
/// Both paths are explicit configuration rather than a constant buried in
/// the kernels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SourceStrength {
    PerAssembly { assemblies: f64 },
    Canister,
}

impl SourceStrength {
    /// Linear factor applied to the fitted heat rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            SourceStrength::PerAssembly { assemblies } => *assemblies,
            SourceStrength::Canister => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceGeometry {
    Line,
    Point,
    InfiniteLine,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QueryPoint {
    pub x: f64, // [m] Offset from the canister midpoint
    pub y: f64, // [m] Along the canister axis
    #[serde(default)]
    pub z: f64, // [m]
    pub t: f64, // [months] Time since emplacement
    pub geometry: SourceGeometry,
}

#[derive(Debug, Deserialize)]
pub struct InputDeck {
    pub scenario: ScenarioSettings,
    pub medium: MediumProperties,
    pub canister: CanisterGeometry,
    pub source: SourceStrength,
    pub queries: Vec<QueryPoint>,
}
