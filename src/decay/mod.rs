// src/decay/mod.rs

pub mod material;
pub mod model;
pub mod nuclide;
pub mod series;

pub use material::MaterialComposition;
pub use model::{DecayModel, HalfLifeModel, NuclideData};
pub use nuclide::{is_excluded_metastable, NuclideId, EXCLUDED_METASTABLES};
pub use series::{
    decay_heat_watts, generate_series, HeatTimeSeries, MEGAWATTS_TO_WATTS, MONTH_SECONDS,
};
