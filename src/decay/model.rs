// src/decay/model.rs

use std::collections::BTreeMap;

use crate::decay::material::MaterialComposition;
use crate::decay::nuclide::NuclideId;
use crate::error::{RepoError, Result};

/// Seconds per Julian year.
const YEAR_SECONDS: f64 = 365.25 * 24.0 * 3600.0;

/// Contract of the external decay-physics collaborator.
///
/// Exactly the three operations the series generator needs: build a material
/// (via [`MaterialComposition::new`]), age it by a duration, and query its
/// per-nuclide decay heat. Heat is reported in megawatts per nuclide; the
/// megawatt convention is part of this interface, and the series generator's
/// 1e6 conversion to watts depends on it.
pub trait DecayModel {
    /// Ages `material` by `seconds`, returning a new composition. The input
    /// is never mutated.
    fn age(&self, material: &MaterialComposition, seconds: f64) -> Result<MaterialComposition>;

    /// Per-nuclide decay heat of `material` in megawatts.
    fn decay_heat(&self, material: &MaterialComposition) -> Result<BTreeMap<NuclideId, f64>>;
}

/// Decay data for one nuclide in a [`HalfLifeModel`] table.
#[derive(Debug, Clone, Copy)]
pub struct NuclideData {
    /// Half-life [s].
    pub half_life: f64,
    /// Specific thermal power at unit mass [W/g], short-lived daughters
    /// included where the literature value does so.
    pub specific_power: f64,
}

/// Table-driven decay model: independent exponential decay per nuclide.
///
/// Daughter in-growth is not modeled; specific powers that already fold in
/// short-lived daughters (sr-90/y-90, cs-137/ba-137m) keep the heat estimate
/// honest for the dominant heat producers of spent fuel. A nuclide missing
/// from the table is an error, never a silent zero.
#[derive(Debug, Clone, Default)]
pub struct HalfLifeModel {
    table: BTreeMap<NuclideId, NuclideData>,
}

impl HalfLifeModel {
    pub fn new() -> Self {
        HalfLifeModel {
            table: BTreeMap::new(),
        }
    }

    /// Adds or replaces the entry for `id`.
    pub fn insert(&mut self, id: NuclideId, data: NuclideData) {
        self.table.insert(id, data);
    }

    /// Built-in table covering the nuclides that dominate spent-fuel decay
    /// heat in the decades after discharge. Half-lives in years and specific
    /// powers in W/g are standard literature values.
    pub fn reference() -> Self {
        let entries: [(&str, f64, f64); 9] = [
            ("co-60", 5.2714, 17.45),
            ("sr-90", 28.79, 0.916),
            ("cs-137", 30.08, 0.417),
            ("pu-238", 87.7, 0.567),
            ("pu-239", 24_110.0, 0.0019),
            ("pu-240", 6_561.0, 0.0071),
            ("pu-241", 14.329, 0.0033),
            ("am-241", 432.6, 0.1145),
            ("cm-244", 18.1, 2.83),
        ];
        let mut model = HalfLifeModel::new();
        for (name, half_life_years, specific_power) in entries {
            let id = NuclideId::from_name(name).expect("reference table name");
            model.insert(
                id,
                NuclideData {
                    half_life: half_life_years * YEAR_SECONDS,
                    specific_power,
                },
            );
        }
        model
    }

    fn data(&self, id: NuclideId) -> Result<NuclideData> {
        self.table
            .get(&id)
            .copied()
            .ok_or_else(|| RepoError::UnknownNuclide {
                name: id.to_string(),
            })
    }
}

impl DecayModel for HalfLifeModel {
    fn age(&self, material: &MaterialComposition, seconds: f64) -> Result<MaterialComposition> {
        let mut masses = BTreeMap::new();
        for (id, mass) in material.iter() {
            let data = self.data(id)?;
            let fraction = (-std::f64::consts::LN_2 * seconds / data.half_life).exp();
            masses.insert(id, mass * fraction);
        }
        Ok(MaterialComposition::new(masses))
    }

    fn decay_heat(&self, material: &MaterialComposition) -> Result<BTreeMap<NuclideId, f64>> {
        let mut heat = BTreeMap::new();
        for (id, mass) in material.iter() {
            let data = self.data(id)?;
            // W -> MW, the unit this interface promises.
            heat.insert(id, mass * data.specific_power / 1e6);
        }
        Ok(heat)
    }
}
