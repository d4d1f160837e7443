// src/decay/material.rs

use std::collections::BTreeMap;

use crate::decay::nuclide::{is_excluded_metastable, NuclideId};
use crate::error::{RepoError, Result};
use crate::input::assembly::AssemblyRecord;

/// Isotopic composition of one assembly at a single point in time, mapping
/// nuclide identifiers to masses in grams.
///
/// Compositions are value types: aging a composition produces a new one and
/// the original stays usable, so the discharge-time inventory can seed any
/// number of decay series.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialComposition {
    masses: BTreeMap<NuclideId, f64>,
}

impl MaterialComposition {
    /// Builds a composition directly from a nuclide-to-grams mapping.
    pub fn new(masses: BTreeMap<NuclideId, f64>) -> Self {
        MaterialComposition { masses }
    }

    /// Assembles the discharge-time composition of `assembly_id` from its
    /// flat-file records.
    ///
    /// Nuclides in the metastable exclusion set are skipped. Any other name
    /// that cannot be resolved is an error rather than a silently missing
    /// mass.
    ///
    /// # Returns
    ///
    /// * `RepoError::UnknownAssembly` when no record matches `assembly_id`.
    /// * `RepoError::UnknownNuclide` for an unresolvable non-excluded name.
    pub fn from_records(assembly_id: u64, records: &[AssemblyRecord]) -> Result<Self> {
        let mut masses = BTreeMap::new();
        let mut matched = false;
        for record in records.iter().filter(|r| r.assembly_id == assembly_id) {
            matched = true;
            if is_excluded_metastable(&record.name) {
                continue;
            }
            let id = NuclideId::from_name(&record.name)?;
            *masses.entry(id).or_insert(0.0) += record.total_mass_g;
        }
        if !matched {
            return Err(RepoError::UnknownAssembly { assembly_id });
        }
        Ok(MaterialComposition { masses })
    }

    /// Mass of one nuclide in grams, `0.0` when absent.
    pub fn mass(&self, id: NuclideId) -> f64 {
        self.masses.get(&id).copied().unwrap_or(0.0)
    }

    /// Total mass in grams, inferred from the constituents.
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NuclideId, f64)> + '_ {
        self.masses.iter().map(|(&id, &mass)| (id, mass))
    }
}
