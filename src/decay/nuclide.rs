// src/decay/nuclide.rs

use std::fmt;

use crate::error::{RepoError, Result};

/// Metastable nuclides the decay collaborator cannot resolve. Records naming
/// these are skipped when a material is assembled instead of being treated
/// as an error; the set is deliberately a named constant so it can be
/// audited and extended.
pub const EXCLUDED_METASTABLES: [&str; 3] = ["ag-108m", "am-242m", "ag-110m"];

/// Returns true when `name` belongs to the fixed metastable exclusion set.
pub fn is_excluded_metastable(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    EXCLUDED_METASTABLES.contains(&lower.as_str())
}

/// Element symbols indexed by Z - 1.
const ELEMENT_SYMBOLS: [&str; 118] = [
    "h", "he", "li", "be", "b", "c", "n", "o", "f", "ne", "na", "mg", "al", "si", "p", "s", "cl",
    "ar", "k", "ca", "sc", "ti", "v", "cr", "mn", "fe", "co", "ni", "cu", "zn", "ga", "ge", "as",
    "se", "br", "kr", "rb", "sr", "y", "zr", "nb", "mo", "tc", "ru", "rh", "pd", "ag", "cd", "in",
    "sn", "sb", "te", "i", "xe", "cs", "ba", "la", "ce", "pr", "nd", "pm", "sm", "eu", "gd", "tb",
    "dy", "ho", "er", "tm", "yb", "lu", "hf", "ta", "w", "re", "os", "ir", "pt", "au", "hg", "tl",
    "pb", "bi", "po", "at", "rn", "fr", "ra", "ac", "th", "pa", "u", "np", "pu", "am", "cm", "bk",
    "cf", "es", "fm", "md", "no", "lr", "rf", "db", "sg", "bh", "hs", "mt", "ds", "rg", "cn", "nh",
    "fl", "mc", "lv", "ts", "og",
];

/// Canonical nuclide identifier parsed from textual names like `cs-137` or
/// `am-242m`.
///
/// The numeric form follows the ZZZAAASSSS convention
/// (`Z * 10_000_000 + A * 10_000 + state`), so identifiers sort by element,
/// then mass number, then metastable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NuclideId {
    z: u32,
    a: u32,
    state: u32,
}

impl NuclideId {
    /// Builds an identifier directly from atomic and mass numbers.
    ///
    /// # Returns
    ///
    /// * `RepoError::UnknownNuclide` when `z` names no known element or the
    ///   mass number is zero. Validating here keeps `Display` total.
    pub fn new(z: u32, a: u32) -> Result<Self> {
        if z == 0 || z as usize > ELEMENT_SYMBOLS.len() || a == 0 {
            return Err(RepoError::UnknownNuclide {
                name: format!("z={z}, a={a}"),
            });
        }
        Ok(NuclideId { z, a, state: 0 })
    }

    /// Parses a textual name of the form `<symbol>-<mass>[m]`,
    /// case-insensitive.
    ///
    /// # Returns
    ///
    /// * `Ok(NuclideId)` on success.
    /// * `RepoError::UnknownNuclide` when the symbol or mass number cannot
    ///   be resolved.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let unknown = || RepoError::UnknownNuclide {
            name: name.to_string(),
        };

        let (symbol, mass) = lower.split_once('-').ok_or_else(unknown)?;
        let z = ELEMENT_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|i| i as u32 + 1)
            .ok_or_else(unknown)?;

        let (mass, state) = match mass.strip_suffix('m') {
            Some(stripped) => (stripped, 1),
            None => (mass, 0),
        };
        let a: u32 = mass.parse().map_err(|_| unknown())?;
        if a == 0 {
            return Err(unknown());
        }
        Ok(NuclideId { z, a, state })
    }

    /// ZZZAAASSSS numeric identifier.
    pub fn id(&self) -> u32 {
        self.z * 10_000_000 + self.a * 10_000 + self.state
    }

    pub fn atomic_number(&self) -> u32 {
        self.z
    }

    pub fn mass_number(&self) -> u32 {
        self.a
    }

    pub fn is_metastable(&self) -> bool {
        self.state != 0
    }
}

impl fmt::Display for NuclideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = ELEMENT_SYMBOLS[(self.z - 1) as usize];
        write!(f, "{}-{}", symbol, self.a)?;
        if self.state != 0 {
            write!(f, "m")?;
        }
        Ok(())
    }
}
