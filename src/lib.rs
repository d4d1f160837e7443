// src/lib.rs

//! Decay heat and near-field temperatures for spent-fuel assemblies in a
//! geologic repository.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`decay`] turns an assembly's discharge inventory into a monthly
//!    decay-heat series through a [`decay::DecayModel`] collaborator;
//! 2. [`fit`] condenses the series into a polynomial heat source with an
//!    explicit validity domain;
//! 3. [`temperature`] convolves that source with the Green's function of a
//!    finite-line, point, or infinite-line canister geometry to produce a
//!    temperature at a query point and time.
//!
//! [`input`] supplies the YAML scenario deck and the whitespace-delimited
//! discharge-inventory flat file both stages read from.

pub mod decay;
pub mod error;
pub mod fit;
pub mod input;
pub mod temperature;
pub mod utils;

pub use decay::{generate_series, HeatTimeSeries, MaterialComposition};
pub use error::{RepoError, Result};
pub use fit::{fit_polynomial, SourcePolynomial};
pub use input::{parse_input_deck, read_assembly_records};
pub use temperature::GeometryQuery;
