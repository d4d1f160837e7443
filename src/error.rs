// src/error.rs

use thiserror::Error;

/// Errors surfaced by the decay-heat and temperature pipeline.
///
/// Input-data problems (malformed rows, unknown assemblies or nuclides) are
/// kept distinct from domain-range violations (evaluating outside a fitted
/// or supported range) and from numerical failures (quadrature that cannot
/// converge). All of them propagate to the caller immediately; there are no
/// silent defaults.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("malformed assembly record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("no records found for assembly {assembly_id}")]
    UnknownAssembly { assembly_id: u64 },

    #[error("unresolvable nuclide name: {name}")]
    UnknownNuclide { name: String },

    #[error("evaluation outside supported range: {0}")]
    DomainRange(String),

    #[error("numerical failure: {0}")]
    Numerical(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input deck error: {0}")]
    Deck(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RepoError>;
