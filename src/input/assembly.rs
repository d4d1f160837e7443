// src/input/assembly.rs

use std::fs;
use std::path::Path;

use crate::error::{RepoError, Result};

/// One row of the discharge-inventory flat file: a single (assembly,
/// nuclide) pair. Records are immutable once parsed; the rows sharing an
/// `assembly_id` together describe that assembly's initial material.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyRecord {
    pub assembly_id: u64,
    pub reactor_id: u64,
    pub reactor_type: String,
    pub initial_uranium_kg: f64,
    pub initial_enrichment: f64,
    pub discharge_burnup: f64,
    pub discharge_date: String,
    pub discharge_time: String,
    pub total_assembly_decay_heat_kw: f64,
    pub name: String,
    pub evaluation_date: String,
    pub total_mass_g: f64,
    pub total_radioactivity_curies: f64,
}

const COLUMNS: usize = 13;

/// Parses whitespace-delimited assembly records, one per line, no header
/// row. Blank lines are skipped; anything else that does not yield exactly
/// the thirteen expected columns fails with its line number.
pub fn parse_assembly_records(contents: &str) -> Result<Vec<AssemblyRecord>> {
    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record_line(line, index + 1)?);
    }
    Ok(records)
}

/// Reads and parses an inventory flat file.
pub fn read_assembly_records<P: AsRef<Path>>(path: P) -> Result<Vec<AssemblyRecord>> {
    let contents = fs::read_to_string(path)?;
    parse_assembly_records(&contents)
}

fn parse_record_line(line: &str, line_no: usize) -> Result<AssemblyRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != COLUMNS {
        return Err(RepoError::MalformedRecord {
            line: line_no,
            message: format!("expected {COLUMNS} columns, found {}", fields.len()),
        });
    }

    let int = |idx: usize, label: &str| -> Result<u64> {
        fields[idx].parse().map_err(|_| RepoError::MalformedRecord {
            line: line_no,
            message: format!("{label} is not an integer: {:?}", fields[idx]),
        })
    };
    let float = |idx: usize, label: &str| -> Result<f64> {
        fields[idx].parse().map_err(|_| RepoError::MalformedRecord {
            line: line_no,
            message: format!("{label} is not a number: {:?}", fields[idx]),
        })
    };

    Ok(AssemblyRecord {
        assembly_id: int(0, "assembly_id")?,
        reactor_id: int(1, "reactor_id")?,
        reactor_type: fields[2].to_string(),
        initial_uranium_kg: float(3, "initial_uranium_kg")?,
        initial_enrichment: float(4, "initial_enrichment")?,
        discharge_burnup: float(5, "discharge_burnup")?,
        discharge_date: fields[6].to_string(),
        discharge_time: fields[7].to_string(),
        total_assembly_decay_heat_kw: float(8, "total_assembly_decay_heat_kw")?,
        name: fields[9].to_string(),
        evaluation_date: fields[10].to_string(),
        total_mass_g: float(11, "total_mass_g")?,
        total_radioactivity_curies: float(12, "total_radioactivity_curies")?,
    })
}
