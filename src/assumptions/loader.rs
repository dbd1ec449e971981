//! CSV-based assumption loader
//!
//! Reads `parameter,value` rows from data/assumptions/strategy_assumptions.csv

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{InvestError, Result};

/// Default path to the strategy assumptions file
pub const DEFAULT_ASSUMPTIONS_FILE: &str = "data/assumptions/strategy_assumptions.csv";

/// Load parameter overrides from a CSV file
pub fn load_parameters(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path)?;
    load_parameters_from_reader(file)
}

/// Load parameter overrides from any reader
/// Returns (key, value) pairs in file order
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut parameters = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or_default().to_string();
        let raw = record.get(1).unwrap_or_default();
        let value: f64 = raw.parse().map_err(|_| {
            InvestError::Assumptions(format!("Invalid value for {}: {:?}", key, raw))
        })?;
        parameters.push((key, value));
    }

    Ok(parameters)
}
