//! Common test utilities for house-prices.
//!
//! This module provides utilities for testing transforms including
//! float comparison, golden data loading, and synthetic data generation.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use house_prices::prelude::*;

/// Tiered float comparison with tolerance levels.
///
/// - NaN only matches NaN
/// - For values near zero (|expected| < 1e-10): use absolute tolerance
/// - For larger values: use relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(
            actual.is_nan(),
            "{}: Expected NaN but got {}",
            context,
            actual
        );
        return;
    }

    if actual.is_nan() {
        panic!("{}: Got NaN but expected {}", context, expected);
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two columns are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let context = format!("{}[{}]", name, i);
        assert_float_eq(a, e, epsilon, &context);
    }
}

/// Golden rows with the derived values they must produce.
#[derive(Debug, Clone, Default)]
pub struct GoldenData {
    /// Raw input rows.
    pub records: Vec<Record>,
    /// Expected derived columns (keyed by column name).
    pub expected: HashMap<String, Vec<f64>>,
}

impl GoldenData {
    /// Load golden data from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let data: serde_json::Value = serde_json::from_reader(reader)?;

        let records = match data.get("records") {
            Some(records) => serde_json::from_value(records.clone())?,
            None => Vec::new(),
        };

        let mut expected = HashMap::new();
        if let Some(columns) = data.get("expected").and_then(|e| e.as_object()) {
            for (key, value) in columns {
                expected.insert(key.clone(), parse_array(Some(value))?);
            }
        }

        Ok(Self { records, expected })
    }

    /// Load the bundled Ames sample.
    pub fn ames_sample() -> Self {
        Self::from_json(data_path("ames_sample.json")).expect("Failed to load ames_sample.json")
    }
}

/// Path of a file under `tests/data`.
pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn parse_array(value: Option<&serde_json::Value>) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    match value {
        Some(serde_json::Value::Array(arr)) => arr
            .iter()
            .map(|v| {
                if v.is_null() {
                    Ok(f64::NAN)
                } else {
                    v.as_f64()
                        .ok_or_else(|| format!("Invalid number: {:?}", v).into())
                }
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Generate `len` pseudo-random houses with a deterministic seed.
///
/// Columns are the nine transform inputs in `REQUIRED_COLUMNS` order.
pub fn generate_houses(len: usize, seed: u64) -> DataFrame<f64> {
    // Simple LCG for deterministic random numbers
    let mut rng_state = seed;
    let mut next = |bound: u64| -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) % bound) as f64
    };

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(len); REQUIRED_COLUMNS.len()];
    for _ in 0..len {
        let built = 1872.0 + next(139);
        let remod = if next(2) == 0.0 { built } else { built + next(40) };
        let row = [
            300.0 + next(4000),
            next(2000),
            next(3000),
            next(4),
            next(3),
            next(3),
            next(2),
            built,
            remod,
        ];
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    let mut df = DataFrame::new();
    for (name, values) in REQUIRED_COLUMNS.iter().zip(columns) {
        df.add_column(name.to_string(), Series::from_vec(values))
            .expect("generated columns share a length");
    }
    df
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_houses_deterministic() {
        let a = generate_houses(20, 12345);
        let b = generate_houses(20, 12345);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }
}
