//! End-to-end tests for the house-prices facade.
//!
//! These tests load the bundled Ames sample and check the derived columns
//! against the recorded golden values.

mod common;

use common::{assert_series_eq, generate_houses, GoldenData};
use house_prices::hp_transforms::{TOTAL_BATH, TOTAL_SF, WAS_REMODELED};
use house_prices::prelude::*;

// ============================================================================
// Golden Data
// ============================================================================

#[test]
fn test_golden_records() {
    let golden = GoldenData::ames_sample();
    assert_eq!(golden.records.len(), 10);

    let output = FeatureEngineer::<f64>::new()
        .derive_records(&golden.records)
        .unwrap();
    assert_eq!(output.len(), golden.records.len());

    for name in DERIVED_COLUMNS {
        let actual: Vec<f64> = output
            .iter()
            .map(|row| row[name].as_number().unwrap())
            .collect();
        assert_eq!(actual, golden.expected[name], "{name}");
    }

    // Categorical columns pass through untouched
    assert_eq!(output[8]["MSZoning"], Cell::Text("RM".to_string()));
    assert_eq!(output[0]["Id"], Cell::Number(1.0));
}

#[test]
fn test_golden_frame() {
    let golden = GoldenData::ames_sample();
    let df: DataFrame<f64> =
        DataFrame::from_records_selected(&golden.records, &REQUIRED_COLUMNS).unwrap();

    let mut features = FeatureEngineer::<f64>::new();
    let result = features.fit_transform(&df, None).unwrap();

    for name in DERIVED_COLUMNS {
        assert_eq!(
            result.get_column(name).unwrap().as_slice(),
            golden.expected[name].as_slice(),
            "{name}"
        );
    }
}

#[test]
fn test_golden_records_with_text_in_required_column() {
    let mut golden = GoldenData::ames_sample();
    golden.records[3].insert("YearBuilt".to_string(), Cell::Text("1915?".to_string()));

    let err = FeatureEngineer::<f64>::new()
        .derive_records(&golden.records)
        .unwrap_err();
    assert!(matches!(
        err,
        TransformError::InvalidValue { ref column, row: 3, .. } if column == "YearBuilt"
    ));
}

// ============================================================================
// Synthetic Data
// ============================================================================

#[test]
fn test_synthetic_houses() {
    let df = generate_houses(500, 42);
    let result = FeatureEngineer::<f64>::new().transform(&df).unwrap();

    assert_eq!(result.len(), 500);
    let total_sf = result.get_column(TOTAL_SF).unwrap();
    let total_bath = result.get_column(TOTAL_BATH).unwrap();
    let remodeled = result.get_column(WAS_REMODELED).unwrap();

    assert!(total_sf.iter().all(|&v| v >= 300.0));
    assert!(total_bath.iter().all(|&v| (0.0..=7.0).contains(&v)));
    assert!(remodeled.iter().all(|&v| v == 0.0 || v == 1.0));
}

#[test]
fn test_f32_matches_f64() {
    let golden = GoldenData::ames_sample();
    let wide: DataFrame<f64> =
        DataFrame::from_records_selected(&golden.records, &REQUIRED_COLUMNS).unwrap();
    let narrow: DataFrame<f32> =
        DataFrame::from_records_selected(&golden.records, &REQUIRED_COLUMNS).unwrap();

    let wide = FeatureEngineer::<f64>::new().transform(&wide).unwrap();
    let narrow = FeatureEngineer::<f32>::new().transform(&narrow).unwrap();

    for name in DERIVED_COLUMNS {
        let narrow: Vec<f64> = narrow
            .get_column(name)
            .unwrap()
            .iter()
            .map(|&v| f64::from(v))
            .collect();
        assert_series_eq(&narrow, wide.get_column(name).unwrap().as_slice(), 1e-6, name);
    }
}
