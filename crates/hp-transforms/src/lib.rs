//! # hp-transforms
//!
//! Data transformations for the house-prices library.
//!
//! This crate provides:
//!
//! - `FeatureEngineer`: Appends combined-area, bathroom, age and remodel columns
//! - `TransformPipeline`: Compose multiple transforms
//!
//! # Example
//!
//! ```ignore
//! use hp_transforms::prelude::*;
//! use hp_core::prelude::*;
//!
//! let mut features = FeatureEngineer::<f64>::new();
//!
//! // Fit (a no-op) and transform data
//! let augmented = features.fit_transform(&df, None)?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod feature_engineer;
mod pipeline;

pub mod prelude;

pub use feature_engineer::{
    FeatureEngineer, FeatureEngineerState, BASEMENT_FULL_BATH, BASEMENT_HALF_BATH,
    DERIVED_COLUMNS, FIRST_FLOOR_SF, FULL_BATH, HALF_BATH, HOUSE_AGE, REFERENCE_YEAR,
    REQUIRED_COLUMNS, SECOND_FLOOR_SF, TOTAL_BASEMENT_SF, TOTAL_BATH, TOTAL_SF, WAS_REMODELED,
    YEARS_SINCE_REMOD, YEAR_BUILT, YEAR_REMOD_ADD,
};
pub use pipeline::{ErasedTransform, PipelineConfig, TransformPipeline};
