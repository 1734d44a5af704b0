//! Prelude for hp-transforms.
//!
//! This module re-exports all commonly used types and traits.

pub use crate::feature_engineer::{
    FeatureEngineer, FeatureEngineerState, DERIVED_COLUMNS, REFERENCE_YEAR, REQUIRED_COLUMNS,
};
pub use crate::pipeline::{PipelineConfig, TransformPipeline};

// Re-export core Transform trait
pub use hp_core::traits::Transform;
