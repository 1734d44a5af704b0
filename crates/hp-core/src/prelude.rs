//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from hp-core.
//!
//! # Example
//!
//! ```rust
//! use hp_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! let df: DataFrame<f64> = DataFrame::new();
//! assert!(series.is_empty() && df.is_empty());
//! ```

// Core types
pub use crate::dataframe::DataFrame;
pub use crate::num::HpFloat;
pub use crate::record::{Cell, Record};
pub use crate::series::Series;

// Error types
pub use crate::error::{
    FrameError, FrameResult, StateRestoreError, TransformError, TransformResult,
};

// Traits
pub use crate::traits::Transform;
