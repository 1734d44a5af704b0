//! # hp-core
//!
//! Core types and traits for the house-prices feature library.
//!
//! This crate provides the foundational abstractions used by the transforms:
//!
//! - [`HpFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Single-column numeric container
//! - [`DataFrame`] - Multi-column tabular data with deterministic ordering
//! - [`Cell`] and [`Record`] - Row-oriented view of a table
//! - [`Transform`] - Fit/transform trait for table transformations
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use hp_core::prelude::*;
//!
//! let mut df: DataFrame<f64> = DataFrame::new();
//! df.add_column("YearBuilt".to_string(), Series::from_vec(vec![2003.0, 1976.0]))
//!     .unwrap();
//!
//! let years = df.require_column("YearBuilt").unwrap();
//! assert_eq!(years.len(), 2);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dataframe;
pub mod error;
pub mod num;
pub mod prelude;
pub mod record;
pub mod series;
pub mod traits;

// Re-export core types at crate root
pub use dataframe::DataFrame;
pub use error::{FrameError, FrameResult, StateRestoreError, TransformError, TransformResult};
pub use num::HpFloat;
pub use record::{Cell, Record};
pub use series::Series;
pub use traits::Transform;
