//! # house-prices
//!
//! Derived-feature engineering for tabular house-price data.
//!
//! This crate re-exports the workspace members:
//!
//! - [`hp_core`] - table types, errors and the `Transform` trait
//! - [`hp_transforms`] - the feature transform and pipelines
//!
//! ## Example
//!
//! ```rust
//! use house_prices::prelude::*;
//!
//! let mut df: DataFrame<f64> = DataFrame::new();
//! for (name, value) in [
//!     ("1stFlrSF", 856.0),
//!     ("2ndFlrSF", 854.0),
//!     ("TotalBsmtSF", 856.0),
//!     ("FullBath", 2.0),
//!     ("HalfBath", 1.0),
//!     ("BsmtFullBath", 1.0),
//!     ("BsmtHalfBath", 0.0),
//!     ("YearBuilt", 2003.0),
//!     ("YearRemodAdd", 2003.0),
//! ] {
//!     df.add_column(name.to_string(), Series::from_vec(vec![value])).unwrap();
//! }
//!
//! let features = FeatureEngineer::<f64>::new();
//! let augmented = features.transform(&df).unwrap();
//!
//! assert_eq!(augmented.get_column("TotalSF").unwrap()[0], 2566.0);
//! assert_eq!(augmented.get_column("TotalBath").unwrap()[0], 3.5);
//! assert_eq!(augmented.get_column("HouseAge").unwrap()[0], 20.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use hp_core;
pub use hp_transforms;

/// Everything needed to build tables and run the feature transform.
pub mod prelude {
    pub use hp_core::prelude::*;
    pub use hp_transforms::prelude::*;
}
