//! Multi-column tabular data with deterministic iteration order.
//!
//! The [`DataFrame`] type provides a column-oriented data structure similar to
//! pandas DataFrame, but using `IndexMap` for deterministic iteration order.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FrameError, FrameResult, TransformError, TransformResult};
use crate::num::HpFloat;
use crate::series::Series;

/// A multi-column tabular data structure with deterministic iteration order.
///
/// `DataFrame` uses `IndexMap` internally to guarantee that columns are always
/// iterated in insertion order. Transforms rely on this to append derived
/// columns after the original ones and to compare tables column by column.
///
/// # Example
///
/// ```rust
/// use hp_core::{DataFrame, Series};
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("FullBath".to_string(), Series::from_vec(vec![2.0, 1.0, 2.0])).unwrap();
/// df.add_column("HalfBath".to_string(), Series::from_vec(vec![1.0, 0.0, 1.0])).unwrap();
///
/// assert_eq!(df.len(), 3);
/// assert_eq!(df.column_count(), 2);
/// assert_eq!(df.column_names(), vec!["FullBath", "HalfBath"]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: HpFloat"))]
pub struct DataFrame<T: HpFloat> {
    columns: IndexMap<String, Series<T>>,
}

impl<T: HpFloat> Default for DataFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HpFloat> DataFrame<T> {
    /// Create a new empty DataFrame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Create a DataFrame with pre-allocated capacity for columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Create a DataFrame from a list of (name, series) pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if columns have different lengths or a name repeats.
    pub fn from_columns(columns: Vec<(String, Series<T>)>) -> FrameResult<Self> {
        let mut df = Self::with_capacity(columns.len());
        for (name, series) in columns {
            df.add_column(name, series)?;
        }
        Ok(df)
    }

    /// Returns the number of rows in the DataFrame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Series::len)
    }

    /// Returns `true` if the DataFrame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of columns in the DataFrame.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a reference to a column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Series<T>> {
        self.columns.get(name)
    }

    /// Get a column by name, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MissingColumn`] if the column doesn't exist.
    pub fn require_column(&self, name: &str) -> TransformResult<&Series<T>> {
        self.columns
            .get(name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
    }

    /// Add a new column to the DataFrame.
    ///
    /// The column is added at the end (preserves insertion order).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A column with the same name already exists
    /// - The series length doesn't match existing columns
    pub fn add_column(&mut self, name: String, series: Series<T>) -> FrameResult<()> {
        if self.columns.contains_key(&name) {
            return Err(FrameError::DuplicateColumn(name));
        }

        self.check_length(&name, &series)?;
        self.columns.insert(name, series);
        Ok(())
    }

    /// Add or replace a column in the DataFrame.
    ///
    /// A replaced column keeps its position; a new column is appended.
    /// Returns `true` if an existing column was replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the series length doesn't match existing columns.
    pub fn set_column(&mut self, name: String, series: Series<T>) -> FrameResult<bool> {
        self.check_length(&name, &series)?;
        Ok(self.columns.insert(name, series).is_some())
    }

    /// Remove and return a column by name.
    ///
    /// The remaining columns keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns an error if the column doesn't exist.
    pub fn drop_column(&mut self, name: &str) -> TransformResult<Series<T>> {
        self.columns
            .shift_remove(name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
    }

    /// Create a new DataFrame with only the specified columns.
    ///
    /// # Errors
    ///
    /// Returns an error if any column doesn't exist.
    pub fn select(&self, columns: &[&str]) -> TransformResult<Self> {
        let mut result = Self::with_capacity(columns.len());

        for &name in columns {
            let series = self.require_column(name)?;
            result.columns.insert(name.to_string(), series.clone());
        }

        Ok(result)
    }

    /// Returns an iterator over (column_name, series) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn check_length(&self, name: &str, series: &Series<T>) -> FrameResult<()> {
        // A single replaced column in a one-column table may change the length.
        let others_exist = self.columns.keys().any(|k| k != name);
        if others_exist && series.len() != self.len() {
            return Err(FrameError::LengthMismatch {
                column: name.to_string(),
                expected: self.len(),
                actual: series.len(),
            });
        }
        Ok(())
    }
}

/// Deserialization goes through [`DataFrame::from_columns`], so a ragged or
/// duplicated column list is rejected instead of producing a table whose
/// columns disagree on the row count.
#[cfg(feature = "serde")]
impl<'de, T: HpFloat> Deserialize<'de> for DataFrame<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(bound = "T: HpFloat")]
        struct Columns<T: HpFloat> {
            columns: IndexMap<String, Series<T>>,
        }

        let raw = Columns::<T>::deserialize(deserializer)?;
        Self::from_columns(raw.columns.into_iter().collect()).map_err(serde::de::Error::custom)
    }
}

impl<T: HpFloat> PartialEq for DataFrame<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.columns.len() != other.columns.len() {
            return false;
        }

        // Compare in order (IndexMap iteration order is deterministic)
        self.columns
            .iter()
            .zip(other.columns.iter())
            .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}
