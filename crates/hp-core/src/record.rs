//! Row-oriented view of a [`DataFrame`].
//!
//! Upstream loaders often hand over a sequence of row mappings rather than
//! columns. [`Record`] is one such row; [`DataFrame::from_records`] pivots a
//! slice of them into columns and [`DataFrame::to_records`] pivots back.

use indexmap::{IndexMap, IndexSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dataframe::DataFrame;
use crate::error::{TransformError, TransformResult};
use crate::num::HpFloat;
use crate::series::Series;

/// One raw cell of a row.
///
/// With the `serde` feature the representation is untagged, so a JSON
/// number, `null` or string maps directly onto a variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Cell {
    /// A numeric value.
    Number(f64),
    /// A non-numeric value. Never coerced.
    Text(String),
    /// An absent value, read as NaN.
    Missing,
}

impl Cell {
    /// Numeric view of the cell, `None` for text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Missing => Some(f64::NAN),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Number(value)
        }
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A single row: column name to cell, in column order.
pub type Record = IndexMap<String, Cell>;

impl<T: HpFloat> DataFrame<T> {
    /// Build a table from row records.
    ///
    /// Columns appear in the order their names are first seen. A column
    /// absent from some row, or holding [`Cell::Missing`], reads as NaN for
    /// that row.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidValue`] for the first [`Cell::Text`]
    /// encountered, scanning rows in order.
    pub fn from_records(records: &[Record]) -> TransformResult<Self> {
        let names: IndexSet<&str> = records
            .iter()
            .flat_map(|record| record.keys().map(String::as_str))
            .collect();

        let names: Vec<&str> = names.into_iter().collect();
        Self::from_records_selected(records, &names)
    }

    /// Build a table from only the named columns of `records`.
    ///
    /// Columns keep the order of `columns`; a name that appears in no record
    /// is left out of the table rather than filled with NaN. Cells of other
    /// columns are not inspected, so text there is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidValue`] for the first [`Cell::Text`]
    /// found in a selected column, scanning rows in order.
    pub fn from_records_selected(records: &[Record], columns: &[&str]) -> TransformResult<Self> {
        let mut values: IndexMap<&str, Vec<T>> = columns
            .iter()
            .filter(|&&name| records.iter().any(|record| record.contains_key(name)))
            .map(|&name| (name, Vec::with_capacity(records.len())))
            .collect();

        for (row, record) in records.iter().enumerate() {
            for (&name, column) in values.iter_mut() {
                let value = match record.get(name) {
                    None => T::NAN,
                    Some(cell) => cell
                        .as_number()
                        .map(T::from_f64_lossy)
                        .ok_or_else(|| invalid_value(name, row, cell))?,
                };
                column.push(value);
            }
        }

        let mut df = Self::with_capacity(values.len());
        for (name, column) in values {
            df.add_column(name.to_string(), Series::from_vec(column))?;
        }
        Ok(df)
    }

    /// Pivot the table back into row records. NaN cells become
    /// [`Cell::Missing`].
    #[must_use]
    pub fn to_records(&self) -> Vec<Record> {
        (0..self.len())
            .map(|row| {
                self.iter()
                    .map(|(name, series)| {
                        (name.to_string(), Cell::from(series[row].to_f64_lossy()))
                    })
                    .collect()
            })
            .collect()
    }
}

fn invalid_value(column: &str, row: usize, cell: &Cell) -> TransformError {
    let value = match cell {
        Cell::Text(text) => text.clone(),
        other => format!("{other:?}"),
    };
    TransformError::InvalidValue {
        column: column.to_string(),
        row,
        value,
    }
}
