//! Single-column numeric container.
//!
//! The [`Series`] type provides a contiguous, heap-allocated column of values
//! with the element-wise operations the transforms need.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::HpFloat;

/// A contiguous column of floating-point values.
///
/// Missing values are represented as NaN and propagate through arithmetic.
///
/// # Example
///
/// ```rust
/// use hp_core::Series;
///
/// let first: Series<f64> = Series::from_vec(vec![856.0, 1262.0]);
/// let second: Series<f64> = Series::from_vec(vec![854.0, 0.0]);
///
/// let total = first.zip_with(&second, |a, b| a + b);
/// assert_eq!(total.as_slice(), &[1710.0, 1262.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: HpFloat"))]
pub struct Series<T: HpFloat> {
    data: Vec<T>,
}

impl<T: HpFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HpFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the number of rows in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// View the series as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Apply a function to each value, e.g. turning a year into an age.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Self { data }
    }

    /// Combine two series row by row.
    ///
    /// The result is as long as the shorter input; callers working on a
    /// [`DataFrame`](crate::DataFrame) check column lengths first.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self { data }
    }
}

impl<T: HpFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, row: usize) -> &Self::Output {
        &self.data[row]
    }
}
