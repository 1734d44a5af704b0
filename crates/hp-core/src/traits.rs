//! The transform contract.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::dataframe::DataFrame;
use crate::error::TransformResult;
use crate::num::HpFloat;
use crate::series::Series;

/// Bounds on exported transform state; serializable with the `serde` feature.
#[cfg(feature = "serde")]
pub trait TransformState: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Bounds on exported transform state.
#[cfg(not(feature = "serde"))]
pub trait TransformState: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> TransformState for T where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync
{
}

#[cfg(not(feature = "serde"))]
impl<T> TransformState for T where T: Clone + Default + Send + Sync {}

/// Fit/transform contract shared by every table transform.
///
/// `fit` sees the training table and, optionally, the sale-price labels;
/// `transform` then maps any table with the same columns to a new table.
/// A transform that learns nothing (such as the house feature deriver)
/// still implements `fit` so it can sit in a pipeline next to ones that do.
///
/// `State` is what a fitted transform would need to be rebuilt elsewhere.
/// Stateless transforms export a version tag so a restore across
/// incompatible builds is rejected.
///
/// # Example
///
/// ```rust,ignore
/// use hp_core::Transform;
///
/// let mut features = FeatureEngineer::<f64>::new();
/// let train = features.fit_transform(&train_df, Some(&sale_price))?;
/// let test = features.transform(&test_df)?;
/// ```
pub trait Transform<T: HpFloat>: Send + Sync {
    /// Exported state.
    type State: TransformState;

    /// Learn from the training table; `target` holds the labels, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the table lacks what the transform needs.
    fn fit(&mut self, df: &DataFrame<T>, target: Option<&Series<T>>) -> TransformResult<()>;

    /// Produce a new table; `df` is borrowed and left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform is unfitted or a required column is
    /// missing.
    fn transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>>;

    /// `fit` followed by `transform` on the same table.
    ///
    /// # Errors
    ///
    /// Returns the first error from either step.
    fn fit_transform(
        &mut self,
        df: &DataFrame<T>,
        target: Option<&Series<T>>,
    ) -> TransformResult<DataFrame<T>> {
        self.fit(df, target)?;
        self.transform(df)
    }

    /// Undo [`transform`](Self::transform) as far as the transform allows.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be mapped back.
    fn inverse_transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>>;

    /// Column names `transform` would produce from `input_columns`.
    fn get_output_columns(&self, input_columns: &[String]) -> Vec<String>;

    /// Export the current state.
    fn get_state(&self) -> Self::State;

    /// Restore a previously exported state.
    ///
    /// # Errors
    ///
    /// Returns a [`StateRestoreError`](crate::StateRestoreError) wrapped in
    /// `TransformError::State` if the state does not fit this build.
    fn set_state(&mut self, state: Self::State) -> TransformResult<()>;

    /// Whether `transform` may be called.
    fn is_fitted(&self) -> bool;

    /// Forget anything learned by `fit`.
    fn reset(&mut self);
}
