//! Ordered chains of transforms.

use hp_core::{
    dataframe::DataFrame,
    error::{TransformError, TransformResult},
    num::HpFloat,
    series::Series,
    traits::Transform,
};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step layout of a [`TransformPipeline`], serializable with the `serde` feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Step names in execution order.
    pub names: Vec<String>,
}

impl PipelineConfig {
    /// Empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step name.
    pub fn with_name(mut self, name: String) -> Self {
        self.names.push(name);
        self
    }
}

/// [`Transform`] without its `State` type, so steps with different state can
/// share one `Vec<Box<dyn ErasedTransform<T>>>`.
pub trait ErasedTransform<T: HpFloat>: Send + Sync {
    /// See [`Transform::fit`].
    fn fit(&mut self, df: &DataFrame<T>, target: Option<&Series<T>>) -> TransformResult<()>;

    /// See [`Transform::transform`].
    fn transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>>;

    /// See [`Transform::inverse_transform`].
    fn inverse_transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>>;

    /// See [`Transform::get_output_columns`].
    fn get_output_columns(&self, input_columns: &[String]) -> Vec<String>;

    /// See [`Transform::is_fitted`].
    fn is_fitted(&self) -> bool;

    /// See [`Transform::reset`].
    fn reset(&mut self);
}

impl<T: HpFloat, Tr: Transform<T> + Send + Sync> ErasedTransform<T> for Tr {
    fn fit(&mut self, df: &DataFrame<T>, target: Option<&Series<T>>) -> TransformResult<()> {
        Transform::fit(self, df, target)
    }

    fn transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        Transform::transform(self, df)
    }

    fn inverse_transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        Transform::inverse_transform(self, df)
    }

    fn get_output_columns(&self, input_columns: &[String]) -> Vec<String> {
        Transform::get_output_columns(self, input_columns)
    }

    fn is_fitted(&self) -> bool {
        Transform::is_fitted(self)
    }

    fn reset(&mut self) {
        Transform::reset(self)
    }
}

/// A named step in a [`TransformPipeline`].
struct Step<T: HpFloat> {
    name: String,
    transform: Box<dyn ErasedTransform<T>>,
}

/// Transforms applied one after another.
///
/// `fit` fits each step on the previous step's output and hands the same
/// labels to every step. Any failure leaves the whole pipeline unfitted.
///
/// # Example
///
/// ```
/// use hp_core::{DataFrame, Series};
/// use hp_transforms::{FeatureEngineer, TransformPipeline, REQUIRED_COLUMNS};
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// for name in REQUIRED_COLUMNS {
///     df.add_column(name.to_string(), Series::from_vec(vec![1.0])).unwrap();
/// }
///
/// let mut pipeline = TransformPipeline::new()
///     .add_named("features".to_string(), FeatureEngineer::<f64>::new());
///
/// let transformed = pipeline.fit_transform(&df, None).unwrap();
/// assert!(transformed.has_column("TotalSF"));
/// ```
pub struct TransformPipeline<T: HpFloat> {
    steps: Vec<Step<T>>,
    fitted: bool,
}

impl<T: HpFloat> core::fmt::Debug for TransformPipeline<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("steps", &self.names())
            .field("fitted", &self.fitted)
            .finish()
    }
}

impl<T: HpFloat> Default for TransformPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HpFloat> TransformPipeline<T> {
    /// Pipeline with no steps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            fitted: false,
        }
    }

    /// Append a step named `transform_<index>`.
    #[must_use]
    pub fn add<Tr>(self, transform: Tr) -> Self
    where
        Tr: Transform<T> + Send + Sync + 'static,
    {
        let name = format!("transform_{}", self.steps.len());
        self.add_named(name, transform)
    }

    /// Append a named step. The pipeline must be fitted again afterwards.
    #[must_use]
    pub fn add_named<Tr>(mut self, name: String, transform: Tr) -> Self
    where
        Tr: Transform<T> + Send + Sync + 'static,
    {
        self.steps.push(Step {
            name,
            transform: Box::new(transform),
        });
        self.fitted = false;
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pipeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }

    /// The step layout as a [`PipelineConfig`].
    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        self.steps
            .iter()
            .fold(PipelineConfig::new(), |config, step| config.with_name(step.name.clone()))
    }

    /// Fit every step in order.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError` for a pipeline without steps, or the first
    /// step failure unchanged. The pipeline is left unfitted in either case.
    pub fn fit(&mut self, df: &DataFrame<T>, target: Option<&Series<T>>) -> TransformResult<()> {
        self.fitted = false;
        if self.steps.is_empty() {
            return Err(TransformError::PipelineError(
                "cannot fit an empty pipeline".to_string(),
            ));
        }

        let mut current = df.clone();
        for step in &mut self.steps {
            trace!(step = %step.name, "fitting pipeline step");
            step.transform.fit(&current, target)?;
            current = step.transform.transform(&current)?;
        }

        self.fitted = true;
        Ok(())
    }

    /// Run `df` through every step.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before a successful [`fit`](Self::fit), or the
    /// first step failure.
    pub fn transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        if !self.fitted {
            return Err(TransformError::NotFitted);
        }

        let mut current = df.clone();
        for step in &self.steps {
            trace!(step = %step.name, "applying pipeline step");
            current = step.transform.transform(&current)?;
        }
        Ok(current)
    }

    /// [`fit`](Self::fit), then [`transform`](Self::transform) on the same table.
    ///
    /// # Errors
    ///
    /// Returns the first error from either step.
    pub fn fit_transform(
        &mut self,
        df: &DataFrame<T>,
        target: Option<&Series<T>>,
    ) -> TransformResult<DataFrame<T>> {
        self.fit(df, target)?;
        self.transform(df)
    }

    /// Undo every step, last step first.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before a successful [`fit`](Self::fit), or the
    /// first step failure.
    pub fn inverse_transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        if !self.fitted {
            return Err(TransformError::NotFitted);
        }

        self.steps
            .iter()
            .rev()
            .try_fold(df.clone(), |current, step| step.transform.inverse_transform(&current))
    }

    /// Whether [`transform`](Self::transform) may be called.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Reset every step and mark the pipeline unfitted.
    pub fn reset(&mut self) {
        for step in &mut self.steps {
            step.transform.reset();
        }
        self.fitted = false;
    }

    /// Column names after every step, given the input names.
    #[must_use]
    pub fn get_output_columns(&self, input: &[String]) -> Vec<String> {
        self.steps.iter().fold(input.to_vec(), |columns, step| {
            step.transform.get_output_columns(&columns)
        })
    }
}
