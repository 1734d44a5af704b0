//! House Feature Engineering Transform.
//!
//! Appends combined-area, bathroom, age and remodel columns to a table of
//! raw property attributes.

use hp_core::{
    dataframe::DataFrame,
    error::{FrameError, StateRestoreError, TransformResult},
    num::HpFloat,
    record::Record,
    series::Series,
    traits::Transform,
};
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Year that ages are measured against.
pub const REFERENCE_YEAR: i32 = 2023;

/// Version tag written into [`FeatureEngineerState`].
const STATE_VERSION: u32 = 1;

/// First floor area in square feet.
pub const FIRST_FLOOR_SF: &str = "1stFlrSF";
/// Second floor area in square feet.
pub const SECOND_FLOOR_SF: &str = "2ndFlrSF";
/// Basement area in square feet.
pub const TOTAL_BASEMENT_SF: &str = "TotalBsmtSF";
/// Full bathrooms above grade.
pub const FULL_BATH: &str = "FullBath";
/// Half bathrooms above grade.
pub const HALF_BATH: &str = "HalfBath";
/// Basement full bathrooms.
pub const BASEMENT_FULL_BATH: &str = "BsmtFullBath";
/// Basement half bathrooms.
pub const BASEMENT_HALF_BATH: &str = "BsmtHalfBath";
/// Original construction year.
pub const YEAR_BUILT: &str = "YearBuilt";
/// Remodel year (equal to the construction year if never remodeled).
pub const YEAR_REMOD_ADD: &str = "YearRemodAdd";

/// `1stFlrSF + 2ndFlrSF + TotalBsmtSF`.
pub const TOTAL_SF: &str = "TotalSF";
/// `FullBath + 0.5*HalfBath + BsmtFullBath + 0.5*BsmtHalfBath`.
pub const TOTAL_BATH: &str = "TotalBath";
/// `2023 - YearBuilt`.
pub const HOUSE_AGE: &str = "HouseAge";
/// `2023 - YearRemodAdd`.
pub const YEARS_SINCE_REMOD: &str = "YearsSinceRemod";
/// `1` if `YearBuilt != YearRemodAdd`, else `0`.
pub const WAS_REMODELED: &str = "WasRemodeled";

/// Input columns the transform reads, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    FIRST_FLOOR_SF,
    SECOND_FLOOR_SF,
    TOTAL_BASEMENT_SF,
    FULL_BATH,
    HALF_BATH,
    BASEMENT_FULL_BATH,
    BASEMENT_HALF_BATH,
    YEAR_BUILT,
    YEAR_REMOD_ADD,
];

/// Columns the transform appends, in output order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    TOTAL_SF,
    TOTAL_BATH,
    HOUSE_AGE,
    YEARS_SINCE_REMOD,
    WAS_REMODELED,
];

/// State for FeatureEngineer.
///
/// Nothing is learned from data; the state pins the version and reference
/// year so a restore from an incompatible build is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureEngineerState {
    /// Version tag for state compatibility.
    pub version: u32,
    /// Year ages were computed against.
    pub reference_year: i32,
}

impl Default for FeatureEngineerState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            reference_year: REFERENCE_YEAR,
        }
    }
}

/// House Feature Engineering Transform.
///
/// Stateless: construction takes no parameters, `fit` is a no-op and
/// `transform` may be called any number of times.
///
/// # Derived Columns
///
/// | column            | formula                                                     |
/// |-------------------|-------------------------------------------------------------|
/// | `TotalSF`         | `1stFlrSF + 2ndFlrSF + TotalBsmtSF`                         |
/// | `TotalBath`       | `FullBath + 0.5*HalfBath + BsmtFullBath + 0.5*BsmtHalfBath` |
/// | `HouseAge`        | `2023 - YearBuilt`                                          |
/// | `YearsSinceRemod` | `2023 - YearRemodAdd`                                       |
/// | `WasRemodeled`    | `1` if `YearBuilt != YearRemodAdd`, else `0`                |
///
/// # Edge Cases
///
/// - NaN inputs propagate into the sums and ages
/// - A NaN year compares unequal, so `WasRemodeled` is 1
/// - An input column already named like a derived column is overwritten in place
#[derive(Debug, Clone)]
pub struct FeatureEngineer<T: HpFloat> {
    _phantom: core::marker::PhantomData<T>,
}

impl<T: HpFloat> Default for FeatureEngineer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HpFloat> FeatureEngineer<T> {
    /// Create a new FeatureEngineer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: core::marker::PhantomData,
        }
    }

    /// By-value fit: accepts the training table and optional labels and
    /// returns the transform unchanged, ready for chaining.
    #[must_use]
    pub fn fitted(self, df: &DataFrame<T>, target: Option<&Series<T>>) -> Self {
        log_fit(df, target);
        self
    }

    /// Compute the derived columns and return the augmented table.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` for the first required column absent from `df`,
    /// or `LengthMismatch` if a required column disagrees with the row count.
    /// Nothing is computed unless all of them are present and aligned.
    pub fn derive(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        let first_floor = df.require_column(FIRST_FLOOR_SF)?;
        let second_floor = df.require_column(SECOND_FLOOR_SF)?;
        let basement = df.require_column(TOTAL_BASEMENT_SF)?;
        let full_bath = df.require_column(FULL_BATH)?;
        let half_bath = df.require_column(HALF_BATH)?;
        let basement_full_bath = df.require_column(BASEMENT_FULL_BATH)?;
        let basement_half_bath = df.require_column(BASEMENT_HALF_BATH)?;
        let year_built = df.require_column(YEAR_BUILT)?;
        let year_remod = df.require_column(YEAR_REMOD_ADD)?;

        let rows = df.len();
        let inputs = [
            first_floor,
            second_floor,
            basement,
            full_bath,
            half_bath,
            basement_full_bath,
            basement_half_bath,
            year_built,
            year_remod,
        ];
        for (name, series) in REQUIRED_COLUMNS.iter().zip(inputs) {
            if series.len() != rows {
                return Err(FrameError::LengthMismatch {
                    column: (*name).to_string(),
                    expected: rows,
                    actual: series.len(),
                }
                .into());
            }
        }

        debug!(rows, columns = df.column_count(), "deriving house features");

        let reference = T::from_i32_lossy(REFERENCE_YEAR);

        let total_sf = first_floor
            .zip_with(second_floor, |a, b| a + b)
            .zip_with(basement, |ab, c| ab + c);

        let total_bath = full_bath
            .zip_with(half_bath, |full, half| full + T::HALF * half)
            .zip_with(basement_full_bath, |above, full| above + full)
            .zip_with(basement_half_bath, |above, half| above + T::HALF * half);

        let house_age = year_built.map(|year| reference - year);
        let years_since_remod = year_remod.map(|year| reference - year);
        let was_remodeled =
            year_built.zip_with(year_remod, |built, remod| T::from_bool(built != remod));

        let mut result = df.clone();
        let derived = [total_sf, total_bath, house_age, years_since_remod, was_remodeled];
        for (name, series) in DERIVED_COLUMNS.iter().zip(derived) {
            if result.set_column((*name).to_string(), series)? {
                warn!(column = *name, "overwriting existing column with derived values");
            }
        }

        Ok(result)
    }

    /// Row-mapping form of [`derive`](Self::derive).
    ///
    /// Each output record is the input record with the derived cells set.
    /// Only required columns are read, so categorical columns pass through
    /// untouched. An empty slice yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if a required cell is not numeric, or
    /// `MissingColumn` if a required column appears in no record.
    pub fn derive_records(&self, records: &[Record]) -> TransformResult<Vec<Record>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let inputs = DataFrame::<T>::from_records_selected(records, &REQUIRED_COLUMNS)?;
        let derived = self.derive(&inputs)?.select(&DERIVED_COLUMNS)?;

        Ok(records
            .iter()
            .zip(derived.to_records())
            .map(|(record, cells)| {
                let mut row = record.clone();
                row.extend(cells);
                row
            })
            .collect())
    }
}

fn log_fit<T: HpFloat>(df: &DataFrame<T>, target: Option<&Series<T>>) {
    trace!(
        rows = df.len(),
        has_target = target.is_some(),
        "feature engineer fit is a no-op"
    );
}

impl<T: HpFloat> Transform<T> for FeatureEngineer<T> {
    type State = FeatureEngineerState;

    fn fit(&mut self, df: &DataFrame<T>, target: Option<&Series<T>>) -> TransformResult<()> {
        log_fit(df, target);
        Ok(())
    }

    fn transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        self.derive(df)
    }

    fn inverse_transform(&self, df: &DataFrame<T>) -> TransformResult<DataFrame<T>> {
        let mut result = df.clone();
        for name in DERIVED_COLUMNS {
            if result.has_column(name) {
                result.drop_column(name)?;
            }
        }
        Ok(result)
    }

    fn get_output_columns(&self, input: &[String]) -> Vec<String> {
        let mut columns = input.to_vec();
        for name in DERIVED_COLUMNS {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
        columns
    }

    fn get_state(&self) -> Self::State {
        FeatureEngineerState::default()
    }

    fn set_state(&mut self, state: Self::State) -> TransformResult<()> {
        if state.version != STATE_VERSION {
            return Err(StateRestoreError::VersionMismatch {
                expected: STATE_VERSION.to_string(),
                actual: state.version.to_string(),
            }
            .into());
        }
        if state.reference_year != REFERENCE_YEAR {
            return Err(StateRestoreError::InvalidData(format!(
                "reference year {} does not match {}",
                state.reference_year, REFERENCE_YEAR
            ))
            .into());
        }
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        true
    }

    fn reset(&mut self) {}
}
