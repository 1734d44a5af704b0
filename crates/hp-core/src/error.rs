//! Error types for table and transform operations.
//!
//! This module provides structured error types for building tables and
//! running transforms, with full error chaining support via `thiserror`.

use thiserror::Error;

/// Result type alias for table construction operations that may fail.
pub type FrameResult<T> = core::result::Result<T, FrameError>;

/// Result type alias for transform operations that may fail.
pub type TransformResult<T> = core::result::Result<T, TransformError>;

/// Errors that can occur while assembling a [`DataFrame`](crate::DataFrame).
#[derive(Debug, Error)]
pub enum FrameError {
    /// Column length mismatch with the rest of the table.
    #[error("Column length mismatch for '{column}': expected {expected} rows, got {actual}")]
    LengthMismatch {
        /// Column being added.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },

    /// A column with the same name already exists.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),
}

/// Errors that can occur when restoring transform state.
#[derive(Debug, Error)]
pub enum StateRestoreError {
    /// State version mismatch.
    #[error("State version mismatch: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Expected version.
        expected: String,
        /// Actual version found.
        actual: String,
    },

    /// State data is corrupted or invalid.
    #[error("Invalid state data: {0}")]
    InvalidData(String),
}

/// Errors that can occur during data transformation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Transform was used before being fitted.
    #[error("Transform not fitted: call fit() before transform()")]
    NotFitted,

    /// Required column not found in DataFrame.
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    /// A cell holds a value arithmetic cannot be performed on.
    #[error("Invalid value in column '{column}' at row {row}: {value:?} is not numeric")]
    InvalidValue {
        /// Column holding the value.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// The offending raw value.
        value: String,
    },

    /// Table could not be assembled.
    #[error("Table construction failed")]
    Frame(#[from] FrameError),

    /// Transform state could not be restored.
    #[error("State restoration failed")]
    State(#[from] StateRestoreError),

    /// Pipeline configuration error.
    #[error("Pipeline error: {0}")]
    PipelineError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_error_display() {
        let err = FrameError::LengthMismatch {
            column: "FullBath".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Column length mismatch for 'FullBath': expected 3 rows, got 2"
        );

        let err = FrameError::DuplicateColumn("YearBuilt".to_string());
        assert_eq!(err.to_string(), "Duplicate column: 'YearBuilt'");
    }

    #[test]
    fn test_transform_error_display() {
        let err = TransformError::NotFitted;
        assert_eq!(
            err.to_string(),
            "Transform not fitted: call fit() before transform()"
        );

        let err = TransformError::MissingColumn("TotalBsmtSF".to_string());
        assert_eq!(err.to_string(), "Missing required column: 'TotalBsmtSF'");

        let err = TransformError::InvalidValue {
            column: "FullBath".to_string(),
            row: 4,
            value: "two".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value in column 'FullBath' at row 4: \"two\" is not numeric"
        );
    }

    #[test]
    fn test_error_chaining() {
        let transform_err: TransformError = FrameError::DuplicateColumn("a".to_string()).into();
        assert!(matches!(transform_err, TransformError::Frame(_)));

        let state_err = StateRestoreError::VersionMismatch {
            expected: "1".to_string(),
            actual: "2".to_string(),
        };
        let transform_err: TransformError = state_err.into();
        assert!(matches!(transform_err, TransformError::State(_)));
    }
}
