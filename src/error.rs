use thiserror::Error;

/// Errors reported by estimators, metrics and preprocessing.
///
/// Configuration and shape problems fail fast, before any computation.
/// Non-convergence of the iterative solvers is deliberately *not* an error;
/// it is reported through [`crate::FitDiagnostics`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("invalid regularization strength {0} (must be non-negative)")]
    InvalidAlpha(f64),

    #[error("invalid l1_ratio {0} (must be in [0, 1])")]
    InvalidL1Ratio(f64),

    #[error("invalid tolerance {0} (must be positive)")]
    InvalidTolerance(f64),

    #[error("invalid max_iter 0 (must be positive)")]
    InvalidMaxIter,

    #[error("invalid polynomial degree 0 (must be at least 1)")]
    InvalidDegree,

    #[error("invalid test_size {0} (must be in (0, 1))")]
    InvalidTestSize(f64),

    #[error("dimension mismatch: X has {x_rows} rows, y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("feature count mismatch: X has {found} columns, expected {expected}")]
    FeatureMismatch { expected: usize, found: usize },

    #[error("length mismatch: y_true has {expected} elements, y_pred has {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("X must have at least one sample and one feature")]
    EmptyInput,

    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,
}

pub type Result<T> = std::result::Result<T, RegressionError>;
