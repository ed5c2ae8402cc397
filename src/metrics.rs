use crate::Vector;
use crate::error::{RegressionError, Result};

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|e| e * e).mean().unwrap_or(0.0))
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).mean().unwrap_or(0.0))
}

/// `1 - SS_res / SS_tot`. A constant target has no total variance to
/// explain, so the score is undefined and reported as `DegenerateInput`
/// rather than a silent 1.0 or NaN.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true
        .mean()
        .ok_or(RegressionError::DegenerateInput("empty target vector"))?;
    let ss_res = (y_true - y_pred).mapv(|e| e * e).sum();
    let ss_tot = y_true.mapv(|v| (v - y_mean) * (v - y_mean)).sum();

    if ss_tot == 0.0 {
        return Err(RegressionError::DegenerateInput(
            "target has zero variance, R² is undefined",
        ));
    }

    Ok(1.0 - ss_res / ss_tot)
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::LengthMismatch {
            expected: y_true.len(),
            found: y_pred.len(),
        });
    }
    Ok(())
}
