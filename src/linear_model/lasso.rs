use log::warn;

use super::coordinate_descent::{DescentConfig, coordinate_descent, penalized_objective};
use super::solver::FitDiagnostics;
use super::standardize::{center, normalize_columns};
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// L1-penalized least squares, solved by coordinate descent.
///
/// Minimizes `(1/2n)·||y - Xβ - β₀||² + α·||β||₁`. The non-smooth penalty
/// has no closed form; each coordinate update soft-thresholds the partial
/// residual correlation, which drives small coefficients exactly to zero.
///
/// Hitting the sweep cap is not an error: the best coefficients found are
/// kept and [`FitDiagnostics::converged`] is false.
#[derive(Clone, Debug)]
pub struct Lasso {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    pub diagnostics: Option<FitDiagnostics>,
    alpha: f64,
    fit_intercept: bool,
    normalize: bool,
    max_iter: usize,
    tolerance: f64,
}

impl Lasso {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            diagnostics: None,
            alpha: 1.0,
            fit_intercept: true,
            normalize: false,
            max_iter: 1000,
            tolerance: 1e-4,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if self.alpha < 0.0 {
            return Err(RegressionError::InvalidAlpha(self.alpha));
        }
        if self.tolerance <= 0.0 {
            return Err(RegressionError::InvalidTolerance(self.tolerance));
        }
        if self.max_iter == 0 {
            return Err(RegressionError::InvalidMaxIter);
        }
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(RegressionError::EmptyInput);
        }
        if x.nrows() != y.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }

        let (coeffs, intercept, iterations, converged, max_delta) = if self.fit_intercept {
            let centered = center(x, y);
            let (coeffs, iterations, converged, max_delta) =
                self.descend(&centered.x, &centered.y);
            let intercept = centered.y_mean - coeffs.dot(&centered.x_means);
            (coeffs, intercept, iterations, converged, max_delta)
        } else {
            let (coeffs, iterations, converged, max_delta) = self.descend(x, y);
            (coeffs, 0.0, iterations, converged, max_delta)
        };

        if !converged {
            warn!(
                "lasso did not converge after {} sweeps (max coefficient delta {:.3e} > tolerance {:.3e}); \
                 consider raising max_iter, relaxing tolerance, or standardizing features",
                iterations, max_delta, self.tolerance
            );
        }

        self.diagnostics = Some(FitDiagnostics {
            iterations,
            converged,
            max_coef_delta: max_delta,
            objective: penalized_objective(x, y, &coeffs, intercept, self.alpha, 0.0),
        });
        self.coefficients = Some(coeffs);
        self.intercept = Some(intercept);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = self
            .coefficients
            .as_ref()
            .ok_or(RegressionError::NotFitted)?;
        let intercept = self.intercept.unwrap_or(0.0);

        if x.ncols() != coeffs.len() {
            return Err(RegressionError::FeatureMismatch {
                expected: coeffs.len(),
                found: x.ncols(),
            });
        }

        Ok(x.dot(coeffs) + intercept)
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }

    fn descend(&self, x: &Matrix, y: &Vector) -> (Vector, usize, bool, f64) {
        let (x_processed, scales) = if self.normalize {
            normalize_columns(x)
        } else {
            (x.clone(), Vector::ones(x.ncols()))
        };

        let outcome = coordinate_descent(
            &x_processed,
            y,
            &DescentConfig {
                l1: self.alpha,
                l2: 0.0,
                tolerance: self.tolerance,
                max_iter: self.max_iter,
            },
        );

        let coeffs = if self.normalize {
            &outcome.beta / &scales
        } else {
            outcome.beta
        };

        (coeffs, outcome.iterations, outcome.converged, outcome.max_delta)
    }
}

impl Default for Lasso {
    fn default() -> Self {
        Self::new()
    }
}
