use super::coordinate_descent::penalized_objective;
use super::linalg::solve_linear_system;
use super::solver::FitDiagnostics;
use super::standardize::{center, normalize_columns};
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// L2-penalized least squares, solved in closed form.
///
/// Minimizes `(1/2n)·||y - Xβ - β₀||² + (α/2)·||β||²` via
/// `(XᵀX + nαI)β = Xᵀy` on centered data. The intercept is never penalized.
/// Deterministic given X, y and `alpha`; no iteration, no convergence
/// criterion.
#[derive(Clone, Debug)]
pub struct Ridge {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    pub diagnostics: Option<FitDiagnostics>,
    alpha: f64,
    fit_intercept: bool,
    normalize: bool,
}

impl Ridge {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            diagnostics: None,
            alpha: 1.0,
            fit_intercept: true,
            normalize: false,
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

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if self.alpha < 0.0 {
            return Err(RegressionError::InvalidAlpha(self.alpha));
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

        let (coeffs, intercept) = if self.fit_intercept {
            let centered = center(x, y);
            let coeffs = self.solve(&centered.x, &centered.y)?;
            let intercept = centered.y_mean - coeffs.dot(&centered.x_means);
            (coeffs, intercept)
        } else {
            (self.solve(x, y)?, 0.0)
        };

        self.diagnostics = Some(FitDiagnostics {
            iterations: 0,
            converged: true,
            max_coef_delta: 0.0,
            objective: penalized_objective(x, y, &coeffs, intercept, 0.0, self.alpha),
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

    fn solve(&self, x: &Matrix, y: &Vector) -> Result<Vector> {
        let (x_processed, scales) = if self.normalize {
            normalize_columns(x)
        } else {
            (x.clone(), Vector::ones(x.ncols()))
        };

        let xt = x_processed.t();
        let mut gram = xt.dot(&x_processed);
        let ridge_term = x.nrows() as f64 * self.alpha;
        for i in 0..gram.nrows() {
            gram[(i, i)] += ridge_term;
        }

        let coeffs_scaled = solve_linear_system(&gram, &xt.dot(y))?;

        if self.normalize {
            Ok(&coeffs_scaled / &scales)
        } else {
            Ok(coeffs_scaled)
        }
    }
}

impl Default for Ridge {
    fn default() -> Self {
        Self::new()
    }
}
