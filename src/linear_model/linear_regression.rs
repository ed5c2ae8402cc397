use super::coordinate_descent::penalized_objective;
use super::linalg::solve_linear_system;
use super::solver::FitDiagnostics;
use super::standardize::center;
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Ordinary least squares.
///
/// Solves the normal equations exactly; on a rank-deficient design matrix it
/// falls back to gradient descent started from the zero vector, whose
/// iterates stay in the row space of X and therefore converge to the
/// minimum-norm least-squares solution.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    pub diagnostics: Option<FitDiagnostics>,
    fit_intercept: bool,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            diagnostics: None,
            fit_intercept: true,
        }
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(RegressionError::EmptyInput);
        }
        if x.nrows() != y.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }

        let (coeffs, intercept, iterations) = if self.fit_intercept {
            let centered = center(x, y);
            let (coeffs, iterations) = solve_least_squares(&centered.x, &centered.y);
            let intercept = centered.y_mean - coeffs.dot(&centered.x_means);
            (coeffs, intercept, iterations)
        } else {
            let (coeffs, iterations) = solve_least_squares(x, y);
            (coeffs, 0.0, iterations)
        };

        self.diagnostics = Some(FitDiagnostics {
            iterations,
            converged: true,
            max_coef_delta: 0.0,
            objective: penalized_objective(x, y, &coeffs, intercept, 0.0, 0.0),
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
}

/// Normal equations first; gradient descent from zero as the minimum-norm
/// fallback for singular systems. Returns the coefficients and the number of
/// descent iterations used (0 for the direct solve).
fn solve_least_squares(x: &Matrix, y: &Vector) -> (Vector, usize) {
    let xt = x.t();
    let xtx = xt.dot(x);
    let xty = xt.dot(y);

    match solve_linear_system(&xtx, &xty) {
        Ok(coeffs) => (coeffs, 0),
        Err(_) => min_norm_gradient_descent(x, y),
    }
}

fn min_norm_gradient_descent(x: &Matrix, y: &Vector) -> (Vector, usize) {
    const MAX_ITERATIONS: usize = 50_000;
    const GRADIENT_TOLERANCE: f64 = 1e-10;

    let n_samples = x.nrows() as f64;
    let mut beta = Vector::zeros(x.ncols());

    // trace(XᵀX)/n bounds the largest curvature, so 1/trace is a safe step.
    let curvature_bound: f64 = x.iter().map(|v| v * v).sum::<f64>() / n_samples;
    if curvature_bound <= 0.0 {
        return (beta, 0);
    }
    let step = 1.0 / curvature_bound;

    let mut iterations = 0;
    for _ in 0..MAX_ITERATIONS {
        let gradient = x.t().dot(&(x.dot(&beta) - y)) / n_samples;
        iterations += 1;

        let gradient_max = gradient.mapv(f64::abs).fold(0.0, |a: f64, &b| a.max(b));
        beta = beta - gradient * step;

        if gradient_max < GRADIENT_TOLERANCE {
            break;
        }
    }

    (beta, iterations)
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
