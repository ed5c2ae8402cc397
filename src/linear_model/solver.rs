//! Penalty-driven fitting: one entry point over the four estimators.
//!
//! The estimator structs remain the builder API; this module exposes the
//! same fits keyed by a [`Penalty`] value, which is the natural shape for
//! comparing regularization regimes over the same data.

use super::{ElasticNet, Lasso, LinearRegression, Ridge};
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Penalty applied to the squared-error objective.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Penalty {
    /// Ordinary least squares, no penalty.
    None,
    /// L2: `(λ/2)·||β||²`, closed-form solve.
    Ridge { lambda: f64 },
    /// L1: `λ·||β||₁`, coordinate descent.
    Lasso { lambda: f64 },
    /// `λ·(r·||β||₁ + (1-r)/2·||β||²)` with `r = l1_ratio`, coordinate
    /// descent. `l1_ratio` 1 is Lasso, 0 is Ridge.
    ElasticNet { lambda: f64, l1_ratio: f64 },
}

/// A penalty plus the knobs shared by the iterative paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    pub penalty: Penalty,
    /// Stop once no coefficient moves more than this in a full sweep.
    pub tolerance: f64,
    /// Sweep cap for coordinate descent.
    pub max_iter: usize,
    /// Scale columns to unit standard deviation internally before solving.
    pub normalize: bool,
}

impl FitConfig {
    pub fn new(penalty: Penalty) -> Self {
        Self {
            penalty,
            tolerance: 1e-4,
            max_iter: 1000,
            normalize: false,
        }
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// Coefficients and intercept of a completed fit. Immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedModel {
    pub coefficients: Vector,
    pub intercept: f64,
}

impl FittedModel {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// `X·β + β₀` for a matrix with the fitted column count.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() != self.coefficients.len() {
            return Err(RegressionError::FeatureMismatch {
                expected: self.coefficients.len(),
                found: x.ncols(),
            });
        }
        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

/// How a fit went, alongside the model it produced.
///
/// Non-convergence of the iterative paths lands here rather than in an
/// error: the caller decides whether to warn, refit with a larger cap, or
/// accept the best-effort coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitDiagnostics {
    /// Coordinate-descent sweeps used; 0 for the closed-form paths.
    pub iterations: usize,
    pub converged: bool,
    /// Largest coefficient change in the final sweep.
    pub max_coef_delta: f64,
    /// Final value of the penalized objective.
    pub objective: f64,
}

/// Fits `x` against `y` under the configured penalty.
///
/// Structural and configuration errors fail before any computation;
/// non-convergence does not fail (see [`FitDiagnostics`]).
pub fn fit(x: &Matrix, y: &Vector, config: &FitConfig) -> Result<(FittedModel, FitDiagnostics)> {
    match config.penalty {
        Penalty::None => {
            let mut model = LinearRegression::new();
            model.fit(x, y)?;
            finished(model.coefficients, model.intercept, model.diagnostics)
        }
        Penalty::Ridge { lambda } => {
            let mut model = Ridge::new().alpha(lambda).normalize(config.normalize);
            model.fit(x, y)?;
            finished(model.coefficients, model.intercept, model.diagnostics)
        }
        Penalty::Lasso { lambda } => {
            let mut model = Lasso::new()
                .alpha(lambda)
                .normalize(config.normalize)
                .tolerance(config.tolerance)
                .max_iter(config.max_iter);
            model.fit(x, y)?;
            finished(model.coefficients, model.intercept, model.diagnostics)
        }
        Penalty::ElasticNet { lambda, l1_ratio } => {
            let mut model = ElasticNet::new()
                .alpha(lambda)
                .l1_ratio(l1_ratio)
                .normalize(config.normalize)
                .tolerance(config.tolerance)
                .max_iter(config.max_iter);
            model.fit(x, y)?;
            finished(model.coefficients, model.intercept, model.diagnostics)
        }
    }
}

fn finished(
    coefficients: Option<Vector>,
    intercept: Option<f64>,
    diagnostics: Option<FitDiagnostics>,
) -> Result<(FittedModel, FitDiagnostics)> {
    // A successful estimator fit always fills all three.
    let coefficients = coefficients.ok_or(RegressionError::NotFitted)?;
    let intercept = intercept.ok_or(RegressionError::NotFitted)?;
    let diagnostics = diagnostics.ok_or(RegressionError::NotFitted)?;
    Ok((FittedModel { coefficients, intercept }, diagnostics))
}
