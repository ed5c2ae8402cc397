use log::warn;

use super::coordinate_descent::{DescentConfig, coordinate_descent, penalized_objective};
use super::solver::FitDiagnostics;
use super::standardize::{center, normalize_columns};
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Mixed L1/L2-penalized least squares, solved by coordinate descent.
///
/// Minimizes
/// `(1/2n)·||y - Xβ - β₀||² + α·(r·||β||₁ + (1-r)/2·||β||²)`
/// where `r` is `l1_ratio`. `l1_ratio` 1 reproduces [`super::Lasso`] and
/// `l1_ratio` 0 reproduces [`super::Ridge`] at the same `alpha`.
///
/// Hitting the sweep cap is not an error: the best coefficients found are
/// kept and [`FitDiagnostics::converged`] is false.
#[derive(Clone, Debug)]
pub struct ElasticNet {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    pub diagnostics: Option<FitDiagnostics>,
    alpha: f64,
    l1_ratio: f64,
    fit_intercept: bool,
    normalize: bool,
    max_iter: usize,
    tolerance: f64,
}

impl ElasticNet {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            diagnostics: None,
            alpha: 1.0,
            l1_ratio: 0.5,
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

    pub fn l1_ratio(mut self, l1_ratio: f64) -> Self {
        self.l1_ratio = l1_ratio;
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

    /// Strength of the L1 term, `alpha · l1_ratio`.
    pub fn l1_penalty(&self) -> f64 {
        self.alpha * self.l1_ratio
    }

    /// Strength of the L2 term, `alpha · (1 - l1_ratio)`.
    pub fn l2_penalty(&self) -> f64 {
        self.alpha * (1.0 - self.l1_ratio)
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if self.alpha < 0.0 {
            return Err(RegressionError::InvalidAlpha(self.alpha));
        }
        if !(0.0..=1.0).contains(&self.l1_ratio) {
            return Err(RegressionError::InvalidL1Ratio(self.l1_ratio));
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
                "elastic net did not converge after {} sweeps (max coefficient delta {:.3e} > tolerance {:.3e}); \
                 consider raising max_iter, relaxing tolerance, or standardizing features",
                iterations, max_delta, self.tolerance
            );
        }

        self.diagnostics = Some(FitDiagnostics {
            iterations,
            converged,
            max_coef_delta: max_delta,
            objective: penalized_objective(
                x,
                y,
                &coeffs,
                intercept,
                self.l1_penalty(),
                self.l2_penalty(),
            ),
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
                l1: self.l1_penalty(),
                l2: self.l2_penalty(),
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

impl Default for ElasticNet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::{Lasso, Ridge};
    use ndarray::array;

    #[test]
    fn test_elastic_net_simple() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new().alpha(0.01).l1_ratio(0.5);
        model.fit(&x, &y).unwrap();

        let score = model.score(&x, &y).unwrap();
        assert!(score > 0.8);
    }

    #[test]
    fn test_elastic_net_matches_lasso_at_ratio_one() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 3.0], [5.0, 6.0]];
        let y = array![4.1, 4.9, 10.2, 10.8, 16.1];

        let mut net = ElasticNet::new()
            .alpha(0.1)
            .l1_ratio(1.0)
            .tolerance(1e-10)
            .max_iter(100_000);
        net.fit(&x, &y).unwrap();

        let mut lasso = Lasso::new()
            .alpha(0.1)
            .tolerance(1e-10)
            .max_iter(100_000);
        lasso.fit(&x, &y).unwrap();

        let net_coeffs = net.coefficients.as_ref().unwrap();
        let lasso_coeffs = lasso.coefficients.as_ref().unwrap();
        for (a, b) in net_coeffs.iter().zip(lasso_coeffs.iter()) {
            assert!((a - b).abs() < 1e-8);
        }
        assert!((net.intercept.unwrap() - lasso.intercept.unwrap()).abs() < 1e-8);
    }

    #[test]
    fn test_elastic_net_matches_ridge_at_ratio_zero() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 3.0], [5.0, 6.0]];
        let y = array![4.1, 4.9, 10.2, 10.8, 16.1];

        let mut net = ElasticNet::new()
            .alpha(0.1)
            .l1_ratio(0.0)
            .tolerance(1e-12)
            .max_iter(100_000);
        net.fit(&x, &y).unwrap();

        let mut ridge = Ridge::new().alpha(0.1);
        ridge.fit(&x, &y).unwrap();

        let net_coeffs = net.coefficients.as_ref().unwrap();
        let ridge_coeffs = ridge.coefficients.as_ref().unwrap();
        for (a, b) in net_coeffs.iter().zip(ridge_coeffs.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
        assert!((net.intercept.unwrap() - ridge.intercept.unwrap()).abs() < 1e-6);
    }

    #[test]
    fn test_elastic_net_sparsity() {
        let x = array![
            [1.0, 0.1, -0.2],
            [2.0, -0.3, 0.1],
            [3.0, 0.2, 0.3],
            [4.0, -0.1, -0.1]
        ];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new().alpha(0.1).l1_ratio(0.9);
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        assert!(coeffs[0].abs() > 0.5);
        assert!(coeffs[1].abs() < 0.1);
        assert!(coeffs[2].abs() < 0.1);
    }

    #[test]
    fn test_elastic_net_without_intercept() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new()
            .alpha(0.01)
            .l1_ratio(0.5)
            .fit_intercept(false);
        model.fit(&x, &y).unwrap();

        assert_eq!(model.intercept.unwrap(), 0.0);
        let coeffs = model.coefficients.as_ref().unwrap();
        assert!((coeffs[0] - 2.0).abs() < 0.2);
    }

    #[test]
    fn test_elastic_net_penalty_split() {
        let model = ElasticNet::new().alpha(1.0).l1_ratio(0.7);

        assert!((model.l1_penalty() - 0.7).abs() < 1e-10);
        assert!((model.l2_penalty() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_elastic_net_high_regularization() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new().alpha(100.0).l1_ratio(0.5);
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        assert!(coeffs[0].abs() < 0.1);
    }

    #[test]
    fn test_elastic_net_non_convergence_flagged() {
        // Strongly correlated columns and a tolerance no single sweep can
        // reach: the fit still succeeds, with the cap recorded.
        let x = array![
            [1.0, 1.01, 0.99],
            [2.0, 2.02, 1.98],
            [3.0, 2.97, 3.03],
            [4.0, 4.04, 3.96],
            [5.0, 4.95, 5.05]
        ];
        let y = array![3.1, 5.9, 9.2, 11.8, 15.1];

        let mut model = ElasticNet::new()
            .alpha(0.001)
            .l1_ratio(0.5)
            .tolerance(1e-12)
            .max_iter(1);
        model.fit(&x, &y).unwrap();

        let diag = model.diagnostics.unwrap();
        assert!(!diag.converged);
        assert_eq!(diag.iterations, 1);
        assert!(diag.max_coef_delta > 0.0);
        assert!(model.coefficients.is_some());
    }

    #[test]
    fn test_elastic_net_invalid_params() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0];

        assert_eq!(
            ElasticNet::new().alpha(-1.0).fit(&x, &y),
            Err(RegressionError::InvalidAlpha(-1.0))
        );
        assert_eq!(
            ElasticNet::new().l1_ratio(1.1).fit(&x, &y),
            Err(RegressionError::InvalidL1Ratio(1.1))
        );
        assert_eq!(
            ElasticNet::new().l1_ratio(-0.1).fit(&x, &y),
            Err(RegressionError::InvalidL1Ratio(-0.1))
        );
        assert_eq!(
            ElasticNet::new().tolerance(0.0).fit(&x, &y),
            Err(RegressionError::InvalidTolerance(0.0))
        );
        assert_eq!(
            ElasticNet::new().max_iter(0).fit(&x, &y),
            Err(RegressionError::InvalidMaxIter)
        );
    }

    #[test]
    fn test_elastic_net_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = ElasticNet::new();

        assert_eq!(model.predict(&x), Err(RegressionError::NotFitted));
    }

    #[test]
    fn test_elastic_net_dimension_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = ElasticNet::new();
        assert!(model.fit(&x, &y).is_err());
    }
}
