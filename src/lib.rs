//! Linear regression with and without coefficient shrinkage.
//!
//! This crate fits one design matrix against one target vector under a
//! choice of penalty:
//! - `LinearRegression`: ordinary least squares
//! - `Ridge`: L2 penalty, solved in closed form
//! - `Lasso`: L1 penalty, solved by coordinate descent
//! - `ElasticNet`: mixed L1/L2 penalty, solved by coordinate descent
//!
//! The estimators share one objective convention,
//! `(1/2n)·||y - Xβ - β₀||² + λ·(α·||β||₁ + (1-α)/2·||β||²)`,
//! so `ElasticNet` with `l1_ratio` 1 reproduces `Lasso` and with
//! `l1_ratio` 0 reproduces `Ridge` at the same `alpha`.
//!
//! # Examples
//!
//! ## Fitting a single estimator
//! ```rust
//! use shrinkage::{Ridge, Matrix, Vector};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = Ridge::new().alpha(0.1);
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```
//!
//! ## Fitting through a penalty configuration
//! ```rust
//! use shrinkage::{fit, FitConfig, Penalty};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let config = FitConfig::new(Penalty::Lasso { lambda: 0.01 });
//! let (model, diagnostics) = fit(&x, &y, &config).unwrap();
//! assert!(diagnostics.converged);
//! let predictions = model.predict(&x).unwrap();
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::Dataset;
pub use error::{RegressionError, Result};
pub use linear_model::{
    ElasticNet, FitConfig, FitDiagnostics, FittedModel, Lasso, LinearRegression, Penalty, Ridge,
    fit,
};
pub use preprocessing::{PolynomialFeatures, StandardScaler};
