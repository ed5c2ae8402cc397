//! Linear regression under four penalty regimes.
//!
//! - `LinearRegression`: ordinary least squares (exact; minimum-norm on
//!   rank-deficient input)
//! - `Ridge`: L2 penalty, closed-form solve
//! - `Lasso`: L1 penalty, coordinate descent
//! - `ElasticNet`: mixed L1/L2 penalty, coordinate descent
//!
//! The [`fit`] entry point dispatches between them from a [`Penalty`] value
//! and returns the coefficients together with [`FitDiagnostics`].
//!
//! # Examples
//!
//! ```rust
//! use shrinkage::Lasso;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = Lasso::new().alpha(0.01);
//! model.fit(&x, &y).unwrap();
//! assert!(model.diagnostics.unwrap().converged);
//! ```

mod coordinate_descent;
mod elastic_net;
mod lasso;
mod linalg;
mod linear_regression;
mod ridge;
mod solver;
mod standardize;

pub use elastic_net::ElasticNet;
pub use lasso::Lasso;
pub use linear_regression::LinearRegression;
pub use ridge::Ridge;
pub use solver::{FitConfig, FitDiagnostics, FittedModel, Penalty, fit};
