use ndarray::Axis;

use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Centers columns to zero mean and scales them to unit standard deviation.
///
/// Near-constant columns (std below 1e-10) are centered but not scaled.
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if data.nrows() == 0 {
            return Err(RegressionError::EmptyInput);
        }

        let mean = data
            .mean_axis(Axis(0))
            .ok_or(RegressionError::EmptyInput)?;
        let std = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 1e-10 { s } else { 1.0 });

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let mean = self.mean.as_ref().ok_or(RegressionError::NotFitted)?;
        let std = self.std.as_ref().ok_or(RegressionError::NotFitted)?;

        if data.ncols() != mean.len() {
            return Err(RegressionError::FeatureMismatch {
                expected: mean.len(),
                found: data.ncols(),
            });
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands each column into its powers `x¹, x², …, x^degree`.
///
/// For a single-column input this is the usual polynomial design matrix
/// `[x, x², …, x^d]`; multi-column input is expanded per column, without
/// cross terms. The constant column is omitted by default since the
/// estimators fit their own intercept; `include_bias(true)` prepends it.
pub struct PolynomialFeatures {
    degree: usize,
    include_bias: bool,
}

impl PolynomialFeatures {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            include_bias: false,
        }
    }

    pub fn include_bias(mut self, include_bias: bool) -> Self {
        self.include_bias = include_bias;
        self
    }

    pub fn n_output_features(&self, n_input: usize) -> usize {
        n_input * self.degree + usize::from(self.include_bias)
    }

    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        if self.degree == 0 {
            return Err(RegressionError::InvalidDegree);
        }
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(RegressionError::EmptyInput);
        }

        let n_rows = x.nrows();
        let mut out = Matrix::zeros((n_rows, self.n_output_features(x.ncols())));

        let offset = usize::from(self.include_bias);
        if self.include_bias {
            out.column_mut(0).fill(1.0);
        }

        for (j, col) in x.axis_iter(Axis(1)).enumerate() {
            for power in 1..=self.degree {
                let target = offset + j * self.degree + (power - 1);
                for i in 0..n_rows {
                    out[(i, target)] = col[i].powi(power as i32);
                }
            }
        }

        Ok(out)
    }
}
