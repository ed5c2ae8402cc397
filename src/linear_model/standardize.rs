use ndarray::Axis;

use crate::{Matrix, Vector};

/// Design matrix and target with their column/overall means removed.
///
/// Centering before the solve is the closed-form equivalent of carrying an
/// unpenalized intercept: the intercept is recovered afterwards as
/// `y_mean - coeffs · x_means`.
pub(crate) struct Centered {
    pub x: Matrix,
    pub y: Vector,
    pub x_means: Vector,
    pub y_mean: f64,
}

pub(crate) fn center(x: &Matrix, y: &Vector) -> Centered {
    let y_mean = y.mean().unwrap_or(0.0);
    let x_means = x
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Vector::zeros(x.ncols()));

    let mut x_centered = x.clone();
    for mut row in x_centered.axis_iter_mut(Axis(0)) {
        row -= &x_means;
    }

    Centered {
        x: x_centered,
        y: y - y_mean,
        x_means,
        y_mean,
    }
}

/// Scales each column to unit standard deviation, returning the scaled matrix
/// and the per-column scale factors. Near-constant columns keep a scale of
/// 1.0 so the later rescale `coeffs / scales` is well defined for them.
pub(crate) fn normalize_columns(x: &Matrix) -> (Matrix, Vector) {
    let std = x.std_axis(Axis(0), 0.0);
    let scales = std.mapv(|s| if s > 1e-10 { s } else { 1.0 });

    let mut x_scaled = x.clone();
    for (j, mut col) in x_scaled.axis_iter_mut(Axis(1)).enumerate() {
        col /= scales[j];
    }

    (x_scaled, scales)
}
