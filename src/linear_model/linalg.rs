use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Solves `a · x = b` by Gaussian elimination with partial pivoting.
///
/// `a` is expected square; pivots below `1e-10` are treated as singular.
pub(crate) fn solve_linear_system(a: &Matrix, b: &Vector) -> Result<Vector> {
    let n = a.nrows();
    let mut aug = Matrix::zeros((n, n + 1));

    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = a[(i, j)];
        }
        aug[(i, n)] = b[i];
    }

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                max_row = k;
            }
        }

        if aug[(max_row, i)].abs() < 1e-10 {
            return Err(RegressionError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..=n {
                let temp = aug[(i, j)];
                aug[(i, j)] = aug[(max_row, j)];
                aug[(max_row, j)] = temp;
            }
        }

        for k in (i + 1)..n {
            let factor = aug[(k, i)] / aug[(i, i)];
            for j in i..=n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        x[i] = aug[(i, n)];
        for j in (i + 1)..n {
            x[i] -= aug[(i, j)] * x[j];
        }
        x[i] /= aug[(i, i)];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_identity() {
        let a = array![[1.0, 0.0], [0.0, 1.0]];
        let b = array![3.0, -2.0];

        let x = solve_linear_system(&a, &b).unwrap();
        assert!((x[0] - 3.0).abs() < 1e-12);
        assert!((x[1] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_requires_pivoting() {
        // First pivot is zero; partial pivoting must swap rows.
        let a = array![[0.0, 2.0], [3.0, 1.0]];
        let b = array![4.0, 5.0];

        let x = solve_linear_system(&a, &b).unwrap();
        assert!((a.dot(&x) - &b).mapv(f64::abs).sum() < 1e-10);
    }

    #[test]
    fn test_solve_singular() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];

        assert_eq!(
            solve_linear_system(&a, &b),
            Err(RegressionError::SingularMatrix)
        );
    }
}
