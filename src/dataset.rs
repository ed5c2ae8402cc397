use ndarray::{Axis, s};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// A feature matrix paired with its label vector.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: features.nrows(),
                y_len: labels.len(),
            });
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Splits off the trailing `test_size` fraction of rows, in order.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        let n_train = self.train_count(test_size)?;

        let train = Dataset::new(
            self.features.slice(s![..n_train, ..]).to_owned(),
            self.labels.slice(s![..n_train]).to_owned(),
        )?;
        let test = Dataset::new(
            self.features.slice(s![n_train.., ..]).to_owned(),
            self.labels.slice(s![n_train..]).to_owned(),
        )?;

        Ok((train, test))
    }

    /// Like [`Dataset::train_test_split`], but over a seeded shuffle of the
    /// rows, so ordered synthetic data does not end up sorted into the two
    /// partitions.
    pub fn shuffled_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        let n_train = self.train_count(test_size)?;

        let mut indices: Vec<usize> = (0..self.n_samples()).collect();
        indices.shuffle(&mut StdRng::seed_from_u64(seed));

        let train = Dataset::new(
            self.features.select(Axis(0), &indices[..n_train]),
            self.labels.select(Axis(0), &indices[..n_train]),
        )?;
        let test = Dataset::new(
            self.features.select(Axis(0), &indices[n_train..]),
            self.labels.select(Axis(0), &indices[n_train..]),
        )?;

        Ok((train, test))
    }

    fn train_count(&self, test_size: f64) -> Result<usize> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(RegressionError::InvalidTestSize(test_size));
        }
        if self.n_samples() < 2 {
            return Err(RegressionError::DegenerateInput(
                "need at least two samples to split",
            ));
        }

        let n_samples = self.n_samples();
        let n_test = ((n_samples as f64 * test_size).round() as usize).clamp(1, n_samples - 1);
        Ok(n_samples - n_test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_mismatched_lengths() {
        let features = Matrix::zeros((3, 2));
        let labels = Vector::zeros(4);

        assert!(Dataset::new(features, labels).is_err());
    }

    #[test]
    fn test_train_test_split() {
        let features = Matrix::zeros((100, 5));
        let labels = Vector::zeros(100);
        let dataset = Dataset::new(features, labels).unwrap();

        let (train, test) = dataset.train_test_split(0.2).unwrap();
        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);
    }

    #[test]
    fn test_split_partitions_are_disjoint_and_exhaustive() {
        let features = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
        let labels = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let dataset = Dataset::new(features, labels).unwrap();

        let (train, test) = dataset.train_test_split(0.4).unwrap();
        assert_eq!(train.n_samples() + test.n_samples(), 5);

        let mut seen: Vec<f64> = train.labels.iter().chain(test.labels.iter()).copied().collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_shuffled_split_is_seeded() {
        let features = array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0]];
        let labels = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let dataset = Dataset::new(features, labels).unwrap();

        let (train_a, test_a) = dataset.shuffled_split(0.33, 7).unwrap();
        let (train_b, test_b) = dataset.shuffled_split(0.33, 7).unwrap();

        assert_eq!(train_a.labels, train_b.labels);
        assert_eq!(test_a.labels, test_b.labels);
        assert_eq!(train_a.n_samples() + test_a.n_samples(), 6);

        // Rows keep their feature/label pairing through the shuffle.
        for (row, label) in train_a.features.rows().into_iter().zip(train_a.labels.iter()) {
            assert_eq!(row[0], *label);
        }
    }

    #[test]
    fn test_invalid_test_size() {
        let dataset = Dataset::new(Matrix::zeros((10, 1)), Vector::zeros(10)).unwrap();

        assert!(dataset.train_test_split(0.0).is_err());
        assert!(dataset.train_test_split(1.0).is_err());
        assert!(dataset.train_test_split(-0.5).is_err());
    }
}
