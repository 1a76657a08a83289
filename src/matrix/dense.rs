//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from raw column-major storage or from row-major nested slices.

use crate::core::traits::{Indexing, MatVec};
use faer::Mat;

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + Indexing {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;
    /// Construct from a slice of equally sized rows.
    fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self;
}

impl<T: Copy + num_traits::Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), nrows * ncols, "raw storage has incorrect length");
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }

    fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        assert!(
            rows.iter().all(|r| r.as_ref().len() == ncols),
            "rows must all have the same length"
        );
        Mat::from_fn(nrows, ncols, |i, j| rows[i].as_ref()[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_rows_agree() {
        // [[1,2],[3,4]] in column-major order
        let by_cols: Mat<f64> = DenseMatrix::from_raw(2, 2, vec![1.0, 3.0, 2.0, 4.0]);
        let by_rows: Mat<f64> = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(by_cols[(i, j)], by_rows[(i, j)]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "rows must all have the same length")]
    fn ragged_rows_rejected() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        let _: Mat<f64> = DenseMatrix::from_rows(&rows);
    }
}
