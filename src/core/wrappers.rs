//! Trait implementations for faer dense matrices, Rust vectors and closures.
//!
//! This module makes `faer::Mat`, `faer::MatRef` and `Vec<T>` usable by the generic
//! solvers in this crate, and provides [`FnOperator`] so that a plain closure can stand
//! in for a matrix wherever a `MatVec` is expected.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{Gradient, Indexing, InnerProduct, MatVec};
use faer::{Mat, MatRef};
use num_traits::Float;

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        self.as_ref().matvec(x, y)
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<'a, T: Float> MatVec<Vec<T>> for MatRef<'a, T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

/// A matrix-free linear operator backed by a closure.
///
/// The closure receives `x` and must overwrite every entry of `y` with `(A x)`.
/// The declared dimension is what the solvers validate `b` and `x0` against.
///
/// ```rust
/// use descent::core::FnOperator;
/// use descent::core::traits::MatVec;
///
/// // diag(2, 3) without storing the matrix
/// let op = FnOperator::new(2, |x: &[f64], y: &mut [f64]| {
///     y[0] = 2.0 * x[0];
///     y[1] = 3.0 * x[1];
/// });
/// let mut y = vec![0.0; 2];
/// op.matvec(&vec![1.0, 1.0], &mut y);
/// assert_eq!(y, vec![2.0, 3.0]);
/// ```
pub struct FnOperator<F> {
    n: usize,
    f: F,
}

impl<F> FnOperator<F> {
    pub fn new(n: usize, f: F) -> Self {
        Self { n, f }
    }
}

impl<T, F> MatVec<Vec<T>> for FnOperator<F>
where
    F: Fn(&[T], &mut [T]),
{
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.n, x.len(), "Input vector x has incorrect length");
        assert_eq!(self.n, y.len(), "Output vector y has incorrect length");
        (self.f)(x.as_slice(), y.as_mut_slice())
    }
}

impl<F> Indexing for FnOperator<F> {
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

/// Any closure `Fn(&[T], &mut [T])` is a gradient oracle.
impl<T, F> Gradient<Vec<T>> for F
where
    F: Fn(&[T], &mut [T]),
{
    fn gradient(&self, x: &Vec<T>, g: &mut Vec<T>) {
        self(x.as_slice(), g.as_mut_slice())
    }
}

/// Implements inner product and norm for vectors.
impl<T: Float> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter()
            .zip(y.iter())
            .map(|(xi, yi)| *xi * *yi)
            .fold(T::zero(), |acc, v| acc + v)
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        self.dot(x, x).sqrt()
    }
}

/// Implements the `Indexing` trait for `faer::Mat`.
impl<T> Indexing for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<'a, T> Indexing for MatRef<'a, T> {
    fn nrows(&self) -> usize {
        self.shape().0
    }
    fn ncols(&self) -> usize {
        self.shape().1
    }
}
