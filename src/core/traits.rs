//! Core linear-algebra traits for descent.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Gradient evaluation: g ← ∇f(x).
pub trait Gradient<V> {
    /// Write the gradient of the objective at `x` into `g`.
    fn gradient(&self, x: &V, g: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd + num_traits::NumCast;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Shape of a linear operator.
pub trait Indexing {
    /// Number of rows (length of `A x`).
    fn nrows(&self) -> usize;
    /// Number of columns (length of `x`).
    fn ncols(&self) -> usize;
}
