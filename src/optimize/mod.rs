//! Unconstrained minimizers driven by a gradient oracle.

use crate::utils::convergence::SolveStats;

/// Common interface for first-order minimizers.
pub trait Minimizer<G, V> {
    type Error;
    type Scalar: Copy + PartialOrd + num_traits::NumCast;
    /// Minimize starting from the point in `x`, overwriting it with the last iterate.
    fn minimize(&mut self, grad: &G, x: &mut V) -> Result<SolveStats<Self::Scalar>, Self::Error>;
}

pub mod gradient_descent;
pub use gradient_descent::{GradientDescent, gradient_descent};
