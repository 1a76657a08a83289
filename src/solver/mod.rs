//! Linear solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for iterative linear solvers.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, reading the initial guess from `x` and writing the result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
    type Scalar: Copy + PartialOrd + num_traits::NumCast;
}

pub mod cg;
pub use cg::{CgSolver, conjugate_gradient};
