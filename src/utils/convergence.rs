//! Convergence tracking & tolerance checks for iterative solvers.

/// Stopping criteria & stats.
#[derive(Clone, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given the current absolute `norm` and iteration `i`.
    ///
    /// The test is strict: `norm < tol`, except that an exactly zero norm always
    /// counts as converged. Hitting `max_iters` stops the loop but leaves
    /// `converged` false.
    pub fn check(&self, norm: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = norm < self.tol || norm.is_zero();
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: norm,
                converged,
            },
        )
    }
}
