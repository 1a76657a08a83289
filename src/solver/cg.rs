//! Conjugate Gradient (unpreconditioned) per Saad §6.1.

use crate::config::options::CgOptions;
use crate::core::traits::{Indexing, InnerProduct, MatVec};
use crate::error::KError;
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveStats};
use log::{debug, trace, warn};

pub struct CgSolver<T> {
    pub tol: T,
    /// Defaults to the problem dimension when `None`.
    pub max_iters: Option<usize>,
}

impl<T: Copy + num_traits::Float> CgSolver<T> {
    pub fn new(tol: T, max_iters: Option<usize>) -> Self {
        Self { tol, max_iters }
    }
}

impl<M, V, T> LinearSolver<M, V> for CgSolver<T>
where
    M: MatVec<V> + Indexing,
    (): InnerProduct<V, Scalar = T>,
    V: AsMut<[T]> + AsRef<[T]> + From<Vec<T>> + Clone,
    T: num_traits::Float,
{
    type Error = KError;
    type Scalar = T;

    fn solve(&mut self, a: &M, b: &V, x: &mut V) -> Result<SolveStats<T>, KError> {
        let n = b.as_ref().len();
        KError::check_dim(a.nrows(), n)?;
        KError::check_dim(a.ncols(), n)?;
        KError::check_dim(n, x.as_ref().len())?;
        if !(self.tol >= T::zero()) {
            return Err(KError::InvalidParameter("tol must be nonnegative"));
        }
        let conv = Convergence { tol: self.tol, max_iters: self.max_iters.unwrap_or(n) };
        let ip = ();

        // r = b - A x
        let mut r = V::from(vec![T::zero(); n]);
        a.matvec(x, &mut r);
        for (rj, &bj) in r.as_mut().iter_mut().zip(b.as_ref()) {
            *rj = bj - *rj;
        }
        let mut rsq = ip.dot(&r, &r);
        let (stop, mut stats) = conv.check(rsq.sqrt(), 0);
        if stop {
            debug!(
                "CG: no iterations needed (converged: {}, ||r0|| = {:e})",
                stats.converged,
                rsq.sqrt().to_f64().unwrap_or(f64::NAN)
            );
            return Ok(stats);
        }

        let mut p = r.clone();
        let mut ap = V::from(vec![T::zero(); n]);
        for i in 1..=conv.max_iters {
            a.matvec(&p, &mut ap);
            let pap = ip.dot(&p, &ap);
            if pap.is_zero() || !pap.is_finite() {
                warn!("CG breakdown at iteration {i}: p^T A p = {:e}", pap.to_f64().unwrap_or(f64::NAN));
                return Err(KError::Breakdown { iteration: i });
            }
            let alpha = rsq / pap;
            for (xj, &pj) in x.as_mut().iter_mut().zip(p.as_ref()) {
                *xj = *xj + alpha * pj;
            }
            for (rj, &apj) in r.as_mut().iter_mut().zip(ap.as_ref()) {
                *rj = *rj - alpha * apj;
            }
            let rsq_new = ip.dot(&r, &r);
            let (stop, s) = conv.check(rsq_new.sqrt(), i);
            stats = s;
            trace!("CG iter {i}: ||r|| = {:e}", rsq_new.sqrt().to_f64().unwrap_or(f64::NAN));
            if stop {
                break;
            }
            let beta = rsq_new / rsq;
            for (pj, &rj) in p.as_mut().iter_mut().zip(r.as_ref()) {
                *pj = rj + beta * *pj;
            }
            rsq = rsq_new;
        }
        debug!(
            "CG finished: converged = {}, iterations = {}, ||r|| = {:e}",
            stats.converged,
            stats.iterations,
            stats.final_residual.to_f64().unwrap_or(f64::NAN)
        );
        Ok(stats)
    }
}

/// Solve `A x = b` with unpreconditioned CG.
///
/// Returns the last iterate together with its [`SolveStats`]. When the iteration cap is
/// reached first, the iterate is still returned and `stats.converged` is `false`.
///
/// ```rust
/// use descent::{CgOptions, DenseMatrix, conjugate_gradient};
/// use faer::Mat;
///
/// let a: Mat<f64> = DenseMatrix::from_rows(&[[4.0, 1.0], [1.0, 3.0]]);
/// let (x, stats) = conjugate_gradient(&a, &[1.0, 2.0], &CgOptions::default()).unwrap();
/// assert!(stats.converged);
/// assert!((x[0] - 1.0 / 11.0).abs() < 1e-6);
/// assert!((x[1] - 7.0 / 11.0).abs() < 1e-6);
/// ```
pub fn conjugate_gradient<M, T>(
    a: &M,
    b: &[T],
    opts: &CgOptions<T>,
) -> Result<(Vec<T>, SolveStats<T>), KError>
where
    M: MatVec<Vec<T>> + Indexing,
    T: num_traits::Float,
{
    let mut x = opts.x0.clone().unwrap_or_else(|| vec![T::zero(); b.len()]);
    let mut solver = CgSolver::new(opts.tol, opts.max_iters);
    let stats = solver.solve(a, &b.to_vec(), &mut x)?;
    Ok((x, stats))
}
