//! Fixed-step gradient descent.
//!
//! Each iteration evaluates `g = ∇f(x)`, stops when `‖g‖₂ < tol`, and otherwise
//! takes the step `x ← x − lr·g`. The gradient test runs before the update, so a
//! starting point that already satisfies it is returned untouched.
//!
//! There is no line search and no safeguard against a step size that is too large
//! for the curvature of `f`; in that case the iterates grow and the run ends at
//! the iteration cap with `converged == false`.

use crate::config::options::GdOptions;
use crate::core::traits::{Gradient, InnerProduct};
use crate::error::KError;
use crate::optimize::Minimizer;
use crate::utils::convergence::{Convergence, SolveStats};
use log::{debug, trace};

pub struct GradientDescent<T> {
    pub lr: T,
    pub conv: Convergence<T>,
}

impl<T: Copy + num_traits::Float> GradientDescent<T> {
    pub fn new(lr: T, tol: T, max_iters: usize) -> Self {
        Self { lr, conv: Convergence { tol, max_iters } }
    }
}

impl<G, V, T> Minimizer<G, V> for GradientDescent<T>
where
    G: Gradient<V>,
    (): InnerProduct<V, Scalar = T>,
    V: AsMut<[T]> + AsRef<[T]> + From<Vec<T>>,
    T: num_traits::Float,
{
    type Error = KError;
    type Scalar = T;

    fn minimize(&mut self, grad: &G, x: &mut V) -> Result<SolveStats<T>, KError> {
        if !(self.lr > T::zero()) || !self.lr.is_finite() {
            return Err(KError::InvalidParameter("lr must be positive and finite"));
        }
        if !(self.conv.tol >= T::zero()) {
            return Err(KError::InvalidParameter("tol must be nonnegative"));
        }
        let n = x.as_ref().len();
        let ip = ();
        let mut g = V::from(vec![T::zero(); n]);
        // NaN until the first gradient is evaluated
        let mut last_norm = T::nan();

        for i in 0..self.conv.max_iters {
            grad.gradient(x, &mut g);
            last_norm = ip.norm(&g);
            let (stop, stats) = self.conv.check(last_norm, i);
            if stop {
                debug!(
                    "GD converged after {} iterations, ||g|| = {:e}",
                    i,
                    last_norm.to_f64().unwrap_or(f64::NAN)
                );
                return Ok(stats);
            }
            for (xj, &gj) in x.as_mut().iter_mut().zip(g.as_ref()) {
                *xj = *xj - self.lr * gj;
            }
            trace!("GD iter {}: ||g|| = {:e}", i + 1, last_norm.to_f64().unwrap_or(f64::NAN));
        }

        debug!(
            "GD reached the iteration cap ({}), last ||g|| = {:e}",
            self.conv.max_iters,
            last_norm.to_f64().unwrap_or(f64::NAN)
        );
        Ok(SolveStats {
            iterations: self.conv.max_iters,
            final_residual: last_norm,
            converged: false,
        })
    }
}

/// Minimize a function given only its gradient, using a fixed step size.
///
/// `grad` writes `∇f(x)` into its second argument. Returns the last iterate and its
/// [`SolveStats`]; `final_residual` holds the last gradient norm observed. When the
/// iteration cap is reached that norm was taken before the final update, so it is the
/// gradient at the previous iterate, not at the returned one.
///
/// ```rust
/// use descent::{GdOptions, gradient_descent};
///
/// // f(x) = ||x||^2
/// let grad = |x: &[f64], g: &mut [f64]| {
///     for (gi, xi) in g.iter_mut().zip(x) {
///         *gi = 2.0 * xi;
///     }
/// };
/// let (x, stats) = gradient_descent(&grad, &[1.0, -1.0], &GdOptions::default()).unwrap();
/// assert!(stats.converged);
/// assert!(x.iter().all(|xi| xi.abs() < 1e-6));
/// ```
pub fn gradient_descent<G, T>(
    grad: &G,
    x0: &[T],
    opts: &GdOptions<T>,
) -> Result<(Vec<T>, SolveStats<T>), KError>
where
    G: Gradient<Vec<T>>,
    T: num_traits::Float,
{
    let mut x = x0.to_vec();
    let mut gd = GradientDescent::new(opts.lr, opts.tol, opts.max_iters);
    let stats = gd.minimize(grad, &mut x)?;
    Ok((x, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grad_sq_norm(x: &[f64], g: &mut [f64]) {
        for (gi, xi) in g.iter_mut().zip(x) {
            *gi = 2.0 * xi;
        }
    }

    fn norm(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    #[test]
    fn converges_to_origin() {
        let mut x = vec![1.0, -1.0];
        let mut gd = GradientDescent::new(0.1, 1e-6, 1000);
        let stats = gd.minimize(&grad_sq_norm, &mut x).unwrap();
        assert!(stats.converged);
        assert!(stats.final_residual < 1e-6);
        assert!(norm(&x) < 1e-6);
        // each step scales x by (1 - 2 lr) = 0.8
        assert!(stats.iterations > 50 && stats.iterations < 80, "iterations = {}", stats.iterations);
    }

    #[test]
    fn norm_decreases_every_step() {
        let mut x = vec![1.0, -1.0];
        let mut prev = norm(&x);
        let mut gd = GradientDescent::new(0.1, 0.0, 1);
        for _ in 0..40 {
            gd.minimize(&grad_sq_norm, &mut x).unwrap();
            let cur = norm(&x);
            assert!(cur < prev, "{cur} !< {prev}");
            prev = cur;
        }
    }

    #[test]
    fn loose_tolerance_takes_no_step() {
        // ||grad(x0)|| = 2 * sqrt(2) < 3
        let mut x = vec![1.0, -1.0];
        let stats = GradientDescent::new(0.1, 3.0, 1000).minimize(&grad_sq_norm, &mut x).unwrap();
        assert_eq!(x, vec![1.0, -1.0]);
        assert_eq!(stats.iterations, 0);
        assert!(stats.converged);
    }

    #[test]
    fn zero_cap_returns_start() {
        let mut x = vec![0.5, 0.25, -2.0];
        let stats = GradientDescent::new(0.1, 1e-6, 0).minimize(&grad_sq_norm, &mut x).unwrap();
        assert_eq!(x, vec![0.5, 0.25, -2.0]);
        assert_eq!(stats.iterations, 0);
        assert!(!stats.converged);
        assert!(stats.final_residual.is_nan());
    }

    #[test]
    fn too_large_step_diverges_silently() {
        // lr = 1.5 multiplies x by -2 every step
        let mut x = vec![1.0];
        let stats = GradientDescent::new(1.5, 1e-6, 10).minimize(&grad_sq_norm, &mut x).unwrap();
        assert!(!stats.converged);
        assert_eq!(stats.iterations, 10);
        assert_eq!(x, vec![1024.0]);
    }

    #[test]
    fn rejects_bad_step_size() {
        let mut x = vec![1.0];
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = GradientDescent::new(lr, 1e-6, 10).minimize(&grad_sq_norm, &mut x).unwrap_err();
            assert!(matches!(err, KError::InvalidParameter(_)), "lr = {lr}");
        }
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [-1.0, f64::NAN] {
            let mut x = vec![1.0, -1.0];
            let err = GradientDescent::new(0.1, tol, 10).minimize(&grad_sq_norm, &mut x).unwrap_err();
            assert!(matches!(err, KError::InvalidParameter(_)), "tol = {tol}");
            assert_eq!(x, vec![1.0, -1.0]);
        }
    }

    #[test]
    fn single_precision_step() {
        let grad = |x: &[f32], g: &mut [f32]| {
            for (gi, xi) in g.iter_mut().zip(x) {
                *gi = 2.0 * xi;
            }
        };
        let opts = GdOptions::<f32>::default().with_lr(0.25).with_max_iters(1);
        let (x, _) = gradient_descent(&grad, &[2.0f32, -4.0], &opts).unwrap();
        assert_eq!(x, vec![1.0f32, -2.0]);
    }

    #[test]
    fn cap_reports_gradient_before_last_step() {
        // two steps of lr = 0.25 halve x twice; the reported norm is ||grad|| at [1, -2]
        let opts = GdOptions::default().with_lr(0.25).with_tol(0.0).with_max_iters(2);
        let (x, stats) = gradient_descent(&grad_sq_norm, &[2.0, -4.0], &opts).unwrap();
        assert_eq!(x, vec![0.5, -1.0]);
        assert!(!stats.converged);
        assert_eq!(stats.final_residual, 20.0f64.sqrt());
    }

    #[test]
    fn options_entry_point() {
        let opts = GdOptions::default().with_lr(0.25).with_max_iters(1);
        let (x, stats) = gradient_descent(&grad_sq_norm, &[2.0, -4.0], &opts).unwrap();
        assert_eq!(x, vec![1.0, -2.0]);
        assert_eq!(stats.iterations, 1);
    }
}
