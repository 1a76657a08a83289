//! API options for the solver and the minimizer.
//!
//! `CgOptions` and `GdOptions` hold every tunable of [`conjugate_gradient`](crate::solver::conjugate_gradient)
//! and [`gradient_descent`](crate::optimize::gradient_descent). Unset fields fall back to the
//! documented defaults; setters can be chained.

/// Conjugate Gradient parameters.
#[derive(Debug, Clone)]
pub struct CgOptions<T> {
    /// Initial guess; the zero vector when `None`
    pub x0: Option<Vec<T>>,

    /// Absolute tolerance on ‖r‖₂
    pub tol: T,

    /// Iteration cap; the problem dimension when `None`
    pub max_iters: Option<usize>,
}

impl<T: num_traits::Float> Default for CgOptions<T> {
    fn default() -> Self {
        Self {
            x0: None,
            tol: T::from(1e-6).unwrap_or_else(T::epsilon),
            max_iters: None,
        }
    }
}

impl<T> CgOptions<T> {
    pub fn with_x0(mut self, x0: Vec<T>) -> Self {
        self.x0 = Some(x0);
        self
    }

    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }
}

/// Gradient descent parameters.
#[derive(Debug, Clone)]
pub struct GdOptions<T> {
    /// Fixed step size
    pub lr: T,

    /// Iteration cap
    pub max_iters: usize,

    /// Absolute tolerance on ‖∇f(x)‖₂
    pub tol: T,
}

impl<T: num_traits::Float> Default for GdOptions<T> {
    fn default() -> Self {
        Self {
            lr: T::from(0.1).unwrap_or_else(T::one),
            max_iters: 1000,
            tol: T::from(1e-6).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T> GdOptions<T> {
    pub fn with_lr(mut self, lr: T) -> Self {
        self.lr = lr;
        self
    }

    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }
}
