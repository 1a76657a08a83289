//! descent: Conjugate Gradient and gradient descent over Faer
//!
//! This crate provides an unpreconditioned Conjugate Gradient solver for symmetric positive-definite
//! systems and a fixed-step gradient descent minimizer. Operators may be dense `faer` matrices or
//! closures wrapped in [`FnOperator`]; gradients are plain closures.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod optimize;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use optimize::*;
pub use solver::*;
pub use utils::*;
