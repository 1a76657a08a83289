//! Core traits and their implementations for faer matrices, vectors and closures.

pub mod traits;
pub mod wrappers;

pub use traits::{Gradient, Indexing, InnerProduct, MatVec};
pub use wrappers::FnOperator;
