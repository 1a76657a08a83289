use thiserror::Error;

// Unified error type for descent

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("breakdown at iteration {iteration} (p^T A p is zero or not finite)")]
    Breakdown { iteration: usize },
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

impl KError {
    /// Returns `Ok(())` when `found == expected`.
    pub(crate) fn check_dim(expected: usize, found: usize) -> Result<(), KError> {
        if expected == found {
            Ok(())
        } else {
            Err(KError::DimensionMismatch { expected, found })
        }
    }
}
