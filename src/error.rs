use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SieveError>;

#[derive(Debug, Error)]
pub enum SieveError {
    #[error("wheel size must be at least 2, got {wheel_size}")]
    InvalidWheelSize { wheel_size: u64 },

    #[error("cannot factor {n}: input must be positive")]
    InvalidFactorizationInput { n: u64 },

    /// The sieve table for this many cells could not be allocated (or even addressed).
    #[error("cannot allocate a sieve table of {cells} cells")]
    ResourceExhausted {
        cells: u64,
        #[source]
        source: Option<TryReserveError>,
    },
}

impl SieveError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SieveError::InvalidWheelSize { .. } | SieveError::InvalidFactorizationInput { .. }
        )
    }

    pub(crate) fn exhausted(cells: u64) -> SieveError {
        SieveError::ResourceExhausted {
            cells,
            source: None,
        }
    }
}
