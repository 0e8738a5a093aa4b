//! Error types for decant-core.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bitness other than 16, 32 or 64.
    #[error("unsupported bitness: {0}")]
    InvalidBitness(u32),
}
