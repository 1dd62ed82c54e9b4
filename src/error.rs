//! Error types for the fallible entry points.
//!
//! Absent keys are never errors; lookups report them through `Option` or
//! `bool`. These variants cover malformed input handed to the checked APIs.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid range {lo}..{hi} for slice of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    #[error("entries out of order at index {index}")]
    Unsorted { index: usize },

    #[error("duplicate key at index {index}")]
    DuplicateKey { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
