//! Error types for checked array operations
//!
//! The primary operations on a dynamic array never return errors: a bad index
//! or a pop on an empty array is a caller bug and panics. The `try_*` family
//! exists for callers that cannot validate up front, and reports the same
//! conditions through [`ArrayError`].

use thiserror::Error;

/// Errors returned by the checked (`try_*`) array operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Index outside the valid range for the operation
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds {
        /// The index that was supplied
        index: usize,
        /// Length of the array at the time of the call
        len: usize,
    },

    /// Pop on an array with no elements
    #[error("array is empty")]
    Empty,

    /// Chunk size must be at least 1
    #[error("invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),
}

/// Result type for checked array operations
pub type Result<T> = std::result::Result<T, ArrayError>;

impl ArrayError {
    /// Check if this error reports a bad index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ArrayError::IndexOutOfBounds { .. })
    }

    /// Check if this error reports an empty array
    pub fn is_empty(&self) -> bool {
        matches!(self, ArrayError::Empty)
    }

    /// Check if this error is a precondition violation on the arguments
    /// rather than on the array's current contents.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ArrayError::InvalidChunkSize(_))
    }
}
