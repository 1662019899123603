//! Core error types for ember-util crate
//!
//! This module defines error types used in the util crate.

use thiserror::Error;

/// Error type for packed integer decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackedIntError {
    /// Input ended while the continuation bit was still set
    #[error("Truncated packed integer: {consumed} bytes read, continuation bit still set")]
    Truncated { consumed: usize },

    /// Encoded value does not fit in a u32
    #[error("Packed integer overflows u32 after {consumed} bytes")]
    Overflow { consumed: usize },
}

/// Result type alias for packed integer operations
pub type PackedIntResult<T> = std::result::Result<T, PackedIntError>;
