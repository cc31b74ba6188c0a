//! Error types for key encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding key fields.
///
/// Slot-overflow during encoding is deliberately *not* represented here: a
/// destination range that cannot hold the field being written is a caller
/// contract violation and panics instead of corrupting adjacent fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Requested decimal scale falls outside the supported range.
    #[error("decimal scale {scale} outside supported range")]
    ScaleOutOfRange {
        /// The rejected scale.
        scale: i8,
    },

    /// Rescaling a decimal overflowed the 128-bit range.
    #[error("decimal value {value} does not fit at scale {scale}")]
    DecimalOverflow {
        /// The scaled integer that overflowed.
        value: i128,
        /// The target scale.
        scale: i8,
    },

    /// Rescaling a decimal to a lower scale would drop non-zero digits.
    #[error("cannot rescale decimal from scale {from} to {to} without losing precision")]
    InexactRescale {
        /// The value's current scale.
        from: i8,
        /// The requested scale.
        to: i8,
    },

    /// Decode input ended before the full field width.
    #[error("truncated key field: needed {needed} bytes at offset {offset}, had {available}")]
    Truncated {
        /// Bytes required by the field being read.
        needed: usize,
        /// Offset the read started at.
        offset: usize,
        /// Bytes actually available from that offset.
        available: usize,
    },

    /// Decoded bytes do not form a valid value of the requested type.
    #[error("invalid key encoding: {0}")]
    InvalidEncoding(String),
}

impl KeyError {
    /// Creates a truncation error for a read of `needed` bytes at `offset`
    /// into a buffer of `len` bytes.
    #[must_use]
    pub fn truncated(needed: usize, offset: usize, len: usize) -> Self {
        Self::Truncated { needed, offset, available: len.saturating_sub(offset) }
    }
}

/// Result alias used throughout the crate.
pub type KeyResult<T> = Result<T, KeyError>;
