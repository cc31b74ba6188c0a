//! Fixed-width, order-preserving key field encoding.
//!
//! Callers build a composite key by writing each field's encoding into a
//! disjoint range of one caller-owned buffer; the completed buffer is handed
//! to a sorted index as an immutable sort key, and
//! [`compare_keys`](crate::compare::compare_keys) reproduces the fields'
//! natural order from the raw bytes alone. The encoders know nothing about
//! the composite layout: each writes exactly its field width at the offset it
//! is given, and the schema-to-offset mapping is a contract between the
//! callers.
//!
//! # Modules
//!
//! - [`order`] - bijective value-to-bytes transforms (the ordering core)
//! - [`scalar`] - per-type slot writers and readers
//! - [`composite`] - multi-component vector and rotation fields
//! - [`text`] - fixed-width case-folded string slots
//! - [`writer`] - [`KeyWriter`]/[`KeyReader`] cursors over a key buffer
//!
//! # Example
//!
//! ```
//! use ordkey_core::encoding::scalar;
//! use ordkey_core::compare_keys;
//!
//! let mut low = [0u8; 12];
//! let mut high = [0u8; 12];
//! scalar::encode_u32(7, &mut low, 0);
//! scalar::encode_i64(-5, &mut low, 4);
//! scalar::encode_u32(7, &mut high, 0);
//! scalar::encode_i64(3, &mut high, 4);
//!
//! assert!(compare_keys(&low, &high).is_lt());
//! ```

pub mod composite;
pub mod order;
pub mod scalar;
pub mod text;
pub mod writer;


pub use writer::{KeyReader, KeyWriter};

use crate::error::{KeyError, KeyResult};

/// Borrows the `width`-byte destination slot at `offset`, panicking when the
/// buffer cannot hold it.
///
/// Writing past the destination range would silently corrupt the adjacent
/// fields of a composite key, so an undersized buffer fails loudly instead.
#[track_caller]
pub(crate) fn slot_mut(buf: &mut [u8], offset: usize, width: usize) -> &mut [u8] {
    let end = offset.checked_add(width);
    match end {
        Some(end) if end <= buf.len() => &mut buf[offset..end],
        _ => panic!(
            "key slot out of bounds: {width}-byte field at offset {offset} in {}-byte buffer",
            buf.len()
        ),
    }
}

/// Borrows the `width`-byte source slot at `offset`.
///
/// Unlike the write side, reads face possibly foreign or truncated bytes and
/// report the failure instead of panicking.
pub(crate) fn slot(buf: &[u8], offset: usize, width: usize) -> KeyResult<&[u8]> {
    match offset.checked_add(width) {
        Some(end) if end <= buf.len() => Ok(&buf[offset..end]),
        _ => Err(KeyError::truncated(width, offset, buf.len())),
    }
}
