//! Fixed-width string slots.
//!
//! Text fields occupy a caller-fixed slot width inside a composite key. The
//! value is uppercased before encoding, so slot comparison is
//! case-insensitive by construction, then UTF-8 bytes fill the slot: shorter
//! values are right-padded with 0x20, longer values are cut at the slot
//! boundary. The pad byte is low among printable bytes, so a string followed
//! by padding sorts before any continuation with a printable character above
//! space. Truncation discards ordering information past the slot width and
//! may cut through a multi-byte sequence; key slots are ordered bytes, not
//! guaranteed-valid UTF-8.

use super::{slot, slot_mut};
use crate::error::KeyResult;

/// Byte used to right-pad short values: ASCII space.
pub const PAD_BYTE: u8 = 0x20;

/// Encodes `text` into the `width`-byte slot at `offset`.
///
/// # Panics
///
/// Panics when the destination slot is out of bounds.
pub fn encode_str(text: &str, buf: &mut [u8], offset: usize, width: usize) {
    let dst = slot_mut(buf, offset, width);
    let upper = text.to_uppercase();
    let bytes = upper.as_bytes();
    if bytes.len() >= width {
        dst.copy_from_slice(&bytes[..width]);
    } else {
        dst[..bytes.len()].copy_from_slice(bytes);
        dst[bytes.len()..].fill(PAD_BYTE);
    }
}

/// Best-effort inverse of [`encode_str`] for diagnostics: strips trailing
/// padding and decodes the remainder lossily.
///
/// The original casing and anything truncated at encode time are gone; a
/// slot cut mid-sequence yields replacement characters.
pub fn decode_str(buf: &[u8], offset: usize, width: usize) -> KeyResult<String> {
    let raw = slot(buf, offset, width)?;
    let end = raw.iter().rposition(|&b| b != PAD_BYTE).map_or(0, |i| i + 1);
    Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
}
