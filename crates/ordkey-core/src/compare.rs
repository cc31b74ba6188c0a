//! Unsigned lexicographic comparison of key bytes.
//!
//! This is the total order a sorted index applies to completed key buffers.
//! Any byte sequence is a valid input: full keys, sub-ranges, and
//! partial-prefix bounds for range scans all compare through the same
//! function.

use std::cmp::Ordering;

/// Compares two key byte sequences.
///
/// The common prefix is compared 8 bytes at a time: each aligned chunk is
/// read as a big-endian `u64`, and comparing those words is exactly the
/// unsigned lexicographic comparison of the chunk bytes, so the first
/// unequal word decides. Tail bytes past the last full chunk are compared
/// individually. When one input is a prefix of the other, the shorter sorts
/// first; equal-length equal-byte inputs are equal, two empty inputs
/// included.
///
/// Usable directly as a sort comparator:
///
/// ```
/// use ordkey_core::compare_keys;
///
/// let mut keys: Vec<Vec<u8>> = vec![vec![2, 0], vec![1], vec![1, 9]];
/// keys.sort_by(|a, b| compare_keys(a, b));
/// assert_eq!(keys, vec![vec![1], vec![1, 9], vec![2, 0]]);
/// ```
#[must_use]
pub fn compare_keys(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    let mut chunks_a = a[..n].chunks_exact(8);
    let mut chunks_b = b[..n].chunks_exact(8);

    for (ca, cb) in chunks_a.by_ref().zip(chunks_b.by_ref()) {
        let wa = u64::from_be_bytes(ca.try_into().expect("chunks_exact yields 8-byte slices"));
        let wb = u64::from_be_bytes(cb.try_into().expect("chunks_exact yields 8-byte slices"));
        if wa != wb {
            return wa.cmp(&wb);
        }
    }

    for (&ba, &bb) in chunks_a.remainder().iter().zip(chunks_b.remainder()) {
        if ba != bb {
            return ba.cmp(&bb);
        }
    }

    a.len().cmp(&b.len())
}
