//! Order-preserving binary key encoding for sorted indexes.
//!
//! This crate turns typed values into fixed-width byte sequences whose
//! unsigned lexicographic order matches the values' natural order, and
//! provides the comparator that sorted storage applies to the resulting
//! keys. Callers concatenate field encodings into one caller-owned key
//! buffer; the storage layer that persists and orders those buffers lives
//! elsewhere.
//!
//! # Overview
//!
//! - [`encoding::scalar`] - per-type fixed-width field encoders and decoders
//! - [`encoding::composite`] - vector and rotation fields, component by
//!   component
//! - [`encoding::text`] - case-folded fixed-width string slots
//! - [`KeyWriter`] / [`KeyReader`] - cursors that walk a key buffer field by
//!   field
//! - [`compare_keys`] - the total order over encoded key bytes
//! - [`types`] - the value types the encoders accept ([`Decimal`], vectors)
//!
//! # Example
//!
//! ```
//! use ordkey_core::{compare_keys, KeyWriter};
//!
//! // Schema: player id (u32), score (i64), tag (4-byte string slot).
//! let mut a = [0u8; 16];
//! KeyWriter::new(&mut a).write_u32(7).write_i64(-10).write_str("ace", 4);
//!
//! let mut b = [0u8; 16];
//! KeyWriter::new(&mut b).write_u32(7).write_i64(250).write_str("ace", 4);
//!
//! // Same player, lower score: a sorts first, negative values included.
//! assert!(compare_keys(&a, &b).is_lt());
//! ```
//!
//! # Ownership and concurrency
//!
//! Every operation is a pure, synchronous function over caller-supplied
//! buffers; nothing is retained between calls and there is no internal
//! state. A key buffer must not be written from two contexts at once, but
//! completed, immutable buffers can be compared from any number of threads.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

pub mod compare;
pub mod encoding;
pub mod error;
pub mod types;

// Re-export the everyday surface at the crate root.
pub use compare::compare_keys;
pub use encoding::{KeyReader, KeyWriter};
pub use error::{KeyError, KeyResult};
pub use types::{Decimal, IVec2, Quat, Vec2, Vec3, Vec4, MAX_SCALE};
