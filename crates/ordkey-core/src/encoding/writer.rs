//! Cursor types over a key buffer.
//!
//! [`KeyWriter`] replaces the manually threaded buffer-plus-offset pattern:
//! it borrows the caller's buffer once, tracks the write position itself,
//! and each `write_<type>` call advances by exactly that field's width. The
//! byte layout is identical to calling the free encoders with hand-computed
//! offsets. [`KeyReader`] walks a completed key the same way.
//!
//! # Example
//!
//! ```
//! use ordkey_core::{KeyReader, KeyWriter};
//!
//! let mut buf = [0u8; 14];
//! KeyWriter::new(&mut buf)
//!     .write_u32(7)
//!     .write_i16(-3)
//!     .write_str("id", 8);
//!
//! let mut reader = KeyReader::new(&buf);
//! assert_eq!(reader.read_u32().unwrap(), 7);
//! assert_eq!(reader.read_i16().unwrap(), -3);
//! assert_eq!(reader.read_str(8).unwrap(), "ID");
//! ```

use time::OffsetDateTime;

use super::{composite, scalar, text};
use crate::error::KeyResult;
use crate::types::{Decimal, IVec2, Quat, Vec2, Vec3, Vec4};

/// Writes consecutive fields into a caller-owned key buffer.
///
/// The buffer is borrowed for the writer's lifetime and never retained
/// beyond it. Writes panic when the remaining buffer cannot hold the field,
/// the same contract as the free encoders.
#[derive(Debug)]
pub struct KeyWriter<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> KeyWriter<'a> {
    /// Starts a writer at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Bytes written so far; equivalently, the offset of the next field.
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes still available for fields.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        scalar::encode_bool(value, self.buf, self.offset);
        self.offset += scalar::BYTE_WIDTH;
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        scalar::encode_u8(value, self.buf, self.offset);
        self.offset += scalar::BYTE_WIDTH;
        self
    }

    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        scalar::encode_i8(value, self.buf, self.offset);
        self.offset += scalar::BYTE_WIDTH;
        self
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        scalar::encode_u16(value, self.buf, self.offset);
        self.offset += scalar::SHORT_WIDTH;
        self
    }

    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        scalar::encode_i16(value, self.buf, self.offset);
        self.offset += scalar::SHORT_WIDTH;
        self
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        scalar::encode_u32(value, self.buf, self.offset);
        self.offset += scalar::WORD_WIDTH;
        self
    }

    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        scalar::encode_i32(value, self.buf, self.offset);
        self.offset += scalar::WORD_WIDTH;
        self
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        scalar::encode_u64(value, self.buf, self.offset);
        self.offset += scalar::LONG_WIDTH;
        self
    }

    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        scalar::encode_i64(value, self.buf, self.offset);
        self.offset += scalar::LONG_WIDTH;
        self
    }

    pub fn write_i128(&mut self, value: i128) -> &mut Self {
        scalar::encode_i128(value, self.buf, self.offset);
        self.offset += scalar::WIDE_WIDTH;
        self
    }

    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        scalar::encode_f32(value, self.buf, self.offset);
        self.offset += scalar::WORD_WIDTH;
        self
    }

    pub fn write_f64(&mut self, value: f64) -> &mut Self {
        scalar::encode_f64(value, self.buf, self.offset);
        self.offset += scalar::LONG_WIDTH;
        self
    }

    pub fn write_char(&mut self, value: char) -> &mut Self {
        scalar::encode_char(value, self.buf, self.offset);
        self.offset += scalar::WORD_WIDTH;
        self
    }

    pub fn write_timestamp(&mut self, value: OffsetDateTime) -> &mut Self {
        scalar::encode_timestamp(value, self.buf, self.offset);
        self.offset += scalar::LONG_WIDTH;
        self
    }

    /// Writes a decimal at the column's declared scale.
    ///
    /// # Errors
    ///
    /// Propagates rescale failures; the cursor does not advance on error.
    pub fn write_decimal(&mut self, value: Decimal, scale: i8) -> KeyResult<&mut Self> {
        scalar::encode_decimal(value, scale, self.buf, self.offset)?;
        self.offset += scalar::WIDE_WIDTH;
        Ok(self)
    }

    /// Writes a `width`-byte string slot.
    pub fn write_str(&mut self, text: &str, width: usize) -> &mut Self {
        text::encode_str(text, self.buf, self.offset, width);
        self.offset += width;
        self
    }

    pub fn write_vec2(&mut self, value: Vec2) -> &mut Self {
        composite::encode_vec2(value, self.buf, self.offset);
        self.offset += composite::VEC2_WIDTH;
        self
    }

    pub fn write_vec3(&mut self, value: Vec3) -> &mut Self {
        composite::encode_vec3(value, self.buf, self.offset);
        self.offset += composite::VEC3_WIDTH;
        self
    }

    pub fn write_vec4(&mut self, value: Vec4) -> &mut Self {
        composite::encode_vec4(value, self.buf, self.offset);
        self.offset += composite::VEC4_WIDTH;
        self
    }

    pub fn write_ivec2(&mut self, value: IVec2) -> &mut Self {
        composite::encode_ivec2(value, self.buf, self.offset);
        self.offset += composite::IVEC2_WIDTH;
        self
    }

    pub fn write_quat(&mut self, value: Quat) -> &mut Self {
        composite::encode_quat(value, self.buf, self.offset);
        self.offset += composite::QUAT_WIDTH;
        self
    }
}

/// Reads consecutive fields from a completed key.
///
/// Reads return [`KeyError::Truncated`](crate::error::KeyError::Truncated)
/// past the end of the buffer rather than panicking: a reader may be handed
/// foreign or partial key bytes. The cursor does not advance on error.
#[derive(Debug, Clone)]
pub struct KeyReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> KeyReader<'a> {
    /// Starts a reader at the beginning of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Bytes read so far; equivalently, the offset of the next field.
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    fn take<T>(&mut self, width: usize, value: KeyResult<T>) -> KeyResult<T> {
        if value.is_ok() {
            self.offset += width;
        }
        value
    }

    pub fn read_bool(&mut self) -> KeyResult<bool> {
        let v = scalar::decode_bool(self.buf, self.offset);
        self.take(scalar::BYTE_WIDTH, v)
    }

    pub fn read_u8(&mut self) -> KeyResult<u8> {
        let v = scalar::decode_u8(self.buf, self.offset);
        self.take(scalar::BYTE_WIDTH, v)
    }

    pub fn read_i8(&mut self) -> KeyResult<i8> {
        let v = scalar::decode_i8(self.buf, self.offset);
        self.take(scalar::BYTE_WIDTH, v)
    }

    pub fn read_u16(&mut self) -> KeyResult<u16> {
        let v = scalar::decode_u16(self.buf, self.offset);
        self.take(scalar::SHORT_WIDTH, v)
    }

    pub fn read_i16(&mut self) -> KeyResult<i16> {
        let v = scalar::decode_i16(self.buf, self.offset);
        self.take(scalar::SHORT_WIDTH, v)
    }

    pub fn read_u32(&mut self) -> KeyResult<u32> {
        let v = scalar::decode_u32(self.buf, self.offset);
        self.take(scalar::WORD_WIDTH, v)
    }

    pub fn read_i32(&mut self) -> KeyResult<i32> {
        let v = scalar::decode_i32(self.buf, self.offset);
        self.take(scalar::WORD_WIDTH, v)
    }

    pub fn read_u64(&mut self) -> KeyResult<u64> {
        let v = scalar::decode_u64(self.buf, self.offset);
        self.take(scalar::LONG_WIDTH, v)
    }

    pub fn read_i64(&mut self) -> KeyResult<i64> {
        let v = scalar::decode_i64(self.buf, self.offset);
        self.take(scalar::LONG_WIDTH, v)
    }

    pub fn read_i128(&mut self) -> KeyResult<i128> {
        let v = scalar::decode_i128(self.buf, self.offset);
        self.take(scalar::WIDE_WIDTH, v)
    }

    pub fn read_f32(&mut self) -> KeyResult<f32> {
        let v = scalar::decode_f32(self.buf, self.offset);
        self.take(scalar::WORD_WIDTH, v)
    }

    pub fn read_f64(&mut self) -> KeyResult<f64> {
        let v = scalar::decode_f64(self.buf, self.offset);
        self.take(scalar::LONG_WIDTH, v)
    }

    pub fn read_char(&mut self) -> KeyResult<char> {
        let v = scalar::decode_char(self.buf, self.offset);
        self.take(scalar::WORD_WIDTH, v)
    }

    pub fn read_timestamp(&mut self) -> KeyResult<OffsetDateTime> {
        let v = scalar::decode_timestamp(self.buf, self.offset);
        self.take(scalar::LONG_WIDTH, v)
    }

    /// Reads a decimal slot encoded at the column's declared `scale`.
    pub fn read_decimal(&mut self, scale: i8) -> KeyResult<Decimal> {
        let v = scalar::decode_decimal(self.buf, self.offset, scale);
        self.take(scalar::WIDE_WIDTH, v)
    }

    /// Reads a `width`-byte string slot, stripping padding.
    pub fn read_str(&mut self, width: usize) -> KeyResult<String> {
        let v = text::decode_str(self.buf, self.offset, width);
        self.take(width, v)
    }

    pub fn read_vec2(&mut self) -> KeyResult<Vec2> {
        let v = composite::decode_vec2(self.buf, self.offset);
        self.take(composite::VEC2_WIDTH, v)
    }

    pub fn read_vec3(&mut self) -> KeyResult<Vec3> {
        let v = composite::decode_vec3(self.buf, self.offset);
        self.take(composite::VEC3_WIDTH, v)
    }

    pub fn read_vec4(&mut self) -> KeyResult<Vec4> {
        let v = composite::decode_vec4(self.buf, self.offset);
        self.take(composite::VEC4_WIDTH, v)
    }

    pub fn read_ivec2(&mut self) -> KeyResult<IVec2> {
        let v = composite::decode_ivec2(self.buf, self.offset);
        self.take(composite::IVEC2_WIDTH, v)
    }

    pub fn read_quat(&mut self) -> KeyResult<Quat> {
        let v = composite::decode_quat(self.buf, self.offset);
        self.take(composite::QUAT_WIDTH, v)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::encoding::scalar::{encode_i64, encode_u32};

    #[test]
    fn writer_matches_hand_computed_offsets() {
        let mut by_hand = [0u8; 12];
        encode_u32(9, &mut by_hand, 0);
        encode_i64(-40, &mut by_hand, 4);

        let mut by_cursor = [0u8; 12];
        KeyWriter::new(&mut by_cursor).write_u32(9).write_i64(-40);

        assert_eq!(by_hand, by_cursor);
    }

    #[test]
    fn writer_tracks_position() {
        let mut buf = [0u8; 32];
        let mut w = KeyWriter::new(&mut buf);
        assert_eq!(w.position(), 0);
        w.write_bool(true).write_u16(5);
        assert_eq!(w.position(), 3);
        assert_eq!(w.remaining(), 29);
        w.write_str("tag", 5);
        assert_eq!(w.position(), 8);
    }

    #[test]
    fn round_trip_through_reader() {
        let mut buf = [0u8; 45];
        let stamp = OffsetDateTime::from_unix_timestamp(86_400).unwrap();
        KeyWriter::new(&mut buf)
            .write_u64(77)
            .write_f64(-2.25)
            .write_char('Ω')
            .write_str("name", 8)
            .write_timestamp(stamp)
            .write_ivec2(crate::types::IVec2::new(-3, 4));

        let mut r = KeyReader::new(&buf);
        assert_eq!(r.read_u64().unwrap(), 77);
        assert_eq!(r.read_f64().unwrap(), -2.25);
        assert_eq!(r.read_char().unwrap(), 'Ω');
        assert_eq!(r.read_str(8).unwrap(), "NAME");
        assert_eq!(r.read_timestamp().unwrap(), stamp);
        assert_eq!(r.read_ivec2().unwrap(), crate::types::IVec2::new(-3, 4));
        assert_eq!(r.remaining(), 1);
    }

    #[test]
    fn failed_decimal_write_leaves_cursor_in_place() {
        let mut buf = [0u8; 16];
        let mut w = KeyWriter::new(&mut buf);
        let fine: Decimal = "1.23".parse().unwrap();
        assert!(w.write_decimal(fine, 0).is_err());
        assert_eq!(w.position(), 0);
        assert!(w.write_decimal(fine, 4).is_ok());
        assert_eq!(w.position(), 16);
    }

    #[test]
    fn reader_stops_cleanly_at_the_end() {
        let mut buf = [0u8; 10];
        KeyWriter::new(&mut buf).write_u64(1).write_u16(2);

        let mut r = KeyReader::new(&buf);
        assert_eq!(r.read_u64().unwrap(), 1);
        assert!(r.read_u64().is_err());
        // Cursor unchanged by the failed read; the short field still decodes.
        assert_eq!(r.read_u16().unwrap(), 2);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "key slot out of bounds")]
    fn writer_overflow_panics() {
        let mut buf = [0u8; 4];
        KeyWriter::new(&mut buf).write_u32(1).write_u8(2);
    }
}
