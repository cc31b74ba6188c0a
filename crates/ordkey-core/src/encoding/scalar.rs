//! Per-type scalar field encoders.
//!
//! Every `encode_<type>` writes exactly the type's fixed width at `offset`
//! into a caller-owned buffer and nothing else; every `decode_<type>` inverts
//! it. Multi-byte encodings go through the [`order`](super::order)
//! transforms, so unsigned lexicographic comparison of encoded slots matches
//! the natural order of the values, across sign for integers and floats
//! included.
//!
//! # Panics
//!
//! All encoders panic when `buf.len() - offset` is smaller than the field
//! width. That is a caller contract violation, not a recoverable condition;
//! see [`KeyError`](crate::error::KeyError) for the recoverable classes.

use time::OffsetDateTime;

use super::{order, slot, slot_mut};
use crate::error::{KeyError, KeyResult};
use crate::types::Decimal;

/// Width in bytes of an encoded `bool`, `u8`, or `i8` field.
pub const BYTE_WIDTH: usize = 1;
/// Width in bytes of an encoded `i16`/`u16` field.
pub const SHORT_WIDTH: usize = 2;
/// Width in bytes of an encoded `i32`/`u32`/`f32`/`char` field.
pub const WORD_WIDTH: usize = 4;
/// Width in bytes of an encoded `i64`/`u64`/`f64`/timestamp field.
pub const LONG_WIDTH: usize = 8;
/// Width in bytes of an encoded `i128`/decimal field.
pub const WIDE_WIDTH: usize = 16;

/// 100 ns ticks, the resolution of the timestamp encoding.
const NANOS_PER_TICK: i128 = 100;

fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

pub fn encode_bool(value: bool, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, BYTE_WIDTH)[0] = u8::from(value);
}

pub fn encode_u8(value: u8, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, BYTE_WIDTH)[0] = value;
}

pub fn encode_i8(value: i8, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, BYTE_WIDTH).copy_from_slice(&order::i8_sort1(value));
}

pub fn encode_u16(value: u16, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, SHORT_WIDTH).copy_from_slice(&order::u16_sort2(value));
}

pub fn encode_i16(value: i16, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, SHORT_WIDTH).copy_from_slice(&order::i16_sort2(value));
}

pub fn encode_u32(value: u32, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, WORD_WIDTH).copy_from_slice(&order::u32_sort4(value));
}

pub fn encode_i32(value: i32, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, WORD_WIDTH).copy_from_slice(&order::i32_sort4(value));
}

pub fn encode_u64(value: u64, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, LONG_WIDTH).copy_from_slice(&order::u64_sort8(value));
}

pub fn encode_i64(value: i64, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, LONG_WIDTH).copy_from_slice(&order::i64_sort8(value));
}

pub fn encode_i128(value: i128, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, WIDE_WIDTH).copy_from_slice(&order::i128_sort16(value));
}

pub fn encode_f32(value: f32, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, WORD_WIDTH).copy_from_slice(&order::f32_sort4(value));
}

pub fn encode_f64(value: f64, buf: &mut [u8], offset: usize) {
    slot_mut(buf, offset, LONG_WIDTH).copy_from_slice(&order::f64_sort8(value));
}

/// Encodes a `char` as its Unicode scalar value (4 bytes).
///
/// Slot order matches `char`'s own ordering.
pub fn encode_char(value: char, buf: &mut [u8], offset: usize) {
    encode_u32(u32::from(value), buf, offset);
}

/// Encodes an instant as a signed count of 100 ns ticks since the Unix
/// epoch, 8 bytes.
///
/// The instant is taken in UTC, so the value's UTC offset never reaches the
/// key bytes and producers in different zones order consistently. Instants
/// within the same 100 ns tick encode identically.
///
/// # Panics
///
/// Panics when the destination slot is out of bounds, or when the instant's
/// tick count does not fit in 64 bits (outside roughly year ±29,000, only
/// reachable with `time`'s extended date range).
pub fn encode_timestamp(value: OffsetDateTime, buf: &mut [u8], offset: usize) {
    let ticks = value.unix_timestamp_nanos().div_euclid(NANOS_PER_TICK);
    let ticks = i64::try_from(ticks).expect("timestamp tick count fits in 64 bits");
    encode_i64(ticks, buf, offset);
}

/// Encodes a decimal at the column's declared scale, 16 bytes.
///
/// The value is rescaled to `scale` first; every key of a column must be
/// encoded at that column's one declared scale, which is what makes decimal
/// slots mutually comparable.
///
/// # Errors
///
/// Propagates the rescale failures of [`Decimal::rescale`]: scale out of
/// range, overflow at the higher scale, or inexact down-scaling.
pub fn encode_decimal(value: Decimal, scale: i8, buf: &mut [u8], offset: usize) -> KeyResult<()> {
    let scaled = value.rescale(scale)?;
    encode_i128(scaled.raw(), buf, offset);
    Ok(())
}

pub fn decode_bool(buf: &[u8], offset: usize) -> KeyResult<bool> {
    match slot(buf, offset, BYTE_WIDTH)?[0] {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(KeyError::InvalidEncoding(format!("bool byte {other:#04x}"))),
    }
}

pub fn decode_u8(buf: &[u8], offset: usize) -> KeyResult<u8> {
    Ok(slot(buf, offset, BYTE_WIDTH)?[0])
}

pub fn decode_i8(buf: &[u8], offset: usize) -> KeyResult<i8> {
    Ok(order::i8_from_sort1(array(slot(buf, offset, BYTE_WIDTH)?)))
}

pub fn decode_u16(buf: &[u8], offset: usize) -> KeyResult<u16> {
    Ok(order::u16_from_sort2(array(slot(buf, offset, SHORT_WIDTH)?)))
}

pub fn decode_i16(buf: &[u8], offset: usize) -> KeyResult<i16> {
    Ok(order::i16_from_sort2(array(slot(buf, offset, SHORT_WIDTH)?)))
}

pub fn decode_u32(buf: &[u8], offset: usize) -> KeyResult<u32> {
    Ok(order::u32_from_sort4(array(slot(buf, offset, WORD_WIDTH)?)))
}

pub fn decode_i32(buf: &[u8], offset: usize) -> KeyResult<i32> {
    Ok(order::i32_from_sort4(array(slot(buf, offset, WORD_WIDTH)?)))
}

pub fn decode_u64(buf: &[u8], offset: usize) -> KeyResult<u64> {
    Ok(order::u64_from_sort8(array(slot(buf, offset, LONG_WIDTH)?)))
}

pub fn decode_i64(buf: &[u8], offset: usize) -> KeyResult<i64> {
    Ok(order::i64_from_sort8(array(slot(buf, offset, LONG_WIDTH)?)))
}

pub fn decode_i128(buf: &[u8], offset: usize) -> KeyResult<i128> {
    Ok(order::i128_from_sort16(array(slot(buf, offset, WIDE_WIDTH)?)))
}

pub fn decode_f32(buf: &[u8], offset: usize) -> KeyResult<f32> {
    Ok(order::f32_from_sort4(array(slot(buf, offset, WORD_WIDTH)?)))
}

pub fn decode_f64(buf: &[u8], offset: usize) -> KeyResult<f64> {
    Ok(order::f64_from_sort8(array(slot(buf, offset, LONG_WIDTH)?)))
}

pub fn decode_char(buf: &[u8], offset: usize) -> KeyResult<char> {
    let scalar = decode_u32(buf, offset)?;
    char::from_u32(scalar)
        .ok_or_else(|| KeyError::InvalidEncoding(format!("char scalar {scalar:#x}")))
}

pub fn decode_timestamp(buf: &[u8], offset: usize) -> KeyResult<OffsetDateTime> {
    let ticks = decode_i64(buf, offset)?;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ticks) * NANOS_PER_TICK).map_err(|_| {
        KeyError::InvalidEncoding(format!("timestamp ticks {ticks} outside supported range"))
    })
}

/// Decodes a decimal slot encoded at `scale`.
///
/// The scale is not stored in the key; the caller supplies the column's
/// declared scale, the same one used to encode.
pub fn decode_decimal(buf: &[u8], offset: usize, scale: i8) -> KeyResult<Decimal> {
    Decimal::new(decode_i128(buf, offset)?, scale)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn negative_integers_sort_below_positive() {
        let mut neg = [0u8; 8];
        let mut pos = [0u8; 8];
        encode_i64(-1, &mut neg, 0);
        encode_i64(1, &mut pos, 0);
        assert!(neg < pos);

        let mut min = [0u8; 8];
        let mut max = [0u8; 8];
        encode_i64(i64::MIN, &mut min, 0);
        encode_i64(i64::MAX, &mut max, 0);
        assert!(min < neg);
        assert!(pos < max);
    }

    #[test]
    fn negative_floats_sort_below_positive() {
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        encode_f64(-2.5, &mut a, 0);
        encode_f64(2.5, &mut b, 0);
        assert!(a < b);
        encode_f64(-0.0, &mut a, 0);
        encode_f64(0.0, &mut b, 0);
        assert!(a < b);
    }

    #[test]
    fn extreme_magnitudes_round_trip() {
        let mut buf = [0u8; 16];
        for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
            encode_i64(v, &mut buf, 0);
            assert_eq!(decode_i64(&buf, 0).unwrap(), v);
        }
        for v in [u64::MIN, u64::MAX] {
            encode_u64(v, &mut buf, 0);
            assert_eq!(decode_u64(&buf, 0).unwrap(), v);
        }
        for v in [i128::MIN, i128::MAX] {
            encode_i128(v, &mut buf, 0);
            assert_eq!(decode_i128(&buf, 0).unwrap(), v);
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        encode_f64(3.25, &mut a, 0);
        encode_f64(3.25, &mut b, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn fields_stay_inside_their_slot() {
        let mut buf = [0xAAu8; 12];
        encode_u32(0x0102_0304, &mut buf, 4);
        assert_eq!(&buf[..4], &[0xAA; 4]);
        assert_eq!(&buf[4..8], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&buf[8..], &[0xAA; 4]);
    }

    #[test]
    #[should_panic(expected = "key slot out of bounds")]
    fn undersized_buffer_panics() {
        let mut buf = [0u8; 7];
        encode_i64(1, &mut buf, 0);
    }

    #[test]
    #[should_panic(expected = "key slot out of bounds")]
    fn offset_past_end_panics() {
        let mut buf = [0u8; 8];
        encode_u32(1, &mut buf, 5);
    }

    #[test]
    fn truncated_decode_is_an_error() {
        let buf = [0u8; 3];
        assert_eq!(
            decode_u32(&buf, 0),
            Err(KeyError::Truncated { needed: 4, offset: 0, available: 3 })
        );
        assert_eq!(
            decode_u32(&buf, 5),
            Err(KeyError::Truncated { needed: 4, offset: 5, available: 0 })
        );
    }

    #[test]
    fn bool_decode_rejects_junk() {
        let mut buf = [0u8; 1];
        encode_bool(true, &mut buf, 0);
        assert_eq!(decode_bool(&buf, 0), Ok(true));
        buf[0] = 2;
        assert!(decode_bool(&buf, 0).is_err());
    }

    #[test]
    fn char_encodes_its_scalar_value() {
        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        encode_char('a', &mut a, 0);
        encode_char('é', &mut b, 0);
        assert!(a < b);
        assert_eq!(decode_char(&b, 0).unwrap(), 'é');

        // Unpaired surrogate range never decodes to a char.
        let mut junk = [0u8; 4];
        encode_u32(0xD800, &mut junk, 0);
        assert!(decode_char(&junk, 0).is_err());
    }

    #[test]
    fn timestamps_order_by_instant_not_offset() {
        use time::macros::datetime;

        // The same instant expressed in two zones encodes identically.
        let utc = datetime!(2024-03-01 12:00:00 UTC);
        let shifted = datetime!(2024-03-01 14:00:00 +02:00);
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        encode_timestamp(utc, &mut a, 0);
        encode_timestamp(shifted, &mut b, 0);
        assert_eq!(a, b);

        // An earlier instant encodes lower even with a "later" wall clock.
        let earlier = datetime!(2024-03-01 13:00:00 +02:00);
        encode_timestamp(earlier, &mut b, 0);
        assert!(b < a);

        // Pre-epoch instants sort below the epoch.
        let pre_epoch = datetime!(1969-12-31 23:59:59 UTC);
        let epoch = datetime!(1970-01-01 00:00:00 UTC);
        encode_timestamp(pre_epoch, &mut a, 0);
        encode_timestamp(epoch, &mut b, 0);
        assert!(a < b);
        assert_eq!(decode_timestamp(&a, 0).unwrap(), pre_epoch);
    }

    #[test]
    fn decimals_compare_across_source_scales() {
        // Column scale 4: values arriving at scales 1 and 3 land on the same
        // footing once encoded.
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        let coarse: Decimal = "12.5".parse().unwrap();
        let fine: Decimal = "12.501".parse().unwrap();
        encode_decimal(coarse, 4, &mut a, 0).unwrap();
        encode_decimal(fine, 4, &mut b, 0).unwrap();
        assert!(a < b);
        assert_eq!(decode_decimal(&a, 0, 4).unwrap(), coarse);

        let negative: Decimal = "-12.5".parse().unwrap();
        encode_decimal(negative, 4, &mut b, 0).unwrap();
        assert!(b < a);
    }

    #[test]
    fn decimal_encode_rejects_lossy_rescale() {
        let fine: Decimal = "1.2345".parse().unwrap();
        let mut buf = [0u8; 16];
        assert_eq!(
            encode_decimal(fine, 2, &mut buf, 0),
            Err(KeyError::InexactRescale { from: 4, to: 2 })
        );
    }
}
