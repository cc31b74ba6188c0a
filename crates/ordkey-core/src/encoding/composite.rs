//! Multi-component vector and rotation fields.
//!
//! Each encoder writes its components through the scalar encoders in
//! declared field order (x, y, z, w), back to back with no padding, so a
//! vector slot is the concatenation of its component slots. Comparison of
//! encoded vectors is therefore lexicographic over the component sequence:
//! x dominates, then y, and so on. That is a deliberate layout choice, not
//! magnitude ordering: callers pick component order to match how they want
//! range scans to group.

use super::scalar::{
    decode_f32, decode_i32, encode_f32, encode_i32, WORD_WIDTH,
};
use crate::error::KeyResult;
use crate::types::{IVec2, Quat, Vec2, Vec3, Vec4};

/// Width in bytes of an encoded [`Vec2`] field.
pub const VEC2_WIDTH: usize = 2 * WORD_WIDTH;
/// Width in bytes of an encoded [`Vec3`] field.
pub const VEC3_WIDTH: usize = 3 * WORD_WIDTH;
/// Width in bytes of an encoded [`Vec4`] field.
pub const VEC4_WIDTH: usize = 4 * WORD_WIDTH;
/// Width in bytes of an encoded [`IVec2`] field.
pub const IVEC2_WIDTH: usize = 2 * WORD_WIDTH;
/// Width in bytes of an encoded [`Quat`] field.
pub const QUAT_WIDTH: usize = 4 * WORD_WIDTH;

pub fn encode_vec2(value: Vec2, buf: &mut [u8], offset: usize) {
    encode_f32(value.x, buf, offset);
    encode_f32(value.y, buf, offset + WORD_WIDTH);
}

pub fn encode_vec3(value: Vec3, buf: &mut [u8], offset: usize) {
    encode_f32(value.x, buf, offset);
    encode_f32(value.y, buf, offset + WORD_WIDTH);
    encode_f32(value.z, buf, offset + 2 * WORD_WIDTH);
}

pub fn encode_vec4(value: Vec4, buf: &mut [u8], offset: usize) {
    encode_f32(value.x, buf, offset);
    encode_f32(value.y, buf, offset + WORD_WIDTH);
    encode_f32(value.z, buf, offset + 2 * WORD_WIDTH);
    encode_f32(value.w, buf, offset + 3 * WORD_WIDTH);
}

pub fn encode_ivec2(value: IVec2, buf: &mut [u8], offset: usize) {
    encode_i32(value.x, buf, offset);
    encode_i32(value.y, buf, offset + WORD_WIDTH);
}

pub fn encode_quat(value: Quat, buf: &mut [u8], offset: usize) {
    encode_f32(value.x, buf, offset);
    encode_f32(value.y, buf, offset + WORD_WIDTH);
    encode_f32(value.z, buf, offset + 2 * WORD_WIDTH);
    encode_f32(value.w, buf, offset + 3 * WORD_WIDTH);
}

pub fn decode_vec2(buf: &[u8], offset: usize) -> KeyResult<Vec2> {
    Ok(Vec2 { x: decode_f32(buf, offset)?, y: decode_f32(buf, offset + WORD_WIDTH)? })
}

pub fn decode_vec3(buf: &[u8], offset: usize) -> KeyResult<Vec3> {
    Ok(Vec3 {
        x: decode_f32(buf, offset)?,
        y: decode_f32(buf, offset + WORD_WIDTH)?,
        z: decode_f32(buf, offset + 2 * WORD_WIDTH)?,
    })
}

pub fn decode_vec4(buf: &[u8], offset: usize) -> KeyResult<Vec4> {
    Ok(Vec4 {
        x: decode_f32(buf, offset)?,
        y: decode_f32(buf, offset + WORD_WIDTH)?,
        z: decode_f32(buf, offset + 2 * WORD_WIDTH)?,
        w: decode_f32(buf, offset + 3 * WORD_WIDTH)?,
    })
}

pub fn decode_ivec2(buf: &[u8], offset: usize) -> KeyResult<IVec2> {
    Ok(IVec2 { x: decode_i32(buf, offset)?, y: decode_i32(buf, offset + WORD_WIDTH)? })
}

pub fn decode_quat(buf: &[u8], offset: usize) -> KeyResult<Quat> {
    Ok(Quat {
        x: decode_f32(buf, offset)?,
        y: decode_f32(buf, offset + WORD_WIDTH)?,
        z: decode_f32(buf, offset + 2 * WORD_WIDTH)?,
        w: decode_f32(buf, offset + 3 * WORD_WIDTH)?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn x_dominates_then_y() {
        let mut a = [0u8; IVEC2_WIDTH];
        let mut b = [0u8; IVEC2_WIDTH];
        encode_ivec2(IVec2::new(1, 0), &mut a, 0);
        encode_ivec2(IVec2::new(1, 1), &mut b, 0);
        assert!(a < b, "(1,0) should sort before (1,1)");

        encode_ivec2(IVec2::new(2, -100), &mut b, 0);
        assert!(a < b, "(1,0) should sort before (2,-100)");
    }

    #[test]
    fn negative_components_sort_first() {
        let mut a = [0u8; VEC2_WIDTH];
        let mut b = [0u8; VEC2_WIDTH];
        encode_vec2(Vec2::new(-1.0, 5.0), &mut a, 0);
        encode_vec2(Vec2::new(1.0, -5.0), &mut b, 0);
        assert!(a < b);
    }

    #[test]
    fn components_round_trip() {
        let mut buf = [0u8; VEC4_WIDTH];
        let v = Vec4::new(-1.5, 0.0, 3.25, f32::INFINITY);
        encode_vec4(v, &mut buf, 0);
        assert_eq!(decode_vec4(&buf, 0).unwrap(), v);

        let mut buf = [0u8; QUAT_WIDTH];
        let q = Quat::new(0.0, 0.7071, 0.0, 0.7071);
        encode_quat(q, &mut buf, 0);
        assert_eq!(decode_quat(&buf, 0).unwrap(), q);

        let mut buf = [0u8; VEC3_WIDTH];
        let v = Vec3::new(-0.0, 1.0, -2.0);
        encode_vec3(v, &mut buf, 0);
        let decoded = decode_vec3(&buf, 0).unwrap();
        assert_eq!(decoded.x.to_bits(), v.x.to_bits());
        assert_eq!((decoded.y, decoded.z), (v.y, v.z));
    }

    #[test]
    fn widths_cover_all_components() {
        let mut buf = [0xFFu8; VEC3_WIDTH];
        encode_vec3(Vec3::ZERO, &mut buf, 0);
        assert!(buf.iter().all(|&b| b != 0xFF), "every byte of the slot is written");
    }
}
