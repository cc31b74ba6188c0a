//! Value types accepted by the key encoders.

mod decimal;
mod vector;

pub use decimal::{Decimal, MAX_SCALE};
pub use vector::{IVec2, Quat, Vec2, Vec3, Vec4};
