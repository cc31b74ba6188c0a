//! Fixed-point decimal values.
//!
//! A [`Decimal`] is a scaled 128-bit integer: the numeric value is
//! `raw / 10^scale`. The scale is the number of fractional digits and always
//! lies in `0..=MAX_SCALE`. Arithmetic here is limited to what key encoding
//! needs: validated construction, checked rescaling, parsing, display, and
//! an exact cross-scale ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{KeyError, KeyResult};

/// Maximum number of fractional digits a [`Decimal`] can carry.
pub const MAX_SCALE: i8 = 28;

/// A fixed-point decimal value.
///
/// Two decimals are equal when they denote the same number, regardless of
/// representation: `1.0 == 1.00`. Ordering is likewise numeric and exact
/// across scales.
///
/// # Example
///
/// ```
/// use ordkey_core::Decimal;
///
/// let a: Decimal = "12.50".parse().unwrap();
/// let b = Decimal::new(125, 1).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "12.50");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    raw: i128,
    scale: i8,
}

impl Decimal {
    /// Creates a decimal from its raw scaled integer and scale.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::ScaleOutOfRange`] when `scale` is negative or
    /// exceeds [`MAX_SCALE`].
    pub fn new(raw: i128, scale: i8) -> KeyResult<Self> {
        if !(0..=MAX_SCALE).contains(&scale) {
            return Err(KeyError::ScaleOutOfRange { scale });
        }
        Ok(Self { raw, scale })
    }

    /// Creates a whole-number decimal with scale zero.
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        Self { raw: value as i128, scale: 0 }
    }

    /// The scaled integer backing this decimal.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i128 {
        self.raw
    }

    /// The number of fractional digits.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> i8 {
        self.scale
    }

    /// Returns this value represented at `scale` fractional digits.
    ///
    /// Rescaling never changes the numeric value. Raising the scale
    /// multiplies the raw integer by a power of ten; lowering it divides and
    /// requires the dropped digits to be zero.
    ///
    /// # Errors
    ///
    /// - [`KeyError::ScaleOutOfRange`] when `scale` is outside `0..=MAX_SCALE`.
    /// - [`KeyError::DecimalOverflow`] when the raw integer does not fit at
    ///   the higher scale.
    /// - [`KeyError::InexactRescale`] when lowering the scale would drop
    ///   non-zero digits. Rounding is never performed silently: distinct
    ///   values must never collapse onto one key.
    pub fn rescale(self, scale: i8) -> KeyResult<Self> {
        if !(0..=MAX_SCALE).contains(&scale) {
            return Err(KeyError::ScaleOutOfRange { scale });
        }
        match scale.cmp(&self.scale) {
            Ordering::Equal => Ok(self),
            Ordering::Greater => {
                let factor = pow10_i128(u32::from((scale - self.scale) as u8));
                let raw = self
                    .raw
                    .checked_mul(factor)
                    .ok_or(KeyError::DecimalOverflow { value: self.raw, scale })?;
                Ok(Self { raw, scale })
            }
            Ordering::Less => {
                let factor = pow10_i128(u32::from((self.scale - scale) as u8));
                if self.raw % factor != 0 {
                    return Err(KeyError::InexactRescale { from: self.scale, to: scale });
                }
                Ok(Self { raw: self.raw / factor, scale })
            }
        }
    }
}

/// `10^exp` for `exp <= MAX_SCALE`; all such powers fit in an `i128`.
#[inline]
fn pow10_i128(exp: u32) -> i128 {
    10_i128.pow(exp)
}

/// Compare `a * 10^shift` against `b` without widening past 128 bits.
///
/// Division with a remainder tie-break is exact: with `q = b / p` and
/// `r = b % p`, the product `a * p` relates to `b = q * p + r` as `a`
/// relates to `q`, with equality only when `r == 0`.
fn cmp_scaled_magnitudes(a: u128, b: u128, shift: i32) -> Ordering {
    if shift >= 0 {
        let p = 10_u128.pow(shift as u32);
        let (q, r) = (b / p, b % p);
        match a.cmp(&q) {
            Ordering::Equal if r != 0 => Ordering::Less,
            ord => ord,
        }
    } else {
        let p = 10_u128.pow(shift.unsigned_abs());
        let (q, r) = (a / p, a % p);
        match q.cmp(&b) {
            Ordering::Equal if r != 0 => Ordering::Greater,
            ord => ord,
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.raw.cmp(&other.raw);
        }
        let sign_a = self.raw.signum();
        let sign_b = other.raw.signum();
        if sign_a != sign_b {
            return sign_a.cmp(&sign_b);
        }
        if sign_a == 0 {
            return Ordering::Equal;
        }
        // Same non-zero sign: compare |a| * 10^sb against |b| * 10^sa, folded
        // so that only one side carries the scaling.
        let mag = cmp_scaled_magnitudes(
            self.raw.unsigned_abs(),
            other.raw.unsigned_abs(),
            i32::from(other.scale) - i32::from(self.scale),
        );
        if sign_a > 0 { mag } else { mag.reverse() }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.raw);
        }
        if self.raw < 0 {
            f.write_str("-")?;
        }
        let digits = self.raw.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if digits.len() <= scale {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        } else {
            let split = digits.len() - scale;
            write!(f, "{}.{}", &digits[..split], &digits[split..])
        }
    }
}

impl FromStr for Decimal {
    type Err = KeyError;

    fn from_str(s: &str) -> KeyResult<Self> {
        let s = s.trim();
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        let scale = frac_part.len();
        if scale > MAX_SCALE as usize {
            return Err(KeyError::ScaleOutOfRange { scale: i8::try_from(scale).unwrap_or(i8::MAX) });
        }
        let combined = format!("{int_part}{frac_part}");
        let raw = combined
            .parse::<i128>()
            .map_err(|_| KeyError::InvalidEncoding(format!("invalid decimal literal {s:?}")))?;
        Self::new(raw, scale as i8)
    }
}
