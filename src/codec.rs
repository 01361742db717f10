//! The bit-level codec between IEEE754 binary32 (`f32`) and binary16 (half precision) patterns.
//!
//! Both directions work purely on the integer bit patterns, so they are `const`, total, and have
//! no side effects. Notation used below:
//!
//!   - **binary32**: `[sign:1][exponent:8, bias 127][mantissa:23]`
//!   - **binary16**: `[sign:1][exponent:5, bias 15][mantissa:10]`
//!
//! Note that narrowing ([`encode`]) *truncates*: it never rounds to nearest, and it maps every NaN
//! to an infinity of the same sign. Widening ([`decode`]) is exact.

/// Exponent bias of binary32.
const F32_BIAS: i32 = 127;

/// Exponent bias of binary16.
const F16_BIAS: i32 = 15;

/// Width of the explicit binary32 mantissa.
const F32_MANTISSA_BITS: u32 = 23;

/// Width of the explicit binary16 mantissa.
const F16_MANTISSA_BITS: u32 = 10;

/// Bits dropped (or added) when moving a mantissa between the two widths.
const MANTISSA_SHIFT: u32 = F32_MANTISSA_BITS - F16_MANTISSA_BITS;

/// The binary16 exponent field of infinity and NaN (all ones).
const F16_EXP_SPECIAL: i32 = 0x1f;

/// Positive infinity in binary16.
pub(crate) const F16_INFINITY: u16 = 0x7c00;

/// Convert the bit pattern of an `f32` to a binary16 bit pattern.
///
/// The conversion truncates towards zero; it does not round. Magnitudes too small even for a
/// subnormal (below 2<sup>-24</sup>) become a zero of the same sign, magnitudes of 2<sup>16</sup>
/// and above become an infinity of the same sign, and so do *all NaNs*.
///
/// ```
/// # use soft_half::codec::encode;
/// assert_eq!(encode(1.0_f32.to_bits()), 0x3c00);
/// assert_eq!(encode(65504.0_f32.to_bits()), 0x7bff);
/// assert_eq!(encode(f32::NAN.to_bits()), 0x7c00);
/// ```
#[inline]
pub const fn encode(bits: u32) -> u16 {
  let sign = ((bits >> 31) as u16) << 15;
  let exp = ((bits >> F32_MANTISSA_BITS) & 0xff) as i32 - F32_BIAS + F16_BIAS;
  let mantissa = bits & 0x7f_ffff;

  if exp <= -10 {
    // Below the smallest subnormal (2^-24): flush to a signed zero.
    sign
  } else if exp <= 0 {
    // Subnormal. Put back the hidden bit and shift the whole 24-bit significand so that it lines
    // up with the 10-bit field, where a unit in the last place is 2^-24. The bits that fall off
    // the right are simply lost.
    //
    //   exp =  0 → shift by 14, the hidden bit lands on 0x200
    //   exp = -9 → shift by 23, only the hidden bit survives, as 0x001
    let significand = mantissa | (1 << F32_MANTISSA_BITS);
    sign | (significand >> (14 - exp)) as u16
  } else if exp >= F16_EXP_SPECIAL {
    // Too big, or already inf / NaN.
    sign | F16_INFINITY
  } else {
    sign | ((exp as u16) << F16_MANTISSA_BITS) | (mantissa >> MANTISSA_SHIFT) as u16
  }
}

/// Convert a binary16 bit pattern to the bit pattern of the `f32` with the same value.
///
/// Every finite binary16 value is exactly representable as an `f32`, so this is lossless.
/// Infinities decode to infinities, and NaNs decode to NaNs keeping their payload (shifted into
/// the top of the wider mantissa).
///
/// ```
/// # use soft_half::codec::decode;
/// assert_eq!(f32::from_bits(decode(0x3c00)), 1.0);
/// assert_eq!(f32::from_bits(decode(0x0001)), 5.9604645e-8);
/// assert_eq!(f32::from_bits(decode(0xfc00)), f32::NEG_INFINITY);
/// ```
#[inline]
pub const fn decode(half: u16) -> u32 {
  let sign = ((half >> 15) as u32) << 31;
  let exp = ((half >> F16_MANTISSA_BITS) & 0x1f) as i32;
  let mut mantissa = (half & 0x3ff) as u32;

  if exp == 0 {
    if mantissa == 0 {
      return sign
    }
    // Subnormal: there is no hidden bit, but every one of these is a normal `f32`. Slide the
    // mantissa left until its leading 1 reaches the hidden bit position, counting the exponent
    // down as we go, then drop that bit again.
    let mut exp = 1;
    while mantissa & (1 << F16_MANTISSA_BITS) == 0 {
      mantissa <<= 1;
      exp -= 1;
    }
    mantissa &= 0x3ff;
    let exp = (exp - F16_BIAS + F32_BIAS) as u32;
    sign | (exp << F32_MANTISSA_BITS) | (mantissa << MANTISSA_SHIFT)
  } else if exp == F16_EXP_SPECIAL {
    sign | 0x7f80_0000 | (mantissa << MANTISSA_SHIFT)
  } else {
    let exp = (exp - F16_BIAS + F32_BIAS) as u32;
    sign | (exp << F32_MANTISSA_BITS) | (mantissa << MANTISSA_SHIFT)
  }
}
