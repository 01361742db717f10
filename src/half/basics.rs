use super::*;
use crate::codec;

impl Half {
  /// The size of this type in bits.
  pub const BITS: u32 = 16;

  /// Number of significant digits in base 2, counting the hidden bit.
  pub const MANTISSA_DIGITS: u32 = 11;

  /// The bias added to the exponent before storing it.
  pub const EXPONENT_BIAS: i32 = 15;

  pub(crate) const SIGN_MASK: u16 = 0x8000;
  pub(crate) const EXP_MASK: u16 = 0x7c00;
  pub(crate) const MANTISSA_MASK: u16 = 0x03ff;

  /// Construct a half from its raw bit representation. Every `u16` is a valid half.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`, untouched: bit 15 is the sign, bits 14 to 10
  /// the exponent, and bits 9 to 0 the mantissa.
  ///
  /// This is the layout that a GPU, or any other consumer of binary16 data, expects.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// Convert an `f32` to a half. This truncates, and maps NaN to infinity; see
  /// [`codec::encode`] for the details.
  #[inline]
  pub const fn from_f32(value: f32) -> Self {
    Self(codec::encode(value.to_bits()))
  }

  /// Convert `self` to the `f32` with the same value. This is exact.
  #[inline]
  pub const fn to_f32(self) -> f32 {
    f32::from_bits(codec::decode(self.0))
  }

  /// Convert an `f64` to a half, by first rounding it to an `f32` and then [truncating that to a
  /// half](Self::from_f32).
  ///
  /// This is meant for constructing halves from literals, see also [`half!`](crate::half).
  #[inline]
  pub const fn from_f64(value: f64) -> Self {
    // `as f32` does not preserve the sign of a NaN.
    if value.is_nan() {
      return Self(((value.is_sign_negative() as u16) << 15) | codec::F16_INFINITY)
    }
    Self::from_f32(value as f32)
  }

  /// Convert an integer to a half, by first rounding it to an `f32` and then [truncating that to
  /// a half](Self::from_f32).
  ///
  /// This is meant for constructing halves from integer literals, see also
  /// [`half!`](crate::half).
  #[inline]
  pub const fn from_u64(value: u64) -> Self {
    Self::from_f32(value as f32)
  }

  /// The [integer view](Half#integer-view) of `self`: the value truncated towards zero, computed
  /// from the fields of the pattern.
  pub(crate) const fn to_int(self) -> i32 {
    let exp = ((self.0 & Self::EXP_MASK) >> 10) as i32 - Self::EXPONENT_BIAS;
    if exp < 0 {
      return 0
    }

    let significand = (self.0 & Self::MANTISSA_MASK) as i32 | 0x400;
    let magnitude =
      if exp <= 10 {
        significand >> (10 - exp)
      } else {
        significand << (exp - 10)
      };

    if self.is_sign_negative() { -magnitude } else { magnitude }
  }

  /// Whether the sign bit is set (including for `-0.0` and negative NaNs).
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    self.0 & Self::SIGN_MASK != 0
  }

  /// Whether the sign bit is clear (including for `+0.0` and positive NaNs).
  #[inline]
  pub const fn is_sign_positive(self) -> bool {
    !self.is_sign_negative()
  }

  /// Whether `self` is a NaN pattern (exponent all ones, mantissa nonzero).
  ///
  /// Note that no conversion or operator in this crate ever *produces* a NaN (they become
  /// infinities instead), so the only way to obtain one is [`Self::from_bits`].
  #[inline]
  pub const fn is_nan(self) -> bool {
    self.0 & !Self::SIGN_MASK > Self::EXP_MASK
  }

  /// Whether `self` is positive or negative infinity.
  #[inline]
  pub const fn is_infinite(self) -> bool {
    self.0 & !Self::SIGN_MASK == Self::EXP_MASK
  }

  /// Whether `self` is neither infinite nor NaN.
  #[inline]
  pub const fn is_finite(self) -> bool {
    self.0 & Self::EXP_MASK != Self::EXP_MASK
  }

  /// Whether `self` is subnormal (exponent field zero, mantissa nonzero).
  #[inline]
  pub const fn is_subnormal(self) -> bool {
    self.0 & Self::EXP_MASK == 0 && self.0 & Self::MANTISSA_MASK != 0
  }
}
