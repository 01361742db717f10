use super::*;

impl Default for Half {
  /// Positive zero, the all-zero bit pattern.
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

/// A capability trait for types that behave like a binary floating point number, and can be
/// converted to and from `f32`.
///
/// This lets generic numeric code accept a [`Half`] wherever it would accept an `f32`; it is
/// implemented for both.
///
/// ```
/// # use soft_half::{FloatingPointLike, Half};
/// fn mean<F: FloatingPointLike>(xs: &[F]) -> F {
///   let sum: f32 = xs.iter().map(|x| x.to_f32()).sum();
///   F::from_f32(sum / xs.len() as f32)
/// }
///
/// assert_eq!(mean(&[1.0_f32, 2.0, 4.5]), 2.5);
/// assert_eq!(mean(&[Half::ONE, Half::from_f32(2.0)]).to_f32(), 1.5);
/// ```
pub trait FloatingPointLike: Copy + Default + PartialOrd {
  /// Storage size in bits.
  const BITS: u32;

  /// Number of significant binary digits, counting the hidden bit.
  const MANTISSA_DIGITS: u32;

  /// The bias added to the exponent in the stored representation.
  const EXPONENT_BIAS: i32;

  /// Largest finite value.
  const MAX: Self;

  /// Smallest finite value.
  const MIN: Self;

  /// Smallest positive normal value.
  const MIN_POSITIVE: Self;

  /// Difference between `1.0` and the next larger value.
  const EPSILON: Self;

  /// Positive infinity.
  const INFINITY: Self;

  /// Convert from an `f32`, possibly losing precision.
  fn from_f32(value: f32) -> Self;

  /// Convert to an `f32`.
  fn to_f32(self) -> f32;

  /// Whether the value is a NaN.
  fn is_nan(self) -> bool;

  /// Whether the value is neither infinite nor NaN.
  fn is_finite(self) -> bool;
}

impl FloatingPointLike for Half {
  const BITS: u32 = Half::BITS;
  const MANTISSA_DIGITS: u32 = Half::MANTISSA_DIGITS;
  const EXPONENT_BIAS: i32 = Half::EXPONENT_BIAS;
  const MAX: Self = Half::MAX;
  const MIN: Self = Half::MIN;
  const MIN_POSITIVE: Self = Half::MIN_POSITIVE;
  const EPSILON: Self = Half::EPSILON;
  const INFINITY: Self = Half::INFINITY;

  #[inline]
  fn from_f32(value: f32) -> Self {
    Half::from_f32(value)
  }

  #[inline]
  fn to_f32(self) -> f32 {
    Half::to_f32(self)
  }

  #[inline]
  fn is_nan(self) -> bool {
    Half::is_nan(self)
  }

  #[inline]
  fn is_finite(self) -> bool {
    Half::is_finite(self)
  }
}

impl FloatingPointLike for f32 {
  const BITS: u32 = 32;
  const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
  const EXPONENT_BIAS: i32 = 127;
  const MAX: Self = f32::MAX;
  const MIN: Self = f32::MIN;
  const MIN_POSITIVE: Self = f32::MIN_POSITIVE;
  const EPSILON: Self = f32::EPSILON;
  const INFINITY: Self = f32::INFINITY;

  #[inline]
  fn from_f32(value: f32) -> Self {
    value
  }

  #[inline]
  fn to_f32(self) -> f32 {
    self
  }

  #[inline]
  fn is_nan(self) -> bool {
    f32::is_nan(self)
  }

  #[inline]
  fn is_finite(self) -> bool {
    f32::is_finite(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default() {
    assert_eq!(Half::default().to_bits(), 0);
  }

  /// Smallest `x` such that `x + 1 != x`, found generically.
  fn first_unit_gap<F: FloatingPointLike>() -> f32 {
    let mut x = F::from_f32(1.0);
    loop {
      let next = F::from_f32(x.to_f32() + 1.0);
      if next.to_f32() == x.to_f32() {
        return x.to_f32()
      }
      x = F::from_f32(x.to_f32() * 2.0);
    }
  }

  #[test]
  fn generic() {
    assert_eq!(first_unit_gap::<Half>(), 2048.0);
    assert_eq!(first_unit_gap::<f32>(), 16777216.0);
  }

  #[test]
  fn consts_agree() {
    fn check<F: FloatingPointLike>() {
      assert_eq!(1u32 << (F::BITS - F::MANTISSA_DIGITS) >> 1, (F::EXPONENT_BIAS + 1) as u32);
      assert_eq!(F::from_f32(1.0 + F::EPSILON.to_f32()).to_f32() - 1.0, F::EPSILON.to_f32());
      assert!(F::MAX.is_finite() && !F::INFINITY.is_finite());
      assert!(F::MIN < F::MIN_POSITIVE && F::MIN_POSITIVE < F::MAX && F::MAX < F::INFINITY);
      assert!(!F::from_f32(0.5).is_nan());
    }
    check::<Half>();
    check::<f32>();
  }
}
