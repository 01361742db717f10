use super::*;

impl Half {
  /// Zero (`+0.0`), the additive identity element.
  //
  // Represented by the bit pattern `0x0000`.
  pub const ZERO: Self = Self(0x0000);

  /// Negative zero (`-0.0`). Compares equal to [`Self::ZERO`].
  //
  // Represented by the bit pattern `0x8000`.
  pub const NEG_ZERO: Self = Self(0x8000);

  /// One (`1.0`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0x3c00`.
  pub const ONE: Self = Self(0x3c00);

  /// Negative one (`-1.0`).
  //
  // Represented by the bit pattern `0xbc00`.
  pub const NEG_ONE: Self = Self(0xbc00);

  /// Positive infinity. This is also what any positive NaN or any value of 2<sup>16</sup> or
  /// more converts to.
  //
  // Represented by the bit pattern `0x7c00`.
  pub const INFINITY: Self = Self(crate::codec::F16_INFINITY);

  /// Negative infinity.
  //
  // Represented by the bit pattern `0xfc00`.
  pub const NEG_INFINITY: Self = Self(crate::codec::F16_INFINITY | Self::SIGN_MASK);

  /// Largest finite value, `65504.0`.
  //
  // Represented by the bit pattern `0x7bff`.
  pub const MAX: Self = Self(0x7bff);

  /// Smallest finite value, `-65504.0`, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE_SUBNORMAL`]!
  //
  // Represented by the bit pattern `0xfbff`.
  pub const MIN: Self = Self(0xfbff);

  /// Smallest positive *normal* value, 2<sup>-14</sup> ≈ `6.1035e-5`.
  //
  // Represented by the bit pattern `0x0400`.
  pub const MIN_POSITIVE: Self = Self(0x0400);

  /// Smallest positive value, 2<sup>-24</sup> ≈ `5.9605e-8`. Anything smaller in magnitude
  /// converts to zero.
  //
  // Represented by the bit pattern `0x0001`.
  pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

  /// Machine epsilon, 2<sup>-10</sup> ≈ `9.7656e-4`: the difference between `1.0` and the next
  /// larger value.
  //
  // Represented by the bit pattern `0x1400`.
  pub const EPSILON: Self = Self(0x1400);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero() {
    assert_eq!(Half::ZERO.to_f32().to_bits(), 0.0_f32.to_bits());
    assert_eq!(Half::NEG_ZERO.to_f32().to_bits(), (-0.0_f32).to_bits());
    assert_eq!(Half::default().to_bits(), Half::ZERO.to_bits());
  }

  #[test]
  fn one() {
    assert_eq!(Half::ONE.to_f32(), 1.0);
    assert_eq!(Half::NEG_ONE.to_f32(), -1.0);
  }

  #[test]
  fn infinity() {
    assert_eq!(Half::INFINITY.to_f32(), f32::INFINITY);
    assert_eq!(Half::NEG_INFINITY.to_f32(), f32::NEG_INFINITY);
    assert_eq!(Half::NEG_INFINITY.to_bits(), 0xfc00);
  }

  #[test]
  fn max_min() {
    assert_eq!(Half::MAX.to_f32(), 65504.0);
    assert_eq!(Half::MIN.to_f32(), -65504.0);
    assert_eq!(Half::from_f32(65504.0).to_bits(), Half::MAX.to_bits());
  }

  #[test]
  fn min_positive() {
    assert_eq!(Half::MIN_POSITIVE.to_f32(), 6.103515625e-5);
    assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.to_f32(), 5.960464477539063e-8);
  }

  #[test]
  fn epsilon() {
    assert_eq!(Half::EPSILON.to_f32(), 9.765625e-4);
    assert_eq!(Half::ONE.to_bits() + 1, Half::from_f32(1.0 + Half::EPSILON.to_f32()).to_bits());
  }

  /// The constants agree with the extremes of an exhaustive scan.
  #[test]
  fn extremes_exhaustive() {
    let finite = || Half::cases_exhaustive_finite().map(Half::to_f32);
    assert_eq!(finite().fold(f32::NEG_INFINITY, f32::max), Half::MAX.to_f32());
    assert_eq!(finite().fold(f32::INFINITY, f32::min), Half::MIN.to_f32());
    let smallest = finite().filter(|x| *x > 0.0).fold(f32::INFINITY, f32::min);
    assert_eq!(smallest, Half::MIN_POSITIVE_SUBNORMAL.to_f32());
  }
}
