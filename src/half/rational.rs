use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};

/// The error type returned when a [Half] cannot be converted to a [Rational] because it is an
/// infinity or a NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNonFinite;

impl Half {
  /// Convert a **finite** half into a [Rational] value. Panics if `self` is infinite or NaN.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the binary16 format, since
  /// this is what we will check the [codec](crate::codec) against!
  fn into_rational_finite(self) -> Rational {
    let bits = self.to_bits();
    let sign = bits >> 15;
    let exponent = (bits >> 10) & 0b11111;
    let mantissa = bits & 0b11_1111_1111;

    if exponent == 0b11111 { panic!("Should not pass {bits:#06x} to into_rational_finite") }

    // Normals have a hidden 1 bit in front of the mantissa, and their exponent is biased by 15.
    // Subnormals have no hidden bit, and the same exponent as the smallest normals (-14).
    //
    // In both cases the value is then `significand × 2^(exponent - 10)`.
    let (significand, exponent) =
      if exponent == 0 {
        (mantissa as i64, -14)
      } else {
        ((mantissa | 0b100_0000_0000) as i64, exponent as i64 - 15)
      };

    let magnitude = Rational::from(significand) * Rational::power_of_2(exponent - 10);
    if sign == 1 { -magnitude } else { magnitude }
  }
}

impl TryFrom<Half> for Rational {
  type Error = IsNonFinite;

  fn try_from(value: Half) -> Result<Self, Self::Error> {
    if value.is_finite() {
      Ok(value.into_rational_finite())
    } else {
      Err(IsNonFinite)
    }
  }
}

/// Check whether `half` is the truncation of the rational number `exact`, as prescribed for
/// narrowing to a half:
///
///   - If `|exact| >= 2^16`: `half` must be an infinity.
///   - Otherwise, `|half|` must be the largest half magnitude which is not greater than `|exact|`;
///     in particular, below 2<sup>-24</sup> it must be zero.
///
/// The sign of `half` is not checked (zero has two).
pub fn is_correct_truncated(exact: Rational, half: Half) -> bool {
  let exact = exact.abs();
  let magnitude = Half::from_bits(half.to_bits() & 0x7fff);

  if exact >= Rational::power_of_2(16_i64) {
    return magnitude.to_bits() == Half::INFINITY.to_bits()
  }
  let Ok(lower) = Rational::try_from(magnitude) else { return false };

  // The next pattern up is the next magnitude up; past `MAX` that is the overflow threshold.
  let upper =
    if magnitude.to_bits() == Half::MAX.to_bits() {
      Rational::power_of_2(16_i64)
    } else {
      match Rational::try_from(Half::from_bits(magnitude.to_bits() + 1)) {
        Ok(upper) => upper,
        Err(_) => return false,
      }
    };

  lower <= exact && exact < upper
}

/// A [proptest Strategy](proptest::strategy::Strategy) that yields any `f32` (of either sign)
/// whose magnitude is below 2<sup>16</sup>, i.e. that should not overflow when narrowed.
pub fn f32_below_overflow() -> impl proptest::strategy::Strategy<Value = f32> {
  use proptest::prelude::*;
  (
    any::<bool>(),
    0 .. 0x4780_0000_u32,
  ).prop_map(|(sign, abs)| f32::from_bits((u32::from(sign) << 31) | abs))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codec;
  use proptest::prelude::*;

  #[test]
  fn manual() {
    let cases = [
      (0x0000, Rational::from(0)),
      (0x3c00, Rational::from(1)),
      (0xc000, Rational::from(-2)),
      (0x3555, Rational::from_signeds(1365, 4096)),
      (0x7bff, Rational::from(65504)),
      (0x0001, Rational::power_of_2(-24_i64)),
      (0x8400, -Rational::power_of_2(-14_i64)),
    ];
    for (bits, exact) in cases {
      assert_eq!(Rational::try_from(Half::from_bits(bits)), Ok(exact), "{bits:#06x}")
    }
    assert_eq!(Rational::try_from(Half::INFINITY), Err(IsNonFinite));
    assert_eq!(Rational::try_from(Half::from_bits(0xfe00)), Err(IsNonFinite));
  }

  /// The codec's decode agrees with the obvious reading of the format, for every finite pattern.
  #[test]
  fn decode_exhaustive() {
    for h in Half::cases_exhaustive_finite() {
      let decoded = f32::from_bits(codec::decode(h.to_bits()));
      assert_eq!(Rational::try_from(decoded).ok(), Rational::try_from(h).ok(), "{h:?}")
    }
  }

  /// The finite patterns are strictly increasing as magnitudes, from `0x0000` to `0x7bff`.
  #[test]
  fn monotonic_exhaustive() {
    for bits in 0x0000 .. 0x7bff_u16 {
      let a = Rational::try_from(Half::from_bits(bits)).unwrap();
      let b = Rational::try_from(Half::from_bits(bits + 1)).unwrap();
      assert!(a < b, "{bits:#06x}")
    }
  }

  #[test]
  fn truncated_manual() {
    assert!(is_correct_truncated(Rational::from(1), Half::ONE));
    assert!(is_correct_truncated(Rational::from_signeds(39, 10), Half::from_bits(0x43cc)));
    assert!(!is_correct_truncated(Rational::from_signeds(39, 10), Half::from_bits(0x43cd)));
    assert!(is_correct_truncated(Rational::from(65535), Half::MAX));
    assert!(is_correct_truncated(Rational::from(65536), Half::INFINITY));
    assert!(!is_correct_truncated(Rational::from(65536), Half::MAX));
    assert!(is_correct_truncated(Rational::power_of_2(-25_i64), Half::NEG_ZERO));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn encode_proptest(x in f32_below_overflow()) {
      let half = Half::from_bits(codec::encode(x.to_bits()));
      assert!(is_correct_truncated(Rational::try_from(x).unwrap(), half), "{x:?}")
    }
  }
}
