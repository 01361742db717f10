use super::*;
use crate::operand::{Operand, Sealed};
use core::cmp::Ordering;

// Comparisons always go through `f32`, so they follow IEEE754: `-0.0 == +0.0`, and NaN patterns
// (only ever obtained through `from_bits`) are unordered, even with themselves.

impl<T: Operand>
PartialEq<T> for Half {
  #[inline]
  fn eq(&self, other: &T) -> bool {
    self.to_f32() == other.to_f32()
  }
}

impl<T: Operand>
PartialOrd<T> for Half {
  #[inline]
  fn partial_cmp(&self, other: &T) -> Option<Ordering> {
    self.to_f32().partial_cmp(&other.to_f32())
  }
}

macro_rules! mk_cmp_rev {
  ($($float:ty),*) => {$(
    impl PartialEq<Half> for $float {
      #[inline]
      fn eq(&self, other: &Half) -> bool {
        other == self
      }
    }

    impl PartialOrd<Half> for $float {
      #[inline]
      fn partial_cmp(&self, other: &Half) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
      }
    }
  )*}
}

mk_cmp_rev!{f32, f64}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn eq() {
    assert!(Half::ONE == Half::from_f32(1.0));
    assert!(Half::ONE == 1);
    assert!(Half::ONE == 1.0_f32);
    assert!(Half::ONE == &1.0_f64);
    assert!(1.0_f32 == Half::ONE);
    assert!(Half::ONE != Half::EPSILON);
    assert!(Half::from_f32(0.1) != 0.1_f32);
    assert!(Half::from_f32(0.1) == 0.0999755859375_f64);
  }

  #[test]
  fn zeros() {
    assert!(Half::ZERO == Half::NEG_ZERO);
    assert!(!(Half::ZERO < Half::NEG_ZERO));
    assert_ne!(Half::ZERO.to_bits(), Half::NEG_ZERO.to_bits());
  }

  #[test]
  fn nan() {
    let nan = Half::from_bits(0x7e00);
    assert!(nan != nan);
    assert!(!(nan < Half::ONE) && !(nan >= Half::ONE));
    assert_eq!(nan.partial_cmp(&Half::ONE), None);
    assert_eq!(nan.partial_cmp(&f32::NAN), None);
  }

  #[test]
  fn order() {
    assert!(Half::MIN < Half::NEG_ONE);
    assert!(Half::NEG_ONE < Half::ZERO);
    assert!(Half::MIN_POSITIVE_SUBNORMAL > 0);
    assert!(Half::MAX < Half::INFINITY);
    assert!(Half::NEG_INFINITY < Half::MIN);
    assert!(Half::MAX <= 65504);
    assert!(Half::MAX >= 65504_u32);
    assert!(2.0_f64 > Half::ONE);
    assert_eq!(Half::ONE.partial_cmp(&2_u8), Some(Ordering::Less));
    assert_eq!(3.0_f32.partial_cmp(&Half::ONE), Some(Ordering::Greater));
  }

  /// Non-negative finite patterns are in the same order as their values.
  #[test]
  fn ordered_exhaustive() {
    for bits in 0x0000 .. Half::MAX.to_bits() {
      let (a, b) = (Half::from_bits(bits), Half::from_bits(bits + 1));
      assert!(a < b, "{a:?} < {b:?}");
      assert!(-b < -a, "{a:?} < {b:?}");
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn proptest(a in Half::cases_proptest(), b in Half::cases_proptest()) {
      assert_eq!(a.partial_cmp(&b), a.to_f32().partial_cmp(&b.to_f32()));
      assert_eq!(a == b, a.to_f32() == b.to_f32());
    }

    /// Any two representable non-negative values keep their order after conversion.
    #[test]
    fn monotonic_proptest(a in 0_u16 ..= 0x7bff, b in 0_u16 ..= 0x7bff) {
      let (x, y) = (Half::from_bits(a).to_f32(), Half::from_bits(b).to_f32());
      assert_eq!(Half::from_f32(x) < Half::from_f32(y), x < y);
    }
  }
}
