use super::*;
use crate::operand::{Operand, Sealed};

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Remainder (`%`) on the integer view, and `fmod` on the `f32` round trip.
mod rem;

/// Bitwise `&`, `|`, `^` on the integer view.
mod bit;

/// Shifts, as multiplication or division by powers of two.
mod shift;

impl Half {
  /// The round trip: decode `self` and `other` to `f32`, combine them with `op`, and encode the
  /// result.
  #[inline]
  pub(crate) fn round_trip<T: Operand>(self, other: T, op: impl FnOnce(f32, f32) -> f32) -> Self {
    Self::from_f32(op(self.to_f32(), other.to_f32()))
  }
}

/// Helper macro for implementing operators, taking any [`Operand`] on the right, for `Half` and
/// `&Half` on the left, plus the compound assignment form.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<T: crate::Operand>
    $trait<T> for Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: T) -> Self::Output { self.$name(rhs) }
    }

    impl<T: crate::Operand>
    $trait<T> for &Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: T) -> Self::Output { (*self).$name(rhs) }
    }

    impl<T: crate::Operand>
    $trait_assign<T> for Half {
      #[inline]
      fn $name_assign(&mut self, rhs: T) { *self = self.$name(rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator on the `f32` round trip.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Half;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = Half::ONE;
      let mut b = Half::NEG_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      let _ = a $op 2.5_f32;
      let _ = a $op 2.5_f64;
      let _ = a $op 3_u8;
      let _ = &a $op &7_i64;
      a $op_assign b;
      b $op_assign &a;
      a $op_assign 1.5;
      b $op_assign 4;
    }

    /// Aux function: check that `a $op b` is the encoding of the `f32` result.
    ///
    /// The sign of a NaN produced by the FPU is unspecified, so if the `f32` result is NaN we only
    /// check that we got an infinity.
    fn is_round_trip<T: crate::Operand>(a: Half, b: T) -> bool {
      use crate::operand::Sealed;
      let exact = a.to_f32() $op Sealed::to_f32(b);
      let expected = Half::from_f32(exact);
      let by_value = a $op b;
      let by_ref = &a $op b;
      let mut assigned = a;
      assigned $op_assign b;
      [by_value, by_ref, assigned].iter().all(|h|
        if exact.is_nan() { h.is_infinite() } else { h.to_bits() == expected.to_bits() }
      )
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn half_proptest(a in Half::cases_proptest(), b in Half::cases_proptest()) {
        assert!(is_round_trip(a, b), "{:?} ⋅ {:?}", a, b)
      }

      #[test]
      fn f32_proptest(a in Half::cases_proptest_finite(), b: f32) {
        assert!(is_round_trip(a, b), "{:?} ⋅ {:?}", a, b)
      }

      #[test]
      fn i32_proptest(a in Half::cases_proptest_finite(), b: i32) {
        assert!(is_round_trip(a, b), "{:?} ⋅ {:?}", a, b)
      }
    }

    /// Every half against a handful of fixed right hand sides.
    #[test]
    fn exhaustive() {
      let rhs = [Half::ONE, Half::NEG_ZERO, Half::MAX, Half::MIN_POSITIVE_SUBNORMAL, Half::EPSILON];
      for a in Half::cases_exhaustive() {
        for b in rhs {
          assert!(is_round_trip(a, b), "{:?} ⋅ {:?}", a, b)
        }
      }
    }
  }
}

pub(crate) use mk_tests;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip() {
    let x = Half::from_f32(1.5).round_trip(Half::from_f32(2.25), |a, b| a * b);
    assert_eq!(x.to_f32(), 3.375);
    let y = Half::ONE.round_trip(3_u32, f32::max);
    assert_eq!(y.to_f32(), 3.0);
  }

  #[test]
  fn operand_sealed() {
    assert_eq!(Sealed::to_f32(&&Half::EPSILON), 9.765625e-4);
  }
}
