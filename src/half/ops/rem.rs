use super::*;

impl Half {
  /// Remainder of the [integer views](Half#integer-view) of `self` and `other`, converted back to
  /// a half. The sign follows `self`, as for Rust's integer `%`.
  ///
  /// If the integer view of `other` is 0 there is no integer remainder; the result is then what
  /// `f32` gives for a remainder by zero, a NaN, which narrows to an infinity.
  pub(crate) fn rem<T: Operand>(self, other: T) -> Self {
    match self.to_int().checked_rem(other.to_int()) {
      Some(rem) => Self::from_f32(rem as f32),
      None => Self::from_f32(f32::NAN),
    }
  }

  /// The floating point remainder of `self / other`, computed in `f32` as
  /// `self - other * trunc(self / other)` and then narrowed.
  ///
  /// Unlike `%`, this keeps the fractional parts of both operands. If `self / other` is not
  /// finite (for example, `other` is zero) there is no integer quotient, and the result is a NaN,
  /// which narrows to an infinity.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let a = Half::from_f32(5.5);
  /// let b = Half::from_f32(2.0);
  /// assert_eq!(a.fmod(b).to_f32(), 1.5);
  /// assert_eq!((a % b).to_f32(), 1.0);
  /// ```
  pub fn fmod(self, other: Self) -> Self {
    let a = self.to_f32();
    let b = other.to_f32();
    let quotient = a / b;
    if !quotient.is_finite() {
      return Self::from_f32(f32::NAN)
    }
    // From 2^23 up every `f32` is an integer already, and it may not fit in an `i32`.
    let truncated =
      if quotient.abs() >= 8388608.0 { quotient } else { (quotient as i32) as f32 };
    Self::from_f32(a - b * truncated)
  }
}

use core::ops::{Rem, RemAssign};
super::mk_ops!{Rem, RemAssign, rem, rem_assign}
