use super::*;

impl Half {
  /// Return the negation of `self`, computed on the `f32` round trip.
  ///
  /// For every pattern except the NaNs this is the same as flipping the sign bit. A NaN pattern,
  /// like every NaN on the way back from `f32`, becomes an infinity (of the opposite sign).
  #[inline]
  pub(crate) fn neg(self) -> Self {
    Self::from_f32(-self.to_f32())
  }

  /// Bitwise complement of the [integer view](Half#integer-view), truncated to 16 bits, converted
  /// back to a half.
  #[inline]
  pub(crate) fn not(self) -> Self {
    Self::from_f32(f32::from(!(self.to_int() as u16)))
  }

  /// Logical negation: [one](Self::ONE) if the [integer view](Half#integer-view) of `self` is
  /// zero (which is the case for every magnitude below 1), [zero](Self::ZERO) otherwise.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::ZERO.logical_not(), Half::ONE);
  /// assert_eq!(Half::from_f32(0.5).logical_not(), Half::ONE);
  /// assert_eq!(Half::from_f32(-3.0).logical_not(), Half::ZERO);
  /// ```
  #[inline]
  pub fn logical_not(self) -> Self {
    if self.to_int() == 0 { Self::ONE } else { Self::ZERO }
  }

  /// Add one to `self` in place, and return the new value.
  ///
  /// Like any other addition this is re-encoded, so from 2048 up (where consecutive halves are
  /// more than 1 apart) incrementing leaves `self` unchanged.
  #[inline]
  pub fn increment(&mut self) -> Self {
    *self += 1.0_f32;
    *self
  }

  /// Subtract one from `self` in place, and return the new value.
  #[inline]
  pub fn decrement(&mut self) -> Self {
    *self -= 1.0_f32;
    *self
  }

  /// Add one to `self` in place, and return the value it had before.
  #[inline]
  pub fn post_increment(&mut self) -> Self {
    let old = *self;
    *self += 1.0_f32;
    old
  }

  /// Subtract one from `self` in place, and return the value it had before.
  #[inline]
  pub fn post_decrement(&mut self) -> Self {
    let old = *self;
    *self -= 1.0_f32;
    old
  }
}

use core::ops::{Neg, Not};

impl Neg for Half {
  type Output = Half;

  #[inline]
  fn neg(self) -> Self::Output { Half::neg(self) }
}

impl Neg for &Half {
  type Output = Half;

  #[inline]
  fn neg(self) -> Self::Output { Half::neg(*self) }
}

impl Not for Half {
  type Output = Half;

  #[inline]
  fn not(self) -> Self::Output { Half::not(self) }
}

impl Not for &Half {
  type Output = Half;

  #[inline]
  fn not(self) -> Self::Output { Half::not(*self) }
}
