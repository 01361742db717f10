use super::*;

impl Half {
  /// Apply `op` to the [integer views](Half#integer-view) of `self` and `other`, both truncated
  /// to 16 bits, and convert the result back to a half.
  #[inline]
  fn bitwise<T: Operand>(self, other: T, op: impl FnOnce(u16, u16) -> u16) -> Self {
    let result = op(self.to_int() as u16, other.to_int() as u16);
    Self::from_f32(f32::from(result))
  }

  pub(crate) fn bitand<T: Operand>(self, other: T) -> Self {
    self.bitwise(other, |a, b| a & b)
  }

  pub(crate) fn bitor<T: Operand>(self, other: T) -> Self {
    self.bitwise(other, |a, b| a | b)
  }

  pub(crate) fn bitxor<T: Operand>(self, other: T) -> Self {
    self.bitwise(other, |a, b| a ^ b)
  }
}

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
super::mk_ops!{BitAnd, BitAndAssign, bitand, bitand_assign}
super::mk_ops!{BitOr, BitOrAssign, bitor, bitor_assign}
super::mk_ops!{BitXor, BitXorAssign, bitxor, bitxor_assign}
