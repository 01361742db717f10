use super::*;

impl Half {
  pub(crate) fn mul<T: Operand>(self, other: T) -> Self {
    self.round_trip(other, |a, b| a * b)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
