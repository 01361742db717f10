use super::*;

impl Half {
  pub(crate) fn add<T: Operand>(self, other: T) -> Self {
    self.round_trip(other, |a, b| a + b)
  }

  pub(crate) fn sub<T: Operand>(self, other: T) -> Self {
    self.round_trip(other, |a, b| a - b)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
