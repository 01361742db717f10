use super::*;

impl Half {
  pub(crate) fn div<T: Operand>(self, other: T) -> Self {
    self.round_trip(other, |a, b| a / b)
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
