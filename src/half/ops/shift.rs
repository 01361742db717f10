use super::*;

/// Shifting a half by more than this many places in either direction always ends up at zero or
/// infinity (or stays there), since all finite halves are within 2^-24 and 2^16.
const MAX_SHIFT: i64 = 64;

/// 2<sup>`n`</sup> as an `f32`, for `0 <= n <= 127`.
const fn exp2(n: u32) -> f32 {
  f32::from_bits((n + 127) << 23)
}

impl Half {
  /// Multiply `self` by 2<sup>`n`</sup> in `f32` (i.e. divide by 2<sup>`-n`</sup> if `n` is
  /// negative), and narrow the result.
  pub(crate) fn scale(self, n: i64) -> Self {
    let n = n.clamp(-MAX_SHIFT, MAX_SHIFT);
    let x = self.to_f32();
    let scaled =
      if n >= 0 {
        x * exp2(n as u32)
      } else {
        x / exp2(n.unsigned_abs() as u32)
      };
    Self::from_f32(scaled)
  }
}

use crate::operand::{ShiftAmount, ShiftSealed};
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

// `half << n` multiplies by 2^n, and `half >> n` divides by 2^n, in `f32`. These never touch the
// bit pattern directly. A negative `n` shifts the other way.

impl<N: ShiftAmount>
Shl<N> for Half {
  type Output = Half;

  #[inline]
  fn shl(self, rhs: N) -> Self::Output { self.scale(rhs.to_shift()) }
}

impl<N: ShiftAmount>
Shl<N> for &Half {
  type Output = Half;

  #[inline]
  fn shl(self, rhs: N) -> Self::Output { (*self).scale(rhs.to_shift()) }
}

impl<N: ShiftAmount>
ShlAssign<N> for Half {
  #[inline]
  fn shl_assign(&mut self, rhs: N) { *self = self.scale(rhs.to_shift()) }
}

impl<N: ShiftAmount>
Shr<N> for Half {
  type Output = Half;

  #[inline]
  fn shr(self, rhs: N) -> Self::Output { self.scale(rhs.to_shift().saturating_neg()) }
}

impl<N: ShiftAmount>
Shr<N> for &Half {
  type Output = Half;

  #[inline]
  fn shr(self, rhs: N) -> Self::Output { (*self).scale(rhs.to_shift().saturating_neg()) }
}

impl<N: ShiftAmount>
ShrAssign<N> for Half {
  #[inline]
  fn shr_assign(&mut self, rhs: N) { *self = self.scale(rhs.to_shift().saturating_neg()) }
}
