use super::*;

use core::fmt::{Debug, Display, LowerExp, UpperExp, Formatter};
use core::num::ParseFloatError;
use core::str::FromStr;

impl Debug for Half {
  /// Show the raw pattern, with the sign, exponent and mantissa fields separated.
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let sign = self.0 >> 15;
    let exponent = (self.0 & Self::EXP_MASK) >> 10;
    let mantissa = self.0 & Self::MANTISSA_MASK;
    f.debug_tuple("Half")
      .field(&format_args!("0b{sign:b}_{exponent:05b}_{mantissa:010b}"))
      .finish()
  }
}

// The textual forms are those of the decoded `f32`, which holds the value exactly; the formatter's
// flags (precision, width, sign, etc) are honoured as they are for `f32`.

impl Display for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.to_f32(), f)
  }
}

impl LowerExp for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    LowerExp::fmt(&self.to_f32(), f)
  }
}

impl UpperExp for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    UpperExp::fmt(&self.to_f32(), f)
  }
}

impl FromStr for Half {
  type Err = ParseFloatError;

  /// Parse a string as an `f32`, with the same syntax as [`f32::from_str`], and convert it as
  /// [`Half::from_f32`] does.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!("1.5".parse::<Half>().unwrap().to_bits(), 0x3e00);
  /// assert_eq!("1e9".parse::<Half>().unwrap().to_bits(), Half::INFINITY.to_bits());
  /// assert!("one".parse::<Half>().is_err());
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<f32>().map(Self::from_f32)
  }
}
