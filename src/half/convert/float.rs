use super::*;

impl LossyFrom<f32> for Half {
  /// Convert an `f32` into a `Half`, as [`Half::from_f32`]:
  ///
  ///   - The mantissa is truncated to 10 bits (no rounding to nearest).
  ///   - Magnitudes below 2<sup>-24</sup> become a signed zero.
  ///   - Magnitudes of 2<sup>16</sup> or more, infinities, and NaNs become a signed infinity.
  #[inline]
  fn lossy_from(value: f32) -> Self {
    Half::from_f32(value)
  }
}

impl LossyFrom<f64> for Half {
  /// Convert an `f64` into a `Half`, by rounding it to the nearest `f32` first, and then
  /// converting as [`Half::from_f32`] does.
  #[inline]
  fn lossy_from(value: f64) -> Self {
    Half::from_f64(value)
  }
}

impl From<Half> for f32 {
  /// Convert a `Half` into the `f32` with exactly the same value. NaN payloads are kept.
  #[inline]
  fn from(value: Half) -> Self {
    value.to_f32()
  }
}

impl From<Half> for f64 {
  /// Convert a `Half` into the `f64` with exactly the same value.
  #[inline]
  fn from(value: Half) -> Self {
    f64::from(value.to_f32())
  }
}
