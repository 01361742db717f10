use super::*;

/// Used to do value-to-value conversions that may *lose information*. It is the reciprocal of
/// [`LossyInto`].
///
/// The interface is identical to the standard [`From`], but for conversions that are _not
/// necessarily lossless_, unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from). Conversions
/// that *are* lossless (`Half` → `f32`, `Half` → `f64`) use [`From`] instead.
///
/// Many of the usage guidelines for [`From`] also apply to [`LossyFrom`]: if you do implement it
/// for your types, prefer implementing [`LossyFrom`] over [`LossyInto`] because implementing
/// [`LossyFrom`] automatically provides one with an implementation of [`LossyInto`], and prefer
/// using [`LossyInto`] over [`LossyFrom`] when specifying trait bounds on a generic function.
/// There's also a blanket implementation of `LossyFrom<T> for T`, and `LossyFrom<T> for U`
/// implies `LossyInto<U> for T`.
///
/// # Information loss
///
/// The conversions in this crate lose information in these ways:
///
///   - **Into a `Half`**: the value is first converted to `f32` (rounding to nearest, if it is an
///     `f64` or a wide integer), and then [truncated](crate::codec::encode) to a half, flushing
///     tiny values to zero and saturating big values and NaNs to infinity.
///   - **From a `Half` into an integer**: the value is truncated towards zero (the
///     [integer view](Half#integer-view)), and then wrapped into the target integer type as by an
///     `as` cast.
///
/// # Examples
///
/// ```
/// # use soft_half::*;
/// assert_eq!(Half::lossy_from(3.9_f32).to_bits(), 0x43cc);
/// assert_eq!(Half::lossy_from(100_000_u32), Half::INFINITY);
/// assert_eq!(i16::lossy_from(Half::from_f32(-7.5)), -7);
/// assert_eq!(u8::lossy_from(Half::from_f32(300.0)), 44);
/// ```
pub trait LossyFrom<T> {
  /// Converts to this type from the input type, possibly losing information.
  #[must_use]
  fn lossy_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *lose information*. It is the reciprocal of
/// [`LossyFrom`].
///
/// The interface is identical to the standard [`Into`], but for conversions that are _not
/// necessarily lossless_. See [`LossyFrom`] for which information is lost, and how.
///
/// # Examples
///
/// ```
/// # use soft_half::*;
/// let x: Half = 0.1_f64.lossy_into();
/// assert_eq!(x.to_bits(), 0x2e66);
///
/// let n: i64 = Half::from_f32(-1000.75).lossy_into();
/// assert_eq!(n, -1000);
/// ```
pub trait LossyInto<T> {
  /// Converts this type into the (usually inferred) input type, possibly losing information.
  #[must_use]
  fn lossy_into(self) -> T;
}

impl<T> LossyFrom<T> for T {
  fn lossy_from(value: T) -> Self {
    value
  }
}

impl<T, U> LossyInto<U> for T where U: LossyFrom<T> {
  fn lossy_into(self) -> U {
    U::lossy_from(self)
  }
}

mod float;
mod int;
