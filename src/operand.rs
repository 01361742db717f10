//! The closed set of scalar types that can appear on the right hand side of an operator whose
//! left hand side is a [`Half`](crate::Half). These are hidden from the end-user, which only sees
//! the sealed [`Operand`] trait.

/// A scalar that can be combined with a [`Half`](crate::Half) in an arithmetic, bitwise, or
/// comparison operator: [`Half`](crate::Half), [`f32`], [`f64`], the primitive integers up to 64
/// bits, and shared references to any of these.
///
/// Each operator converts its operands either to `f32` (arithmetic, comparisons) or to an `i32`
/// integer view (remainder, bitwise), and the conversions used for each type are listed below.
///
/// | Type           | as `f32`                  | as integer view                  |
/// |----------------|---------------------------|----------------------------------|
/// | `Half`         | exact                     | [truncated](crate::Half#integer-view) |
/// | `f32`          | itself                    | truncated towards zero           |
/// | `f64`          | rounded to nearest        | truncated towards zero           |
/// | integers       | rounded to nearest        | wrapped to `i32`                 |
///
/// This is a *sealed* type.
pub trait Operand: Sealed {}

/// Actual conversions implemented here.
pub trait Sealed: Copy {
  /// The value as an `f32`, as used by the round trip operators.
  fn to_f32(self) -> f32;

  /// The value as an integer, as used by `%` and the bitwise operators.
  fn to_int(self) -> i32;
}

impl Operand for crate::Half {}

impl Sealed for crate::Half {
  #[inline]
  fn to_f32(self) -> f32 {
    crate::Half::to_f32(self)
  }

  #[inline]
  fn to_int(self) -> i32 {
    crate::Half::to_int(self)
  }
}

impl<T: Operand> Operand for &T {}

impl<T: Sealed> Sealed for &T {
  #[inline]
  fn to_f32(self) -> f32 {
    (*self).to_f32()
  }

  #[inline]
  fn to_int(self) -> i32 {
    (*self).to_int()
  }
}

macro_rules! impl_scalar {
  ($($t:ty),*) => {$(
    impl Operand for $t {}

    impl Sealed for $t {
      #[inline]
      fn to_f32(self) -> f32 {
        self as f32
      }

      #[inline]
      fn to_int(self) -> i32 {
        self as i32
      }
    }
  )*}
}

impl_scalar!{f32, f64}
impl_scalar!{i8, i16, i32, i64, isize, u8, u16, u32, u64, usize}

/// A primitive integer (or a shared reference to one) that can be the amount in a `<<` or `>>`
/// on a [`Half`](crate::Half).
///
/// This is a *sealed* type.
pub trait ShiftAmount: ShiftSealed {}

/// Actual conversion implemented here.
pub trait ShiftSealed: Copy {
  /// The amount as an `i64`; unsigned amounts too large for it saturate to `i64::MAX`.
  fn to_shift(self) -> i64;
}

impl<T: ShiftAmount> ShiftAmount for &T {}

impl<T: ShiftSealed> ShiftSealed for &T {
  #[inline]
  fn to_shift(self) -> i64 {
    (*self).to_shift()
  }
}

macro_rules! impl_shift {
  ($($t:ty),*) => {$(
    impl ShiftAmount for $t {}

    impl ShiftSealed for $t {
      #[inline]
      fn to_shift(self) -> i64 {
        i64::try_from(self).unwrap_or(i64::MAX)
      }
    }
  )*}
}

impl_shift!{i8, i16, i32, i64, isize, u8, u16, u32, u64, usize}
