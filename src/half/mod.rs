//! This module and its submodules contain the [`Half`] type: a binary16 value whose every
//! operation goes through the [codec](crate::codec).
//!
//! Some notation used in the comments:
//!
//!   - **Pattern**: the raw 16 bits stored in a `Half`.
//!   - **Round trip**: decode both operands to `f32`, do the operation in `f32`, encode the
//!     result. Every operator except the integer extraction and the raw accessors works this way,
//!     so each step re-quantizes to half precision and errors compound over chained operations.
//!   - **Integer view**: the value truncated towards zero to an `i32`, computed straight from the
//!     pattern without going through `f32` (see [the `Half` docs](Half#integer-view)).

/// A half precision (IEEE754 binary16) floating point number: `[sign:1][exponent:5][mantissa:10]`.
///
/// All 65536 bit patterns are valid values. Note that, because comparisons follow IEEE754
/// semantics through `f32`, `Half` is [`PartialEq`] and [`PartialOrd`] but neither [`Eq`] nor
/// [`Ord`]; compare [`Half::to_bits`] if you need identity.
///
/// ```
/// # use soft_half::Half;
/// let x = Half::from_f32(0.1);
/// assert_eq!(x.to_bits(), 0x2e66);
/// assert_eq!(x.to_f32(), 0.099975586);
/// ```
///
/// # Integer view
///
/// The remainder (`%`), the bitwise operators, and the conversions into integer types all work on
/// the *integer view* of a half: its value truncated towards zero, as an `i32`.
///
/// This does **not** go through `f32`; it is computed straight from the fields of the pattern.
/// If the unbiased exponent is negative the magnitude is below 1, and the result is 0. Otherwise
/// the significand (mantissa with the hidden bit) is shifted so that only the integer part
/// remains.
///
/// For finite values this is the same as `x.to_f32() as i32`. Infinities and NaNs, whose exponent
/// field is 31, are treated as if it were a regular exponent of 16: infinity gives `±65536`, and a
/// NaN gives `±65536` plus its payload shifted left by 6.
///
/// ```
/// # use soft_half::{Half, LossyFrom};
/// let x = Half::from_f32(-3.75);
/// assert_eq!(i32::lossy_from(x), -3);
/// assert_eq!((x % 2).to_f32(), -1.0);
/// assert_eq!((Half::from_f32(6.5) & 3_u8).to_f32(), 2.0);
/// assert_eq!(i64::lossy_from(Half::INFINITY), 65536);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Half(u16);

/// Raw accessors, construction, field extraction, classification.
mod basics;

/// Constants (zero, max, min_positive, etc).
mod consts;

/// Trait impls: `Default`, and the [`FloatingPointLike`] capability trait.
mod traits;

/// Conversions to and from floats and ints.
pub(crate) mod convert;

/// Binary operators: arithmetic, remainder, bitwise, shifts.
mod ops;

/// Comparisons.
mod cmp;

/// Unary operators, increment and decrement.
mod unary;

/// Debug, Display, and parsing.
mod fmt;


/// Exact reference values, for testing.
#[cfg(test)]
mod rational;

pub use traits::FloatingPointLike;
