#![cfg_attr(not(test), no_std)]
//! This crate provides a small, `no_std`, allocation-free software implementation of a
//! **half precision** (IEEE754 binary16) floating point type, [`Half`].
//!
//! # Introduction
//!
//! A [`Half`] is stored as 16 bits: 1 sign bit, 5 exponent bits (bias 15), and 10 mantissa bits.
//! It is meant as a *storage* format: for example, to pack vertex attributes or colours into
//! buffers handed over to a graphics pipeline, where [`Half::to_bits`] gives you the exact bit
//! layout expected on the other side.
//!
//! All arithmetic is done by widening to [`f32`], operating there, and narrowing back. The
//! narrowing (see [`codec::encode`]) is deliberately simple, and differs from IEEE754 in two
//! respects:
//!
//!   - It **truncates** the mantissa (rounds towards zero), rather than rounding to nearest, ties
//!     to even.
//!   - It maps **every NaN to an infinity** of the same sign.
//!
//! Everything else (subnormals, signed zeros, saturation to infinity on overflow, flush to zero on
//! underflow) behaves as you would expect.
//!
//! # Usage
//!
//! ```
//! use soft_half::{half, Half, LossyFrom, LossyInto};
//!
//! // Create halves from floats, ints, literals, strings, or a raw bit representation.
//! let a = Half::from_f32(2.5);
//! let b = Half::lossy_from(3_i32);
//! let c = half!(0.75);
//! let d: Half = "1.5".parse().unwrap();
//! let e = Half::from_bits(0x3c00);
//!
//! // Perform arithmetic and comparisons with the usual operators, also against plain numbers.
//! assert!(a + b == 5.5);
//! assert!(c < d && d > e);
//! assert_eq!((a * 2).to_bits(), 0x4500);
//!
//! // Convert back to floats, (truncated) ints, strings, or a raw bit representation.
//! assert_eq!(f32::from(a), 2.5);
//! assert_eq!(i32::lossy_from(Half::from_f32(3.9)), 3);
//! let n: u8 = d.lossy_into();
//! assert_eq!(n, 1);
//! assert_eq!(std::format!("{c}"), "0.75");
//! assert_eq!(Half::ONE.to_bits(), 0x3c00);
//! ```
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

pub mod codec;
mod half;
mod operand;

pub use half::Half;
pub use half::FloatingPointLike;
pub use half::convert::{LossyFrom, LossyInto};
pub use operand::{Operand, ShiftAmount};

/// Construct a [`Half`] from a float or integer literal, the same way as [`Half::from_f64`]
/// does. Usable in `const` contexts.
///
/// ```
/// # use soft_half::{half, Half};
/// const A: Half = half!(1.5);
/// const B: Half = half!(-2);
/// assert_eq!(A.to_bits(), 0x3e00);
/// assert_eq!(B.to_bits(), 0xc000);
/// ```
#[macro_export]
macro_rules! half {
  ($lit:literal) => {
    $crate::Half::from_f64($lit as f64)
  };
}

/// Number of cases for randomised tests.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1_0000} else {0x10_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
