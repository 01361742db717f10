use super::*;

macro_rules! make_impl {
  ($($int:ty),*) => {$(
    impl LossyFrom<$int> for Half {
      #[doc = concat!("Convert an `", stringify!($int), "` into a `Half`, by rounding it to the nearest `f32` and then truncating that as [`Half::from_f32`] does.")]
      ///
      /// Magnitudes of 65536 or more become a signed infinity; 65505 to 65535 become
      /// [`Half::MAX`].
      #[inline]
      fn lossy_from(value: $int) -> Self {
        Half::from_f32(value as f32)
      }
    }

    impl LossyFrom<Half> for $int {
      #[doc = concat!("Convert a `Half` into an `", stringify!($int), "`, truncating it towards zero (see [integer view](Half#integer-view)) and then wrapping it as an `as` cast would.")]
      #[inline]
      fn lossy_from(value: Half) -> Self {
        value.to_int() as $int
      }
    }
  )*}
}

make_impl!{i8, i16, i32, i64, isize}
make_impl!{u8, u16, u32, u64, usize}
