//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{codec, Half};

impl Half {
  pub fn bench_to_int(self) -> i32 {
    self.to_int()
  }

  pub fn bench_add(self, other: Half) -> Half {
    self.add(other)
  }

  pub fn bench_rem(self, other: Half) -> Half {
    self.rem(other)
  }

  pub fn bench_scale(self, n: i64) -> Half {
    self.scale(n)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn half_encode(bits: u32) -> u16 {
  codec::encode(bits)
}

#[unsafe(no_mangle)]
pub fn half_decode(half: u16) -> u32 {
  codec::decode(half)
}

#[unsafe(no_mangle)]
pub fn half_to_int(x: Half) -> i32 {
  x.to_int()
}

#[unsafe(no_mangle)]
pub fn half_add(x: Half, y: Half) -> Half {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn half_mul(x: Half, y: Half) -> Half {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn half_div(x: Half, y: Half) -> Half {
  x.div(y)
}

#[unsafe(no_mangle)]
pub fn half_rem(x: Half, y: Half) -> Half {
  x.rem(y)
}
