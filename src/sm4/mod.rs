//! SM4 block cipher (GB/T 32907-2016): key schedule, single-block transform,
//! and a minimal ECB driver.

mod sm4_core;
mod sm4_ecb;

pub use sm4_core::*;
pub use sm4_ecb::*;

#[cfg(test)]
mod tests;
