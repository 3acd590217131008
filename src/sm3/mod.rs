//! SM3 cryptographic hash function (GB/T 32905-2016): message padding,
//! message expansion, and the 64-step compression function.

mod sm3_core;

pub use sm3_core::*;
