//! # guomi
//!
//! A Rust-based software library for two Chinese national cryptographic
//! primitives: the SM4 block cipher (GB/T 32907-2016) and the SM3
//! cryptographic hash function (GB/T 32905-2016). Both are common building
//! blocks for interoperability with Chinese commercial cryptography
//! standards.
//!
//! This crate covers the algorithmic kernel of each primitive plus a
//! minimal ECB-mode driver for SM4:
//!
//! - [`sm4`]: key schedule, single-block encrypt/decrypt, and ECB mode.
//! - [`sm3`]: message padding, expansion, compression, and the `sm3_hash`
//!   entry point.
//!
//! # Scope
//!
//! This is a kernel library. Block-cipher modes beyond single-block ECB
//! (CBC, CTR, GCM, XTS), padding schemes, streaming/incremental hashing,
//! HMAC-SM3, key-derivation functions, side-channel hardening, and SIMD
//! acceleration are all out of scope — acceptable extensions to layer on
//! top, but not provided here. This crate defines no key storage, no random
//! key generation, no authenticated encryption, and no network protocol: it
//! exposes deterministic, in-memory byte-array transforms only.
//!
//! # Example
//!
//! ```
//! use guomi::sm3::sm3_hash;
//! use guomi::sm4::{sm4_enc_ecb, Sm4Key};
//!
//! let key: [u8; 16] = *b"Very secret key.";
//! let sm4 = Sm4Key::new(&key).expect("key must be 16 bytes");
//! let ciphertext = sm4_enc_ecb(&sm4, b"Example payload!").expect("block-aligned input");
//!
//! let digest = sm3_hash(&ciphertext);
//! assert_eq!(digest.len(), 32);
//! ```

pub mod error;
pub mod sm3;
pub mod sm4;

pub use error::Sm4Error;
