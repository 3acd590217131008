//! Structured error types for the SM4 block cipher.
//!
//! SM4 has exactly two failure modes: a key that is not 16 bytes long, and
//! ECB input that is not a multiple of the 16-byte block size. Both are
//! reported at the call boundary before any computation takes place.
//!
//! SM3 has no corresponding error type: any byte sequence, including the
//! empty one, is a valid message, so `sm3_hash` never fails.

use thiserror::Error;

/// Errors raised by the SM4 key schedule and ECB driver.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Sm4Error {
    /// The supplied key was not exactly 16 bytes (128 bits) long.
    #[error("invalid SM4 key length: expected 16 bytes, got {actual}")]
    InvalidKeyLength { actual: usize },

    /// The ECB input length was not a multiple of the 16-byte block size.
    #[error("invalid SM4 block alignment: length {actual} is not a multiple of 16")]
    InvalidBlockAlignment { actual: usize },
}
