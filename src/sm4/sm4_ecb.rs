//! SM4 Encryption and Decryption in ECB Mode
//!
//! This module provides functionality for encrypting and decrypting data
//! using SM4 in Electronic Codebook (ECB) mode. No padding scheme is
//! offered here: padding is explicitly out of scope for this crate (see
//! the crate-level documentation), so callers must supply already
//! block-aligned data.
//!
//! ECB mode operates on fixed-size 16-byte blocks independently and is one
//! of the simplest modes of operation. It is not recommended for encrypting
//! large volumes of data or data with repeating patterns, since identical
//! plaintext blocks always encrypt to identical ciphertext blocks.
//!
//! # Example
//!
//! ```
//! use guomi::sm4::{sm4_dec_ecb, sm4_enc_ecb, Sm4Key};
//!
//! let key: [u8; 16] = [
//!     0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98,
//!     0x76, 0x54, 0x32, 0x10,
//! ];
//! let sm4 = Sm4Key::new(&key).expect("construction failed");
//! let plaintext = [0u8; 32];
//!
//! let ciphertext = sm4_enc_ecb(&sm4, &plaintext).expect("encryption failed");
//! let decrypted = sm4_dec_ecb(&sm4, &ciphertext).expect("decryption failed");
//!
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! # Disclaimer
//!
//! ECB mode does not provide serious confidentiality for most workloads, as
//! it uses no initialization vector and leaks repeated plaintext structure.
//! It is offered here purely as the minimal single-block driver this crate
//! aims to cover; applications requiring real confidentiality guarantees
//! should layer a stronger mode (CBC, CTR, GCM) on top of the block
//! primitives exposed by this crate.

use super::sm4_core::{Sm4Key, SM4_BLOCK_SIZE};
use crate::error::Sm4Error;

/// Encrypt `plaintext` using SM4 in ECB mode.
///
/// `plaintext` must be a multiple of [`SM4_BLOCK_SIZE`] bytes; no padding is
/// applied. Zero-length input is accepted and returns an empty `Vec`.
///
/// # Errors
///
/// Returns [`Sm4Error::InvalidBlockAlignment`] if `plaintext.len()` is not a
/// multiple of 16.
pub fn sm4_enc_ecb(key: &Sm4Key, plaintext: &[u8]) -> Result<Vec<u8>, Sm4Error> {
    if plaintext.len() % SM4_BLOCK_SIZE != 0 {
        return Err(Sm4Error::InvalidBlockAlignment {
            actual: plaintext.len(),
        });
    }

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for block in plaintext.chunks(SM4_BLOCK_SIZE) {
        let block: [u8; SM4_BLOCK_SIZE] = block.try_into().expect("chunk is exactly block-sized");
        ciphertext.extend_from_slice(&key.encrypt_block(&block));
    }

    Ok(ciphertext)
}

/// Decrypt `ciphertext` using SM4 in ECB mode.
///
/// `ciphertext` must be a multiple of [`SM4_BLOCK_SIZE`] bytes. Zero-length
/// input is accepted and returns an empty `Vec`.
///
/// # Errors
///
/// Returns [`Sm4Error::InvalidBlockAlignment`] if `ciphertext.len()` is not a
/// multiple of 16.
pub fn sm4_dec_ecb(key: &Sm4Key, ciphertext: &[u8]) -> Result<Vec<u8>, Sm4Error> {
    if ciphertext.len() % SM4_BLOCK_SIZE != 0 {
        return Err(Sm4Error::InvalidBlockAlignment {
            actual: ciphertext.len(),
        });
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks(SM4_BLOCK_SIZE) {
        let block: [u8; SM4_BLOCK_SIZE] = block.try_into().expect("chunk is exactly block-sized");
        plaintext.extend_from_slice(&key.decrypt_block(&block));
    }

    Ok(plaintext)
}
