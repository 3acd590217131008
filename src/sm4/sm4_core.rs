//! SM4 Core Implementation
//!
//! This module provides the core functionalities of the SM4 block cipher
//! (GB/T 32907-2016): the key schedule and the 32-round Feistel-like block
//! transform. It includes implementations for both encryption and decryption
//! along with the necessary auxiliary functions.
//!
//! The implementation follows a software-based approach, primarily utilizing
//! a lookup table for the S-box substitution. While the method ensures
//! accuracy, it is not hardened against side-channel analysis (no
//! constant-time S-box lookup is attempted here).
//!
//! # Features
//!
//! - Supports the single SM4 key size: 128 bits (16 bytes).
//! - Implements the key expansion routine that derives 32 round keys from
//!   the 16-byte cipher key.
//! - Provides the round function and its composite transforms:
//!     - `tau` / `tau_prime` for the S-box substitution step used by
//!       encryption/decryption and key expansion respectively.
//!     - `l` / `l_prime` for the linear mixing step used by
//!       encryption/decryption and key expansion respectively.
//! - Exposes `Sm4Key`, an immutable, constructed-once key schedule that can
//!   encrypt or decrypt any number of 16-byte blocks.
//!
//! # Usage
//!
//! This module handles only the core single-block transform. Splitting a
//! longer message into blocks and assembling the result is the
//! responsibility of [`super::sm4_ecb`].
//!
//! # Examples
//!
//! ```
//! use guomi::sm4::Sm4Key;
//!
//! // GB/T 32907-2016 standard test vector.
//! let key: [u8; 16] = [
//!     0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98,
//!     0x76, 0x54, 0x32, 0x10,
//! ];
//! let plaintext = key;
//! let expected_ciphertext: [u8; 16] = [
//!     0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f,
//!     0x53, 0x6e, 0x42, 0x46,
//! ];
//!
//! let sm4 = Sm4Key::new(&key).expect("construction failed");
//! let ciphertext = sm4.encrypt_block(&plaintext);
//! assert_eq!(ciphertext, expected_ciphertext);
//!
//! let decrypted = sm4.decrypt_block(&ciphertext);
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! # Notes
//! - The test vectors used in unit tests are sourced from GB/T 32907-2016.
//! - Round keys are stored in a fixed `[u32; 32]` array, one word per round,
//!   rather than as raw key-schedule bytes.

use crate::error::Sm4Error;

/// SM4 block size is fixed at 16 bytes (128 bits).
pub const SM4_BLOCK_SIZE: usize = 16;

/// SM4 key size is fixed at 16 bytes (128 bits).
pub const SM4_KEY_SIZE: usize = 16;

/// Number of rounds in the SM4 block transform.
const ROUNDS: usize = 32;

/// The S-box is the single non-linear substitution table used throughout
/// SM4, both in the round function and in key expansion.
///
/// Note: these values are specified byte-for-byte by GB/T 32907-2016.
#[rustfmt::skip]
const SBOX: [u8; 256] = [
    0xd6, 0x90, 0xe9, 0xfe, 0xcc, 0xe1, 0x3d, 0xb7, 0x16, 0xb6, 0x14, 0xc2, 0x28, 0xfb, 0x2c, 0x05,
    0x2b, 0x67, 0x9a, 0x76, 0x2a, 0xbe, 0x04, 0xc3, 0xaa, 0x44, 0x13, 0x26, 0x49, 0x86, 0x06, 0x99,
    0x9c, 0x42, 0x50, 0xf4, 0x91, 0xef, 0x98, 0x7a, 0x33, 0x54, 0x0b, 0x43, 0xed, 0xcf, 0xac, 0x62,
    0xe4, 0xb3, 0x1c, 0xa9, 0xc9, 0x08, 0xe8, 0x95, 0x80, 0xdf, 0x94, 0xfa, 0x75, 0x8f, 0x3f, 0xa6,
    0x47, 0x07, 0xa7, 0xfc, 0xf3, 0x73, 0x17, 0xba, 0x83, 0x59, 0x3c, 0x19, 0xe6, 0x85, 0x4f, 0xa8,
    0x68, 0x6b, 0x81, 0xb2, 0x71, 0x64, 0xda, 0x8b, 0xf8, 0xeb, 0x0f, 0x4b, 0x70, 0x56, 0x9d, 0x35,
    0x1e, 0x24, 0x0e, 0x5e, 0x63, 0x58, 0xd1, 0xa2, 0x25, 0x22, 0x7c, 0x3b, 0x01, 0x21, 0x78, 0x87,
    0xd4, 0x00, 0x46, 0x57, 0x9f, 0xd3, 0x27, 0x52, 0x4c, 0x36, 0x02, 0xe7, 0xa0, 0xc4, 0xc8, 0x9e,
    0xea, 0xbf, 0x8a, 0xd2, 0x40, 0xc7, 0x38, 0xb5, 0xa3, 0xf7, 0xf2, 0xce, 0xf9, 0x61, 0x15, 0xa1,
    0xe0, 0xae, 0x5d, 0xa4, 0x9b, 0x34, 0x1a, 0x55, 0xad, 0x93, 0x32, 0x30, 0xf5, 0x8c, 0xb1, 0xe3,
    0x1d, 0xf6, 0xe2, 0x2e, 0x82, 0x66, 0xca, 0x60, 0xc0, 0x29, 0x23, 0xab, 0x0d, 0x53, 0x4e, 0x6f,
    0xd5, 0xdb, 0x37, 0x45, 0xde, 0xfd, 0x8e, 0x2f, 0x03, 0xff, 0x6a, 0x72, 0x6d, 0x6c, 0x5b, 0x51,
    0x8d, 0x1b, 0xaf, 0x92, 0xbb, 0xdd, 0xbc, 0x7f, 0x11, 0xd9, 0x5c, 0x41, 0x1f, 0x10, 0x5a, 0xd8,
    0x0a, 0xc1, 0x31, 0x88, 0xa5, 0xcd, 0x7b, 0xbd, 0x2d, 0x74, 0xd0, 0x12, 0xb8, 0xe5, 0xb4, 0xb0,
    0x89, 0x69, 0x97, 0x4a, 0x0c, 0x96, 0x77, 0x7e, 0x65, 0xb9, 0xf1, 0x09, 0xc5, 0x6e, 0xc6, 0x84,
    0x18, 0xf0, 0x7d, 0xec, 0x3a, 0xdc, 0x4d, 0x20, 0x79, 0xee, 0x5f, 0x3e, 0xd7, 0xcb, 0x39, 0x48,
];

/// The system parameter FK, XORed into the master key before key expansion.
const FK: [u32; 4] = [0xA3B1BAC6, 0x56AA3350, 0x677D9197, 0xB27022DC];

/// The fixed parameter CK, one word consumed per round of key expansion.
///
/// `CK[i]` is `((ck0 << 24) | (ck1 << 16) | (ck2 << 8) | ck3)` where
/// `ck_k = (7 * (4*i + k)) mod 256`; hard-coded here per GB/T 32907-2016.
#[rustfmt::skip]
const CK: [u32; 32] = [
    0x00070E15, 0x1C232A31, 0x383F464D, 0x545B6269,
    0x70777E85, 0x8C939AA1, 0xA8AFB6BD, 0xC4CBD2D9,
    0xE0E7EEF5, 0xFC030A11, 0x181F262D, 0x343B4249,
    0x50575E65, 0x6C737A81, 0x888F969D, 0xA4ABB2B9,
    0xC0C7CED5, 0xDCE3EAF1, 0xF8FF060D, 0x141B2229,
    0x30373E45, 0x4C535A61, 0x686F767D, 0x848B9299,
    0xA0A7AEB5, 0xBCC3CAD1, 0xD8DFE6ED, 0xF4FB0209,
    0x10171E25, 0x2C333A41, 0x484F565D, 0x646B7279,
];

/// Apply the S-box to each of the 4 bytes of `x`, big-endian.
#[inline]
fn tau(x: u32) -> u32 {
    let b = x.to_be_bytes();
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

/// Linear transform `L` used in the encryption/decryption round function.
#[inline]
fn l(b: u32) -> u32 {
    b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
}

/// Linear transform `L'` used in key expansion.
#[inline]
fn l_prime(b: u32) -> u32 {
    b ^ b.rotate_left(13) ^ b.rotate_left(23)
}

/// Composite transform `T`: S-box substitution followed by `L`.
#[inline]
fn t(x: u32) -> u32 {
    l(tau(x))
}

/// Composite transform `T'`: S-box substitution followed by `L'`.
#[inline]
fn t_prime(x: u32) -> u32 {
    l_prime(tau(x))
}

/// Round function `F`: mix three state words and a round key, feed through
/// `T`, and XOR with the fourth state word.
#[inline]
fn round_f(x0: u32, x1: u32, x2: u32, x3: u32, rk: u32) -> u32 {
    x0 ^ t(x1 ^ x2 ^ x3 ^ rk)
}

/// Expand a 16-byte key into the 32 SM4 round keys.
fn expand_key(key: &[u8; SM4_KEY_SIZE]) -> [u32; ROUNDS] {
    let mk = [
        u32::from_be_bytes([key[0], key[1], key[2], key[3]]),
        u32::from_be_bytes([key[4], key[5], key[6], key[7]]),
        u32::from_be_bytes([key[8], key[9], key[10], key[11]]),
        u32::from_be_bytes([key[12], key[13], key[14], key[15]]),
    ];

    let mut k = [0u32; ROUNDS + 4];
    for i in 0..4 {
        k[i] = mk[i] ^ FK[i];
    }

    let mut rk = [0u32; ROUNDS];
    for i in 0..ROUNDS {
        k[i + 4] = k[i] ^ t_prime(k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]);
        rk[i] = k[i + 4];
    }

    rk
}

/// Split a 16-byte block into its four big-endian state words.
#[inline]
fn block_to_words(block: &[u8; SM4_BLOCK_SIZE]) -> [u32; 4] {
    [
        u32::from_be_bytes([block[0], block[1], block[2], block[3]]),
        u32::from_be_bytes([block[4], block[5], block[6], block[7]]),
        u32::from_be_bytes([block[8], block[9], block[10], block[11]]),
        u32::from_be_bytes([block[12], block[13], block[14], block[15]]),
    ]
}

/// Assemble four big-endian state words back into a 16-byte block.
#[inline]
fn words_to_block(words: [u32; 4]) -> [u8; SM4_BLOCK_SIZE] {
    let mut block = [0u8; SM4_BLOCK_SIZE];
    for (i, w) in words.iter().enumerate() {
        block[i * 4..i * 4 + 4].copy_from_slice(&w.to_be_bytes());
    }
    block
}

/// Run the 32-round SM4 transform over `block` feeding round keys in the
/// order given by `rk`. Encryption feeds `rk[0..32)`; decryption feeds the
/// same array reversed.
fn crypt_block(block: &[u8; SM4_BLOCK_SIZE], rk: impl Iterator<Item = u32>) -> [u8; SM4_BLOCK_SIZE] {
    let [mut x0, mut x1, mut x2, mut x3] = block_to_words(block);

    for rk_j in rk {
        let x_new = round_f(x0, x1, x2, x3, rk_j);
        x0 = x1;
        x1 = x2;
        x2 = x3;
        x3 = x_new;
    }

    // After 32 rounds the state holds (X32, X33, X34, X35); the output
    // block is the reverse word order X35 || X34 || X33 || X32.
    words_to_block([x3, x2, x1, x0])
}

/// An expanded SM4 key schedule.
///
/// Constructing an `Sm4Key` derives all 32 round keys once; the resulting
/// value is immutable and may be used to encrypt or decrypt any number of
/// 16-byte blocks, including concurrently from multiple threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sm4Key {
    rk: [u32; ROUNDS],
}

impl Sm4Key {
    /// Construct an SM4 key schedule from exactly 16 key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Sm4Error::InvalidKeyLength`] if `key` is not 16 bytes long.
    pub fn new(key: &[u8]) -> Result<Sm4Key, Sm4Error> {
        let key: &[u8; SM4_KEY_SIZE] =
            key.try_into()
                .map_err(|_| Sm4Error::InvalidKeyLength { actual: key.len() })?;
        Ok(Sm4Key {
            rk: expand_key(key),
        })
    }

    /// Encrypt a single 16-byte block.
    pub fn encrypt_block(&self, block: &[u8; SM4_BLOCK_SIZE]) -> [u8; SM4_BLOCK_SIZE] {
        crypt_block(block, self.rk.iter().copied())
    }

    /// Decrypt a single 16-byte block.
    pub fn decrypt_block(&self, block: &[u8; SM4_BLOCK_SIZE]) -> [u8; SM4_BLOCK_SIZE] {
        crypt_block(block, self.rk.iter().rev().copied())
    }
}
