//! SM3 Core Implementation
//!
//! This module provides the core functionality of the SM3 cryptographic hash
//! function (GB/T 32905-2016): message padding, message expansion, and the
//! 64-step compression function, composed into a single `sm3_hash` entry
//! point.
//!
//! Unlike the SM4 module, SM3 has no key and no block-size restriction on
//! its input: any byte sequence, including the empty one, hashes to a
//! 32-byte digest. There is no failure mode, so this module exposes no
//! `Result`-returning function.
//!
//! # Examples
//!
//! ```
//! use guomi::sm3::sm3_hash;
//!
//! let digest = sm3_hash(b"abc");
//! assert_eq!(
//!     hex::encode(digest),
//!     "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
//! );
//! ```
//!
//! # Notes
//! - The test vectors used in unit tests are sourced from GB/T 32905-2016.
//! - The eight state words are carried in named local variables
//!   (`a, b, c, d, e, f, g, h`) reassigned each step, rather than a rolling
//!   index into an array, for readability.

/// SM3 block size is fixed at 64 bytes (512 bits).
const SM3_BLOCK_SIZE: usize = 64;

/// SM3 digest size is fixed at 32 bytes (256 bits).
pub const SM3_DIGEST_SIZE: usize = 32;

/// Number of compression steps applied per 64-byte block.
const STEPS: usize = 64;

/// Initial state `V`, fixed by GB/T 32905-2016.
const V_INIT: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600, 0xA96F30BC, 0x163138AA, 0xE38DEE4D, 0xB0FB0E4E,
];

/// Round constant `T(j)`: one value for the first 16 steps, another for the
/// remaining 48.
#[inline]
fn tj(j: usize) -> u32 {
    if j < 16 {
        0x79CC4519
    } else {
        0x7A879D8A
    }
}

/// Boolean function `FF_j`.
#[inline]
fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

/// Boolean function `GG_j`.
#[inline]
fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

/// Permutation `P0`, used in the compression function.
#[inline]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

/// Permutation `P1`, used in message expansion.
#[inline]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Pad `message` to a multiple of 64 bytes: append `0x80`, zero-pad, then
/// append the original bit length as a big-endian `u64`.
fn sm3_pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64) * 8;

    let mut padded = Vec::with_capacity(message.len() + SM3_BLOCK_SIZE);
    padded.extend_from_slice(message);
    padded.push(0x80);
    while (padded.len() + 8) % SM3_BLOCK_SIZE != 0 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());

    padded
}

/// Derive the 68-word `W` and 64-word `W'` message schedules for one
/// 64-byte block.
fn message_expand(block: &[u8; SM3_BLOCK_SIZE]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    for (j, word) in w.iter_mut().take(16).enumerate() {
        *word = u32::from_be_bytes([
            block[j * 4],
            block[j * 4 + 1],
            block[j * 4 + 2],
            block[j * 4 + 3],
        ]);
    }
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15)) ^ w[j - 13].rotate_left(7) ^ w[j - 6];
    }

    let mut w_prime = [0u32; 64];
    for j in 0..64 {
        w_prime[j] = w[j] ^ w[j + 4];
    }

    (w, w_prime)
}

/// Apply the 64-step compression function to `state`, consuming one
/// 64-byte block.
fn compress(state: &mut [u32; 8], block: &[u8; SM3_BLOCK_SIZE]) {
    let (w, w_prime) = message_expand(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for j in 0..STEPS {
        let t_rot = tj(j).rotate_left((j % 32) as u32);
        let ss1 = a
            .rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(t_rot)
            .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);
        let tt1 = ff(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w_prime[j]);
        let tt2 = gg(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    state[0] ^= a;
    state[1] ^= b;
    state[2] ^= c;
    state[3] ^= d;
    state[4] ^= e;
    state[5] ^= f;
    state[6] ^= g;
    state[7] ^= h;
}

/// Compute the SM3 digest of `message`.
///
/// Accepts any byte length, including zero, and always returns exactly 32
/// bytes. This is a pure function: no state is shared across calls.
pub fn sm3_hash(message: &[u8]) -> [u8; SM3_DIGEST_SIZE] {
    let padded = sm3_pad(message);
    let mut state = V_INIT;

    for block in padded.chunks(SM3_BLOCK_SIZE) {
        let block: &[u8; SM3_BLOCK_SIZE] = block.try_into().unwrap();
        compress(&mut state, block);
    }

    let mut digest = [0u8; SM3_DIGEST_SIZE];
    for (i, word) in state.iter().enumerate() {
        digest[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
    digest
}
