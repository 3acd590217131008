use super::super::{sm4_dec_ecb, sm4_enc_ecb, Sm4Key};
use crate::error::Sm4Error;
use hex::decode as hex_decode;

fn standard_key() -> Sm4Key {
    let key = hex_decode("0123456789ABCDEFFEDCBA9876543210").unwrap();
    Sm4Key::new(&key).expect("construction failed")
}

#[test]
fn test_sm4_enc_ecb_single_block() {
    // Define the key, plaintext, and expected ciphertext as byte arrays.
    let sm4 = standard_key();
    let plaintext = hex_decode("0123456789ABCDEFFEDCBA9876543210").unwrap();
    let expected_ciphertext = hex_decode("681EDF34D206965E86B3E94F536E4246").unwrap();

    // Call the ECB encryption function.
    let ciphertext = sm4_enc_ecb(&sm4, &plaintext).expect("encryption failed");

    // Assert that the produced ciphertext matches the expected ciphertext.
    assert_eq!(
        ciphertext, expected_ciphertext,
        "Ciphertext does not match expected value"
    );
}

#[test]
fn test_sm4_dec_ecb_single_block() {
    // Define the key, ciphertext, and expected plaintext as byte arrays.
    let sm4 = standard_key();
    let ciphertext = hex_decode("681EDF34D206965E86B3E94F536E4246").unwrap();
    let expected_plaintext = hex_decode("0123456789ABCDEFFEDCBA9876543210").unwrap();

    // Call the ECB decryption function.
    let plaintext = sm4_dec_ecb(&sm4, &ciphertext).expect("decryption failed");

    // Assert that the decrypted plaintext matches the expected plaintext.
    assert_eq!(
        plaintext, expected_plaintext,
        "Decrypted plaintext does not match expected value"
    );
}

#[test]
fn test_sm4_ecb_empty_input_accepted() {
    // Define a standard key; the spec accepts zero-length ECB input.
    let sm4 = standard_key();

    // Call encrypt and decrypt on empty input.
    let ciphertext = sm4_enc_ecb(&sm4, &[]).expect("empty input should be accepted");
    let plaintext = sm4_dec_ecb(&sm4, &[]).expect("empty input should be accepted");

    // Assert that both return an empty result rather than an error.
    assert!(ciphertext.is_empty(), "Empty plaintext must encrypt to empty ciphertext");
    assert!(plaintext.is_empty(), "Empty ciphertext must decrypt to empty plaintext");
}

#[test]
fn test_sm4_ecb_invalid_block_alignment() {
    // Define plaintext one byte longer than a whole number of blocks.
    let sm4 = standard_key();
    let plaintext = vec![0u8; 17];

    // Call the ECB encryption function and assert it reports misalignment.
    let err = sm4_enc_ecb(&sm4, &plaintext).unwrap_err();
    assert_eq!(
        err,
        Sm4Error::InvalidBlockAlignment { actual: 17 },
        "Non-block-aligned input must be rejected with InvalidBlockAlignment"
    );
}

#[test]
fn test_sm4_ecb_block_concatenation_property() {
    // Define two plaintext blocks and their concatenation.
    let sm4 = standard_key();
    let p1 = hex_decode("0123456789ABCDEFFEDCBA9876543210").unwrap();
    let p2 = hex_decode("FFEEDDCCBBAA99887766554433221100").unwrap();

    let mut concatenated = p1.clone();
    concatenated.extend_from_slice(&p2);

    // Encrypt the concatenation in one call, and each block separately.
    let combined = sm4_enc_ecb(&sm4, &concatenated).expect("encryption failed");

    let mut separate = sm4_enc_ecb(&sm4, &p1).expect("encryption failed");
    separate.extend(sm4_enc_ecb(&sm4, &p2).expect("encryption failed"));

    // Assert that ECB encrypts each block independently of its neighbors.
    assert_eq!(
        combined, separate,
        "Encrypting a concatenation must equal concatenating per-block encryptions"
    );
}

#[test]
fn test_sm4_ecb_round_trip_multi_block() {
    // Define a four-block plaintext.
    let sm4 = standard_key();
    let plaintext: Vec<u8> = (0..64u8).collect();

    // Encrypt, then decrypt the result.
    let ciphertext = sm4_enc_ecb(&sm4, &plaintext).expect("encryption failed");
    let decrypted = sm4_dec_ecb(&sm4, &ciphertext).expect("decryption failed");

    // Assert that decryption restores the original multi-block plaintext.
    assert_eq!(
        decrypted, plaintext,
        "Decrypted plaintext does not match original multi-block plaintext"
    );
}
