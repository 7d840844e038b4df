// tests/crypto_tests.rs
use std::collections::HashSet;

use secret_link::consts::{KEY_LEN, MIN_SEALED_LEN, NONCE_LEN, TAG_LEN};
use secret_link::core::*;
use secret_link::error::SealError;

mod common;
use common::{flip_bit, setup};

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    setup();
    let key = generate_key().unwrap();
    let sealed = encrypt(&key, b"Attack at dawn!").unwrap();
    let decrypted = decrypt(&key, sealed.as_bytes()).unwrap();
    assert_eq!(decrypted.expose_secret().as_slice(), b"Attack at dawn!");
}

#[test]
fn test_sealed_size_is_nonce_plus_plaintext_plus_tag() {
    let key = generate_key().unwrap();
    let sealed = encrypt(&key, b"hello world").unwrap();
    assert_eq!(sealed.len(), NONCE_LEN + 11 + TAG_LEN);
    assert_eq!(sealed.len(), 39);
    assert_eq!(sealed.plaintext_len(), 11);
}

#[test]
fn test_empty_plaintext_roundtrips_to_minimum_frame() {
    let key = generate_key().unwrap();
    let sealed = encrypt(&key, b"").unwrap();
    assert_eq!(sealed.len(), MIN_SEALED_LEN);

    let decrypted = decrypt(&key, sealed.as_bytes()).unwrap();
    assert!(decrypted.expose_secret().is_empty());
}

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    let key1 = generate_key().unwrap();
    let key2 = generate_key().unwrap();
    assert_eq!(export_key(&key1).len(), KEY_LEN);
    assert_ne!(*export_key(&key1), *export_key(&key2));
}

#[test]
fn test_export_import_key_is_bit_identical() {
    let key = generate_key().unwrap();
    let raw = export_key(&key);
    let imported = import_key(&raw[..]).unwrap();

    assert_eq!(*export_key(&imported), *raw);
}

#[test]
fn test_imported_key_decrypts_and_encrypts_like_original() {
    let key = generate_key().unwrap();
    let imported = import_key(&export_key(&key)[..]).unwrap();

    let sealed = encrypt(&key, b"from original").unwrap();
    let opened = decrypt(&imported, sealed.as_bytes()).unwrap();
    assert_eq!(opened.expose_secret().as_slice(), b"from original");

    let sealed = encrypt(&imported, b"from imported").unwrap();
    let opened = decrypt(&key, sealed.as_bytes()).unwrap();
    assert_eq!(opened.expose_secret().as_slice(), b"from imported");
}

#[test]
fn test_import_key_rejects_wrong_length() {
    for len in [0, 16, 31, 33, 64] {
        let result = import_key(&vec![0u8; len]);
        assert!(matches!(result, Err(SealError::InvalidKeyMaterial)), "len {len}");
    }
}

#[test]
fn test_nonces_never_repeat_across_1000_encryptions() {
    let key = generate_key().unwrap();
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let sealed = encrypt(&key, b"same message").unwrap();
        assert!(seen.insert(sealed.nonce().to_vec()), "nonce reused");
    }
}

#[test]
fn test_every_single_bit_flip_is_detected() {
    setup();
    let key = generate_key().unwrap();
    let sealed = encrypt(&key, b"hello world").unwrap();
    let bytes = sealed.as_bytes();

    for bit in (NONCE_LEN * 8)..(bytes.len() * 8) {
        let tampered = flip_bit(bytes, bit);
        let result = decrypt(&key, &tampered);
        assert!(
            matches!(result, Err(SealError::AuthenticationFailed)),
            "bit {bit} flip not detected"
        );
    }
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    let key1 = generate_key().unwrap();
    let key2 = generate_key().unwrap();

    let sealed = encrypt(&key1, b"secret").unwrap();
    let wrong = decrypt(&key2, sealed.as_bytes());
    assert!(matches!(wrong, Err(SealError::AuthenticationFailed)));
}

#[test]
fn test_short_input_rejected_before_verification() {
    let key = generate_key().unwrap();
    for len in [0, 1, NONCE_LEN - 1, NONCE_LEN, MIN_SEALED_LEN - 1] {
        let result = decrypt(&key, &vec![0u8; len]);
        assert!(
            matches!(result, Err(SealError::MalformedSealedMessage)),
            "len {len}"
        );
    }
}

#[test]
fn test_decryption_failures_share_one_message() {
    let key = generate_key().unwrap();
    let malformed = decrypt(&key, &[0u8; 4]).err().unwrap();
    let forged = decrypt(&key, &[0u8; MIN_SEALED_LEN]).err().unwrap();

    assert!(matches!(malformed, SealError::MalformedSealedMessage));
    assert!(matches!(forged, SealError::AuthenticationFailed));
    assert_eq!(malformed.to_string(), "cannot decrypt");
    assert_eq!(malformed.to_string(), forged.to_string());
    assert!(malformed.is_decryption_failure() && forged.is_decryption_failure());
}

#[test]
fn test_sealed_message_frame_layout() {
    let nonce = [0xAB; NONCE_LEN];
    let body = [0xCD; TAG_LEN + 3];
    let sealed = SealedMessage::frame(&nonce, &body);

    assert_eq!(sealed.nonce(), &nonce);
    assert_eq!(sealed.ciphertext(), &body);
    assert_eq!(&sealed.as_bytes()[..NONCE_LEN], &nonce);
    assert_eq!(sealed.plaintext_len(), 3);

    let parsed = SealedMessage::try_from(sealed.clone().into_bytes()).unwrap();
    assert_eq!(parsed, sealed);
}

#[test]
fn test_debug_output_hides_key() {
    let raw = [0x5A; KEY_LEN];
    let key = import_key(&raw).unwrap();
    let debug = format!("{key:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("90")); // 0x5A
}
