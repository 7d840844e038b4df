// src/core/crypto.rs
//! Pure cryptographic primitives — no I/O
//!
//! AES-256-GCM with a fresh 96-bit nonce per call, a 128-bit tag and no
//! associated data. Everything here works on in-memory buffers.

use aes_gcm::aead::Aead;
use aes_gcm::Nonce;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use crate::aliases::PlainText;
use crate::consts::{MAX_PLAINTEXT_LEN, NONCE_LEN};
use crate::error::SealError;

use super::frame::SealedMessage;
use super::key::{fill_random, SymmetricKey};
use super::Result;

/// Encrypt `plaintext` under `key` → `nonce || ciphertext || tag`
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8]) -> Result<SealedMessage> {
    let mut nonce = [0u8; NONCE_LEN];
    fill_random(&mut nonce)?;
    seal_with_nonce(key, &nonce, plaintext)
}

/// Reject plaintexts past the GCM block-counter limit
pub(crate) fn ensure_plaintext_len(len: usize) -> Result<()> {
    if len as u64 > MAX_PLAINTEXT_LEN {
        return Err(SealError::PlaintextTooLarge);
    }
    Ok(())
}

/// Deterministic half of [`encrypt`]. The nonce must never repeat for a key.
pub(crate) fn seal_with_nonce(
    key: &SymmetricKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<SealedMessage> {
    ensure_plaintext_len(plaintext.len())?;

    // Length is the only input aes-gcm refuses
    let ciphertext = key
        .cipher()
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| SealError::PlaintextTooLarge)?;

    let sealed = SealedMessage::frame(nonce, &ciphertext);

    #[cfg(feature = "logging")]
    debug!(
        plaintext_len = plaintext.len(),
        sealed_len = sealed.len(),
        "sealed message"
    );

    Ok(sealed)
}

/// Decrypt a sealed message
///
/// Frames shorter than nonce + tag are rejected before the cipher runs. On
/// any failure no plaintext bytes are returned.
pub fn decrypt(key: &SymmetricKey, sealed: &[u8]) -> Result<PlainText> {
    let sealed = SealedMessage::from_bytes(sealed.to_vec())?;
    open(key, &sealed)
}

/// [`decrypt`] for an already validated frame
pub fn open(key: &SymmetricKey, sealed: &SealedMessage) -> Result<PlainText> {
    let (nonce, ciphertext) = sealed.unframe();

    let plaintext = key
        .cipher()
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| {
            #[cfg(feature = "logging")]
            warn!(sealed_len = sealed.len(), "authentication failed");
            SealError::AuthenticationFailed
        })?;

    Ok(PlainText::new(plaintext))
}
