// src/core/frame.rs
//! Sealed-message framing
//!
//! ```text
//! +---------------+------------------------------+
//! | NONCE (12 B)  | CIPHERTEXT || TAG (N + 16 B) |
//! +---------------+------------------------------+
//! ```
//!
//! No length prefix: the nonce length is fixed and the AEAD tag closes the
//! frame.

use crate::consts::{MIN_SEALED_LEN, NONCE_LEN, TAG_LEN};
use crate::error::SealError;

use super::codec::concat;
use super::Result;

/// Nonce followed by AES-GCM ciphertext and tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage(Vec<u8>);

impl SealedMessage {
    /// Frame a nonce with the AEAD output
    pub fn frame(nonce: &[u8; NONCE_LEN], ciphertext_and_tag: &[u8]) -> Self {
        Self(concat(&[nonce.as_slice(), ciphertext_and_tag]))
    }

    /// Validate the minimum frame length and take ownership of `bytes`
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < MIN_SEALED_LEN {
            return Err(SealError::MalformedSealedMessage);
        }
        Ok(Self(bytes))
    }

    /// Split into `(nonce, ciphertext || tag)`
    pub fn unframe(&self) -> (&[u8], &[u8]) {
        // Both constructors guarantee at least NONCE_LEN bytes
        self.0.split_at(NONCE_LEN)
    }

    pub fn nonce(&self) -> &[u8] {
        self.unframe().0
    }

    pub fn ciphertext(&self) -> &[u8] {
        self.unframe().1
    }

    /// Length of the plaintext this frame decrypts to
    pub fn plaintext_len(&self) -> usize {
        self.0.len().saturating_sub(NONCE_LEN + TAG_LEN)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SealedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for SealedMessage {
    type Error = SealError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        SealedMessage::from_bytes(bytes)
    }
}
