// src/core/key.rs
//! Key generation, export and import
//!
//! A `SymmetricKey` lives for one encrypt or decrypt call. It is zeroized on
//! drop and never printed.

use std::fmt;

use aes_gcm::{aead::KeyInit, Aes256Gcm};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use crate::aliases::RawKey32;
use crate::consts::KEY_LEN;
use crate::error::SealError;

use super::Result;

/// 256-bit AES-GCM key
pub struct SymmetricKey(RawKey32);

impl SymmetricKey {
    pub(crate) fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(self.0.expose_secret().into())
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// Fill `buf` from the OS random source
pub(crate) fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|_| SealError::CryptoProviderUnavailable)
}

/// Generate a new random 256-bit key
pub fn generate_key() -> Result<SymmetricKey> {
    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    fill_random(&mut bytes[..])?;
    Ok(SymmetricKey(RawKey32::new(*bytes)))
}

/// Raw key bytes, zeroized when the caller drops them
pub fn export_key(key: &SymmetricKey) -> Zeroizing<[u8; KEY_LEN]> {
    Zeroizing::new(*key.0.expose_secret())
}

/// Rebuild a key from exactly `KEY_LEN` raw bytes
pub fn import_key(bytes: &[u8]) -> Result<SymmetricKey> {
    let raw: [u8; KEY_LEN] = bytes
        .try_into()
        .map_err(|_| SealError::InvalidKeyMaterial)?;
    let raw = Zeroizing::new(raw);
    Ok(SymmetricKey(RawKey32::new(*raw)))
}
