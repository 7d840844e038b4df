// src/core/secret.rs
//! Sender and recipient paths over text
//!
//! The sender gets back both halves of a secret explicitly: the key text for
//! the URL fragment and the sealed text for the server. The recipient hands
//! both back in and gets the plaintext.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::enums::TransportAlphabet;

use super::codec::{decode_text, encode_text, from_transport_text_with, to_transport_text_with};
use super::crypto::{encrypt, open};
use super::frame::SealedMessage;
use super::key::{export_key, generate_key, import_key};
use super::Result;

/// Output of the sender path
///
/// Serializes as `{"key": ..., "encryptedBytes": ...}`. Only
/// `encrypted_bytes` may be sent to the server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedSecret {
    pub key: String,
    pub encrypted_bytes: String,
}

impl std::fmt::Debug for EncryptedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedSecret")
            .field("key", &"[REDACTED]")
            .field("encrypted_bytes", &self.encrypted_bytes)
            .finish()
    }
}

/// Encrypts and decrypts secrets with a fixed transport alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sealer {
    alphabet: TransportAlphabet,
}

impl Sealer {
    pub fn new(alphabet: TransportAlphabet) -> Self {
        Self { alphabet }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.codec.alphabet)
    }

    pub fn alphabet(&self) -> TransportAlphabet {
        self.alphabet
    }

    /// Sender path: fresh key, fresh nonce, both halves as text
    pub fn encrypt_secret(&self, secret: &str) -> Result<EncryptedSecret> {
        let key = generate_key()?;
        let sealed = encrypt(&key, &encode_text(secret))?;
        let raw_key = export_key(&key);

        Ok(EncryptedSecret {
            key: to_transport_text_with(self.alphabet, &raw_key[..]),
            encrypted_bytes: to_transport_text_with(self.alphabet, sealed.as_bytes()),
        })
    }

    /// Recipient path: key text from the fragment, sealed text from the page
    pub fn decrypt_secret(&self, key_text: &str, encrypted_bytes: &str) -> Result<String> {
        let raw_key = zeroize::Zeroizing::new(from_transport_text_with(self.alphabet, key_text)?);
        let key = import_key(&raw_key)?;

        let sealed =
            SealedMessage::from_bytes(from_transport_text_with(self.alphabet, encrypted_bytes)?)?;
        let plaintext = open(&key, &sealed)?;

        decode_text(plaintext.expose_secret())
    }
}

/// [`Sealer::encrypt_secret`] with standard base64
pub fn encrypt_secret(secret: &str) -> Result<EncryptedSecret> {
    Sealer::default().encrypt_secret(secret)
}

/// [`Sealer::decrypt_secret`] with standard base64
pub fn decrypt_secret(key_text: &str, encrypted_bytes: &str) -> Result<String> {
    Sealer::default().decrypt_secret(key_text, encrypted_bytes)
}
