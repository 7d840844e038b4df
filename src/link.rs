// src/link.rs
//! Share-link helpers
//!
//! The key only ever appears after `#`. Browsers do not send the fragment,
//! so the server sees the secret id and the sealed bytes but never the key.

use crate::config::Config;
use crate::consts::KEY_PLACEHOLDER;
use crate::core::{EncryptedSecret, Sealer};
use crate::enums::CipherSuite;
use crate::error::SealError;

/// `{base_url}{secret_path}/{secret_id}#{key_text}`
pub fn share_url(base_url: &str, secret_path: &str, secret_id: &str, key_text: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = secret_path.trim_matches('/');

    if path.is_empty() {
        format!("{base}/{secret_id}#{key_text}")
    } else {
        format!("{base}/{path}/{secret_id}#{key_text}")
    }
}

/// [`share_url`] using the configured base URL and path
pub fn share_url_for(config: &Config, secret_id: &str, secret: &EncryptedSecret) -> String {
    share_url(
        &config.link.base_url,
        &config.link.secret_path,
        secret_id,
        &secret.key,
    )
}

/// Replace every `key_placeholder` in server-rendered markup with the key
pub fn fill_key_placeholder(template: &str, key_text: &str) -> String {
    template.replace(KEY_PLACEHOLDER, key_text)
}

/// Everything after the first `#`, if any
pub fn fragment_of(url: &str) -> Option<&str> {
    url.split_once('#').map(|(_, fragment)| fragment)
}

/// Key text from a location hash, with one leading `#` stripped
pub fn key_from_fragment(hash: &str) -> Option<&str> {
    let key = hash.strip_prefix('#').unwrap_or(hash);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Recipient path starting from the opened link
///
/// `cipher_id` is the identifier rendered next to the sealed message; only
/// `aes_256_gcm` is decrypted locally.
pub fn decrypt_from_link(
    sealer: &Sealer,
    url: &str,
    encrypted_bytes: &str,
    cipher_id: &str,
) -> Result<String, SealError> {
    CipherSuite::parse(cipher_id)?;

    let key_text = fragment_of(url)
        .and_then(key_from_fragment)
        .ok_or(SealError::InvalidKeyMaterial)?;

    sealer.decrypt_secret(key_text, encrypted_bytes)
}
