// src/lib.rs
//! secret-link — zero-knowledge secret sharing over links
//!
//! Features:
//! - AES-256-GCM sealed messages (`nonce || ciphertext || tag`)
//! - One fresh key per secret, carried only in the URL fragment
//! - Base64 transport text for keys and sealed messages
//! - Keys held in zeroizing secure-gate containers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod link;

// Re-export everything users need at the crate root
pub use aliases::{PlainText, RawKey32};
pub use config::load as load_config;
pub use crate::core::{
    decrypt, decrypt_secret, encrypt, encrypt_secret, export_key, generate_key, import_key,
    EncryptedSecret, Result as CoreResult, SealedMessage, Sealer, SymmetricKey,
};
pub use enums::{CipherSuite, TransportAlphabet};
pub use error::SealError;
pub use link::{decrypt_from_link, key_from_fragment, share_url};
