// src/error.rs
//! Public error type for the entire crate
//!
//! Every failure is terminal for the operation that raised it. Nothing here
//! is retried, and no variant carries plaintext, key bytes or nonces.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SealError {
    /// The OS random source could not be used.
    #[error("cryptographic provider unavailable")]
    CryptoProviderUnavailable,

    #[error("plaintext too large")]
    PlaintextTooLarge,

    #[error("invalid key material")]
    InvalidKeyMaterial,

    // Same text as `AuthenticationFailed`: callers must not learn why.
    #[error("cannot decrypt")]
    MalformedSealedMessage,

    #[error("cannot decrypt")]
    AuthenticationFailed,

    #[error("invalid encoding")]
    InvalidEncoding,

    #[error("unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl SealError {
    /// True for the two variants that surface to users as "cannot decrypt".
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            SealError::MalformedSealedMessage | SealError::AuthenticationFailed
        )
    }
}

impl From<toml::de::Error> for SealError {
    fn from(err: toml::de::Error) -> Self {
        SealError::Config(err.to_string())
    }
}

impl From<base64::DecodeError> for SealError {
    fn from(_: base64::DecodeError) -> Self {
        SealError::InvalidEncoding
    }
}

impl From<std::string::FromUtf8Error> for SealError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        SealError::InvalidEncoding
    }
}
