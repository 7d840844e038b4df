// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which cipher a sealed
//! message was produced with and which base64 alphabet moves it around.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::AES_256_GCM_ID;
use crate::error::SealError;

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherSuite {
    #[default]
    #[serde(rename = "aes_256_gcm")]
    Aes256Gcm,
}

impl CipherSuite {
    /// Identifier as rendered next to the sealed message in page markup
    pub fn id(self) -> &'static str {
        match self {
            CipherSuite::Aes256Gcm => AES_256_GCM_ID,
        }
    }

    pub fn parse(id: &str) -> Result<Self, SealError> {
        match id {
            AES_256_GCM_ID => Ok(CipherSuite::Aes256Gcm),
            other => Err(SealError::UnsupportedCipher(other.to_owned())),
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CipherSuite {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherSuite::parse(s)
    }
}

/// Base64 alphabet used for key and sealed-message text
///
/// `Standard` (padded, `+` and `/`) is the wire format existing links use.
/// `UrlSafeNoPad` needs no percent-encoding inside a URL fragment, but links
/// built with it can only be opened by a decoder configured the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportAlphabet {
    #[default]
    Standard,
    UrlSafeNoPad,
}
