// src/core/codec.rs
//! Binary/text conversions
//!
//! Moves raw key and sealed-message bytes through text-only channels (URL
//! fragments, form fields, data attributes) and converts user text to bytes.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::enums::TransportAlphabet;

use super::Result;

/// UTF-8 bytes of `text`
#[inline]
pub fn encode_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Inverse of [`encode_text`]; fails on invalid UTF-8
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Standard padded base64
#[inline]
pub fn to_transport_text(bytes: &[u8]) -> String {
    to_transport_text_with(TransportAlphabet::Standard, bytes)
}

/// Inverse of [`to_transport_text`]; rejects foreign characters and bad padding
#[inline]
pub fn from_transport_text(text: &str) -> Result<Vec<u8>> {
    from_transport_text_with(TransportAlphabet::Standard, text)
}

pub fn to_transport_text_with(alphabet: TransportAlphabet, bytes: &[u8]) -> String {
    match alphabet {
        TransportAlphabet::Standard => STANDARD.encode(bytes),
        TransportAlphabet::UrlSafeNoPad => URL_SAFE_NO_PAD.encode(bytes),
    }
}

pub fn from_transport_text_with(alphabet: TransportAlphabet, text: &str) -> Result<Vec<u8>> {
    let bytes = match alphabet {
        TransportAlphabet::Standard => STANDARD.decode(text)?,
        TransportAlphabet::UrlSafeNoPad => URL_SAFE_NO_PAD.decode(text)?,
    };
    Ok(bytes)
}

/// Ordered concatenation of `buffers`
pub fn concat(buffers: &[&[u8]]) -> Vec<u8> {
    let total = buffers.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for buffer in buffers {
        out.extend_from_slice(buffer);
    }
    out
}
