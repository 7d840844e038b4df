// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret containers used throughout secret-link.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(RawKey32, 32); // 256-bit AES-GCM message key

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>); // Decrypted message bytes
