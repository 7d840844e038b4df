// src/core/mod.rs
pub mod codec;
pub mod crypto;
pub mod frame;
pub mod key;
pub mod secret;

pub use codec::*;
pub use crypto::*;
pub use frame::*;
pub use key::*;
pub use secret::*;

// Keep only the absolute top-level public API here if needed
pub type Result<T> = std::result::Result<T, crate::error::SealError>;
