// src/consts.rs
//! Shared constants — protocol parameters and defaults

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes (128 bits)
pub const TAG_LEN: usize = 16;

/// Largest plaintext AES-GCM accepts under one nonce: 2^36 - 32 bytes
pub const MAX_PLAINTEXT_LEN: u64 = (1 << 36) - 32;

/// Smallest valid sealed message: nonce + tag of an empty plaintext
pub const MIN_SEALED_LEN: usize = NONCE_LEN + TAG_LEN;

/// Cipher identifier carried in page markup next to the sealed message
pub const AES_256_GCM_ID: &str = "aes_256_gcm";

/// Marker the server renders in the share link, replaced client-side by the key
pub const KEY_PLACEHOLDER: &str = "key_placeholder";

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "SECRET_LINK_CONFIG";

/// Config file used when `SECRET_LINK_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "secret-link.toml";

/// Env var overriding `link.base_url`
pub const BASE_URL_ENV: &str = "SECRET_LINK_BASE_URL";
