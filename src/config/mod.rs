// src/config/mod.rs
//! Configuration system for secret-link
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_or_default, Codec, Config, Link};
pub use defaults::{DEFAULT_BASE_URL, DEFAULT_SECRET_PATH};

mod app;
mod defaults;
