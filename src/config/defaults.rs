// src/config/defaults.rs
use crate::config::app::Link;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_SECRET_PATH: &str = "/secrets";

pub fn default_link() -> Link {
    Link {
        base_url: default_base_url(),
        secret_path: default_secret_path(),
    }
}

pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

pub fn default_secret_path() -> String {
    DEFAULT_SECRET_PATH.into()
}
