//! Backend base address resolution.
//!
//! The WASM bundle has no process environment at runtime, so the address is
//! captured from `SUMMARIZER_API_URL` when the crate is compiled and falls back
//! to a local backend otherwise.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `SUMMARIZER_API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base address of the summarizer backend, without a trailing slash.
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("SUMMARIZER_API_URL"))
}

/// Normalize a configured base address, substituting the default when absent.
pub fn resolve_api_base_url(raw: Option<&str>) -> String {
    let value = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL);
    value.trim_end_matches('/').to_owned()
}
