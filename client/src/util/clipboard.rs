//! System clipboard access.
//!
//! Browser-only; SSR and native builds report failure so callers never show
//! "copied" feedback for text that was not copied.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if there is no window or the browser rejects the
/// write (permissions, insecure context).
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window available".to_owned())?;
        let clipboard = window.navigator().clipboard();
        let promise = clipboard.write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}
