//! Transport failure classification.

/// A request that produced no usable response envelope.
///
/// These details are for diagnostics only; the UI always shows a fixed
/// message instead of the `Display` text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built or sent (network unreachable, CORS, etc.).
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not a valid response envelope.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Network calls are only made from the browser bundle.
    #[error("network calls are not available outside the browser")]
    Unavailable,
}
