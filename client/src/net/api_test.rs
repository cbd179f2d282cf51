use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8000", SUMMARIZE_PATH), "http://localhost:8000/api/summarize");
    assert_eq!(endpoint("http://localhost:8000", CHAT_PATH), "http://localhost:8000/api/chat");
}

#[test]
fn endpoint_tolerates_trailing_slash_on_base() {
    assert_eq!(endpoint("https://api.example.com/", CHAT_PATH), "https://api.example.com/api/chat");
}

#[test]
fn transport_error_display_carries_detail() {
    assert_eq!(TransportError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(
        TransportError::Decode("expected value".to_owned()).to_string(),
        "response decode failed: expected value"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    use std::future::Future as _;
    use std::task::{Context, Poll, Waker};

    let request = SummarizeRequest::for_question("What is a lifetime in Rust?");
    let mut fut = std::pin::pin!(summarize("http://localhost:8000", &request));
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result, Err(TransportError::Unavailable)),
        Poll::Pending => panic!("non-browser summarize should resolve immediately"),
    }
}
