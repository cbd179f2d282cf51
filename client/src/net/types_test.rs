use super::*;

// =============================================================
// SummarizeRequest
// =============================================================

#[test]
fn summarize_request_for_url_serializes_only_url() {
    let req = SummarizeRequest::for_url("https://stackoverflow.com/questions/123/example");
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "url": "https://stackoverflow.com/questions/123/example" })
    );
}

#[test]
fn summarize_request_for_question_serializes_only_question() {
    let req = SummarizeRequest::for_question("How do I pin a future?");
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "question": "How do I pin a future?" })
    );
}

#[test]
fn summarize_request_treats_empty_strings_as_absent() {
    let req = SummarizeRequest::new("", "");
    assert_eq!(req, SummarizeRequest::default());
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({}));
}

#[test]
fn summarize_request_url_wins_when_both_supplied() {
    let req = SummarizeRequest::new("https://stackoverflow.com/questions/1/a", "some long question text");
    assert_eq!(req.url.as_deref(), Some("https://stackoverflow.com/questions/1/a"));
    assert_eq!(req.question, None);
}

#[test]
fn summarize_request_keeps_question_when_url_empty() {
    let req = SummarizeRequest::new("", "some long question text");
    assert_eq!(req.url, None);
    assert_eq!(req.question.as_deref(), Some("some long question text"));
}

// =============================================================
// Summary
// =============================================================

#[test]
fn summary_decodes_full_payload() {
    let summary: Summary = serde_json::from_value(serde_json::json!({
        "title": "T",
        "summary": "S",
        "key_points": ["a", "b"],
        "code_samples": ["let x = 1;"],
        "tags": ["rust"],
        "source_url": "https://stackoverflow.com/questions/1/a"
    }))
    .unwrap();
    assert_eq!(summary.title, "T");
    assert_eq!(summary.key_points, vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(summary.code_samples, vec!["let x = 1;".to_owned()]);
    assert_eq!(summary.tags, vec!["rust".to_owned()]);
    assert_eq!(summary.source_url.as_deref(), Some("https://stackoverflow.com/questions/1/a"));
}

#[test]
fn summary_missing_lists_decode_empty() {
    let summary: Summary = serde_json::from_value(serde_json::json!({ "title": "T", "summary": "S" })).unwrap();
    assert!(summary.key_points.is_empty());
    assert!(summary.code_samples.is_empty());
    assert!(summary.tags.is_empty());
    assert_eq!(summary.source_url, None);
}

#[test]
fn summary_chat_context_joins_title_and_body() {
    let summary = Summary { title: "Borrowing".to_owned(), summary: "Use a reference.".to_owned(), ..Summary::default() };
    assert_eq!(summary.chat_context(), "Question: Borrowing\nSummary: Use a reference.");
}

// =============================================================
// ApiResponse
// =============================================================

#[test]
fn api_response_success_yields_data() {
    let resp: ApiResponse<ChatReply> = serde_json::from_value(serde_json::json!({
        "success": true,
        "data": { "message": "hi", "context": "ctx" }
    }))
    .unwrap();
    let reply = resp.into_result().unwrap();
    assert_eq!(reply.message, "hi");
    assert_eq!(reply.context.as_deref(), Some("ctx"));
}

#[test]
fn chat_failure_envelope_decodes_without_data() {
    let resp: ApiResponse<ChatReply> =
        serde_json::from_value(serde_json::json!({ "success": false, "error": "x" })).unwrap();
    assert_eq!(resp.data, None);
    assert_eq!(resp.into_result(), Err(Some("x".to_owned())));
}

#[test]
fn envelope_ignores_informational_message() {
    let resp: ApiResponse<ChatReply> = serde_json::from_str(
        r#"{"success":true,"data":{"message":"hi"},"message":"Chat response generated successfully"}"#,
    )
    .unwrap();
    assert_eq!(resp.into_result().map(|reply| reply.message), Ok("hi".to_owned()));
}

#[test]
fn api_response_failure_yields_server_error() {
    let resp: ApiResponse<Summary> =
        serde_json::from_value(serde_json::json!({ "success": false, "error": "rate limited" })).unwrap();
    assert_eq!(resp.into_result(), Err(Some("rate limited".to_owned())));
}

#[test]
fn api_response_failure_without_error_yields_none() {
    let resp: ApiResponse<Summary> = serde_json::from_value(serde_json::json!({ "success": false })).unwrap();
    assert_eq!(resp.into_result(), Err(None));
}

#[test]
fn api_response_blank_error_counts_as_absent() {
    let resp: ApiResponse<Summary> =
        serde_json::from_value(serde_json::json!({ "success": false, "error": "  " })).unwrap();
    assert_eq!(resp.into_result(), Err(None));
}

#[test]
fn api_response_success_without_data_is_an_error() {
    let resp: ApiResponse<Summary> = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert_eq!(resp.into_result(), Err(None));
}

#[test]
fn chat_request_serializes_message_and_context() {
    let req = ChatRequest { message: "why?".to_owned(), context: "Question: T\nSummary: S".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "message": "why?", "context": "Question: T\nSummary: S" })
    );
}
