use super::*;

// =============================================================
// URL rules
// =============================================================

#[test]
fn accepts_question_urls() {
    assert!(is_question_url("https://stackoverflow.com/questions/123/example"));
    assert!(is_question_url("https://www.stackoverflow.com/questions/456"));
    assert!(is_question_url("http://stackoverflow.com/questions/789/title?answertab=votes#tab-top"));
}

#[test]
fn rejects_urls_without_host_marker() {
    assert!(!is_question_url("https://superuser.com/questions/123/example"));
    assert!(!is_question_url("https://example.com/stackoverflow.com/questions/1"));
}

#[test]
fn rejects_urls_without_question_path() {
    assert!(!is_question_url("https://stackoverflow.com/users/123"));
    assert!(!is_question_url("https://stackoverflow.com/"));
    assert!(!is_question_url("https://stackoverflow.com/questions"));
}

#[test]
fn rejects_relative_or_malformed_urls() {
    assert!(!is_question_url("stackoverflow.com/questions/123"));
    assert!(!is_question_url("/questions/123"));
    assert!(!is_question_url("not a url"));
    assert!(!is_question_url(""));
}

#[test]
fn validate_url_distinguishes_blank_from_invalid() {
    assert_eq!(validate_url("   "), Err(URL_REQUIRED));
    assert_eq!(validate_url("https://example.com"), Err(URL_INVALID));
    assert_eq!(validate_url("https://stackoverflow.com/questions/1/a"), Ok(()));
}

// =============================================================
// Question rules
// =============================================================

#[test]
fn question_length_boundary_is_ten_trimmed_chars() {
    assert!(!is_question_text("123456789"));
    assert!(is_question_text("1234567890"));
    assert!(!is_question_text("   123456789   "));
    assert!(is_question_text("  1234567890  "));
}

#[test]
fn question_length_counts_characters_not_bytes() {
    assert!(!is_question_text("ééééééééé"));
    assert!(is_question_text("éééééééééé"));
}

#[test]
fn validate_question_distinguishes_blank_from_short() {
    assert_eq!(validate_question("\n\t "), Err(QUESTION_REQUIRED));
    assert_eq!(validate_question("too short"), Err(QUESTION_TOO_SHORT));
    assert_eq!(validate_question("How do lifetimes work?"), Ok(()));
}

// =============================================================
// question_id
// =============================================================

#[test]
fn question_id_extracts_numeric_segment() {
    assert_eq!(question_id("https://stackoverflow.com/questions/123/example"), Some("123".to_owned()));
    assert_eq!(question_id("https://stackoverflow.com/questions/42"), Some("42".to_owned()));
}

#[test]
fn question_id_rejects_non_numeric_or_missing() {
    assert_eq!(question_id("https://stackoverflow.com/questions/tagged/rust"), None);
    assert_eq!(question_id("https://stackoverflow.com/users/1"), None);
    assert_eq!(question_id("nope"), None);
}
