//! Input rules for the summary form.
//!
//! Pure functions over the current text; nothing here touches the network or
//! the DOM.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use url::Url;

/// Substring the URL host must contain.
pub const QA_HOST_MARKER: &str = "stackoverflow.com";
/// Substring the URL path must contain for a question page.
pub const QUESTION_PATH_MARKER: &str = "/questions/";
/// Minimum trimmed length of a free-form question, in characters.
pub const MIN_QUESTION_CHARS: usize = 10;

pub const URL_REQUIRED: &str = "Please enter a StackOverflow URL";
pub const URL_INVALID: &str = "Please enter a valid StackOverflow question URL";
pub const QUESTION_REQUIRED: &str = "Please enter your question";
pub const QUESTION_TOO_SHORT: &str = "Question must be at least 10 characters long";

/// Whether `raw` is an absolute URL pointing at a StackOverflow question page.
pub fn is_question_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw.trim()) else {
        return false;
    };
    url.host_str().is_some_and(|host| host.contains(QA_HOST_MARKER)) && url.path().contains(QUESTION_PATH_MARKER)
}

/// Whether `raw` is long enough to be submitted as a question.
pub fn is_question_text(raw: &str) -> bool {
    raw.trim().chars().count() >= MIN_QUESTION_CHARS
}

/// Validate the URL field, returning the inline error message on failure.
///
/// # Errors
///
/// Returns [`URL_REQUIRED`] for blank input and [`URL_INVALID`] otherwise.
pub fn validate_url(raw: &str) -> Result<(), &'static str> {
    if raw.trim().is_empty() {
        Err(URL_REQUIRED)
    } else if !is_question_url(raw) {
        Err(URL_INVALID)
    } else {
        Ok(())
    }
}

/// Validate the question field, returning the inline error message on failure.
///
/// # Errors
///
/// Returns [`QUESTION_REQUIRED`] for blank input and [`QUESTION_TOO_SHORT`]
/// when the trimmed text is under [`MIN_QUESTION_CHARS`].
pub fn validate_question(raw: &str) -> Result<(), &'static str> {
    if raw.trim().is_empty() {
        Err(QUESTION_REQUIRED)
    } else if !is_question_text(raw) {
        Err(QUESTION_TOO_SHORT)
    } else {
        Ok(())
    }
}

/// Numeric question id from a `/questions/<id>/...` URL, if present.
pub fn question_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let mut segments = url.path_segments()?;
    segments.find(|s| *s == "questions")?;
    segments
        .next()
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_owned)
}
