//! Summary input form state.
//!
//! `FormState` is an immutable value: every keystroke, mode switch, or submit
//! produces a new one. Validation is a pure function of that value.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::net::types::SummarizeRequest;
use crate::util::validation::{validate_question, validate_url};

/// Which kind of input the user is submitting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Url,
    Question,
}

/// Form field that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Url,
    Question,
}

/// Inline error messages keyed by field; a missing key means the field is valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: InputMode,
    pub url: String,
    pub question: String,
    pub errors: FieldErrors,
}

impl FormState {
    /// Switch input mode. Always clears errors.
    #[must_use]
    pub fn with_mode(&self, mode: InputMode) -> Self {
        Self { mode, errors: FieldErrors::new(), ..self.clone() }
    }

    /// Replace the URL text, clearing errors if the URL field had one.
    #[must_use]
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        let errors = self.errors_after_edit(Field::Url);
        Self { url: url.into(), errors, ..self.clone() }
    }

    /// Replace the question text, clearing errors if the question field had one.
    #[must_use]
    pub fn with_question(&self, question: impl Into<String>) -> Self {
        let errors = self.errors_after_edit(Field::Question);
        Self { question: question.into(), errors, ..self.clone() }
    }

    /// Inline error for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validate only the field belonging to the active mode.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let result = match self.mode {
            InputMode::Url => validate_url(&self.url).map_err(|e| (Field::Url, e)),
            InputMode::Question => validate_question(&self.question).map_err(|e| (Field::Question, e)),
        };
        if let Err((field, message)) = result {
            errors.insert(field, message);
        }
        errors
    }

    /// Attempt a submission.
    ///
    /// Returns the next form value (with errors recorded or cleared) and, when
    /// valid, the request for the active mode only. Field text is kept.
    #[must_use]
    pub fn submit(&self) -> (Self, Option<SummarizeRequest>) {
        let errors = self.validate();
        let request = errors.is_empty().then(|| self.request());
        (Self { errors, ..self.clone() }, request)
    }

    fn request(&self) -> SummarizeRequest {
        match self.mode {
            InputMode::Url => SummarizeRequest::for_url(&self.url),
            InputMode::Question => SummarizeRequest::for_question(&self.question),
        }
    }

    fn errors_after_edit(&self, field: Field) -> FieldErrors {
        if self.errors.contains_key(&field) { FieldErrors::new() } else { self.errors.clone() }
    }
}
