//! Wire DTOs for the summarizer backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly. Optional request fields are
//! omitted rather than sent as empty strings, and missing list fields in a
//! summary decode as empty lists.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Structured summary produced by the backend for one question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Question title.
    pub title: String,
    /// Narrative summary of the problem and its solution.
    pub summary: String,
    /// Bullet points, in display order.
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Code snippets, in display order.
    #[serde(default)]
    pub code_samples: Vec<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Link to the original question, when the input was a URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Summary {
    /// Conversational context handed to the chat endpoint.
    pub fn chat_context(&self) -> String {
        format!("Question: {}\nSummary: {}", self.title, self.summary)
    }
}

/// Body of `POST /api/summarize`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl SummarizeRequest {
    /// Build a request, treating empty strings as absent.
    ///
    /// When both a URL and a question are supplied the URL wins and the
    /// question is dropped, so the backend never has to pick one.
    pub fn new(url: &str, question: &str) -> Self {
        let url = non_empty(url);
        let question = if url.is_some() { None } else { non_empty(question) };
        Self { url, question }
    }

    /// Request for a StackOverflow question URL.
    pub fn for_url(url: &str) -> Self {
        Self::new(url, "")
    }

    /// Request for a free-form question.
    pub fn for_question(question: &str) -> Self {
        Self::new("", question)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: String,
}

/// Payload of a successful chat response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Response envelope shared by both endpoints.
///
/// Missing `data`/`error` decode as `None` without requiring `T: Default`.
/// Other envelope keys (the backend's informational `message`) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Split the envelope into its payload or the server's error text.
    ///
    /// A successful envelope without data is reported as an error with no
    /// message. Blank error strings count as absent.
    pub fn into_result(self) -> Result<T, Option<String>> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.filter(|e| !e.trim().is_empty())),
        }
    }
}
