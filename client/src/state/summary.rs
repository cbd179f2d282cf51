//! Page-level summary state: the request lifecycle and what the page shows.
//!
//! DESIGN
//! ======
//! The page holds at most one current summary, a loading flag, an error
//! message, and whether the follow-up chat is open. A submission clears the
//! previous summary, error, and chat before loading, so spinner, error banner,
//! and summary panel are mutually exclusive.
//!
//! Each submission is issued a [`RequestTicket`]. Only the completion carrying
//! the most recently issued ticket is applied; anything older is a stale
//! response and is dropped.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::net::error::TransportError;
use crate::net::types::{ApiResponse, Summary};

/// Shown when the backend rejects a request without saying why.
pub const SUMMARY_FALLBACK_ERROR: &str = "Failed to generate summary";
/// Shown for any transport failure.
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

/// Identifies one summarize request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// What the main content area renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Empty,
    Loading,
    Error,
    Summary,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryState {
    pub summary: Option<Summary>,
    pub loading: bool,
    pub error: Option<String>,
    pub chat_visible: bool,
    issued: u64,
}

impl SummaryState {
    /// Start a new submission: clear previous results and enter loading.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        self.summary = None;
        self.error = None;
        self.chat_visible = false;
        self.loading = true;
        RequestTicket(self.issued)
    }

    /// Apply a completed request.
    ///
    /// Returns `false` (and changes nothing) when `ticket` is not the latest
    /// issued one.
    pub fn finish_request(
        &mut self,
        ticket: RequestTicket,
        result: Result<ApiResponse<Summary>, TransportError>,
    ) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.loading = false;
        match summary_outcome(result) {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(message) => {
                self.summary = None;
                self.error = Some(message);
            }
        }
        true
    }

    /// Open the follow-up chat.
    pub fn ask_follow_up(&mut self) {
        self.chat_visible = true;
    }

    /// Chat renders only with a summary present and the chat requested.
    pub fn chat_open(&self) -> bool {
        self.chat_visible && self.summary.is_some()
    }

    pub fn panel(&self) -> Panel {
        if self.loading {
            Panel::Loading
        } else if self.error.is_some() {
            Panel::Error
        } else if self.summary.is_some() {
            Panel::Summary
        } else {
            Panel::Empty
        }
    }
}

/// Map a summarize result to the summary or the user-facing error text.
///
/// # Errors
///
/// Returns the server's error, [`SUMMARY_FALLBACK_ERROR`] when it gave none, or
/// [`NETWORK_ERROR`] for transport failures.
pub fn summary_outcome(result: Result<ApiResponse<Summary>, TransportError>) -> Result<Summary, String> {
    match result {
        Ok(response) => response
            .into_result()
            .map_err(|error| error.unwrap_or_else(|| SUMMARY_FALLBACK_ERROR.to_owned())),
        Err(_) => Err(NETWORK_ERROR.to_owned()),
    }
}
