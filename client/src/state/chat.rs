//! Follow-up chat transcript and send lifecycle.
//!
//! DESIGN
//! ======
//! A conversation is seeded with one AI greeting and only ever grows. Sends are
//! single-flight: `begin_send` appends the user's message optimistically and
//! hands back the request to issue, `finish_send` appends exactly one AI
//! message for the outcome and returns to idle. Message ids are random v4
//! UUIDs, except the greeting's fixed id.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::TransportError;
use crate::net::types::{ApiResponse, ChatReply, ChatRequest};

pub const GREETING_ID: &str = "greeting";
pub const GREETING_TEXT: &str =
    "Hello! I'm here to help you with follow-up questions about the summary. What would you like to know more about?";
pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const CONNECTION_TROUBLE: &str = "Sorry, I'm having trouble connecting. Please try again.";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl ChatMessage {
    fn new(sender: Sender, content: String, timestamp: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), content, sender, timestamp }
    }
}

/// A send that has been accepted and is awaiting its response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub ticket: u64,
    pub request: ChatRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub sending: bool,
    context: String,
    issued: u64,
}

impl ChatState {
    /// New conversation over `context`, seeded with the greeting.
    pub fn new(context: impl Into<String>, now_ms: f64) -> Self {
        let greeting = ChatMessage {
            id: GREETING_ID.to_owned(),
            content: GREETING_TEXT.to_owned(),
            sender: Sender::Ai,
            timestamp: now_ms,
        };
        Self { messages: vec![greeting], input: String::new(), sending: false, context: context.into(), issued: 0 }
    }

    /// Context string captured when the conversation started.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn can_send(&self) -> bool {
        !self.sending && !self.input.trim().is_empty()
    }

    /// Accept the current input for sending.
    ///
    /// Returns `None` (and changes nothing) when the input is blank or a send
    /// is already in flight.
    pub fn begin_send(&mut self, now_ms: f64) -> Option<PendingSend> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input).trim().to_owned();
        self.messages.push(ChatMessage::new(Sender::User, text.clone(), now_ms));
        self.sending = true;
        self.issued += 1;
        Some(PendingSend { ticket: self.issued, request: ChatRequest { message: text, context: self.context.clone() } })
    }

    /// Append the AI reply (or error reply) for a pending send and go idle.
    ///
    /// Returns `false` if `ticket` does not match the send in flight.
    pub fn finish_send(
        &mut self,
        ticket: u64,
        result: Result<ApiResponse<ChatReply>, TransportError>,
        now_ms: f64,
    ) -> bool {
        if !self.sending || ticket != self.issued {
            return false;
        }
        self.messages.push(ChatMessage::new(Sender::Ai, reply_text(result), now_ms));
        self.sending = false;
        true
    }
}

/// Text of the AI message appended for a chat outcome.
pub fn reply_text(result: Result<ApiResponse<ChatReply>, TransportError>) -> String {
    match result {
        Ok(response) => match response.into_result() {
            Ok(reply) => reply.message,
            Err(error) => format!(
                "Sorry, I encountered an error: {}",
                error.as_deref().unwrap_or(UNKNOWN_ERROR)
            ),
        },
        Err(_) => CONNECTION_TROUBLE.to_owned(),
    }
}
