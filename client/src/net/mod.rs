//! Networking modules for the summarizer backend's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two outbound POSTs, `types` defines the wire schema, and
//! `error` classifies failures that never reached an application-level answer.

pub mod api;
pub mod error;
pub mod types;
