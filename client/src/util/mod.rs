//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure input rules, reply formatting and
//! browser/environment concerns from page and component logic.

pub mod clipboard;
pub mod markdown;
pub mod time;
pub mod validation;
