//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the input form, the summary, and the follow-up chat.
//! They own only local presentation state; page-level state comes from the
//! `SummaryState` context or from props.

pub mod chat_panel;
pub mod input_form;
pub mod loading_spinner;
pub mod site_header;
pub mod summary_display;
