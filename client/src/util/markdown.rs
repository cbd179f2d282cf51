//! Markdown rendering for AI chat replies.
//!
//! Replies come from a language model, so raw HTML in them is never passed
//! through. Single newlines are kept as line breaks because replies are read
//! as chat messages, not reflowed prose.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

fn reply_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render `source` to HTML with raw HTML removed and soft breaks kept.
pub fn to_safe_html(source: &str) -> String {
    let events = Parser::new_ext(source, reply_options()).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        other => Some(other),
    });

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, events);
    rendered
}
