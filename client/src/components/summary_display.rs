//! Structured summary rendering with copy-to-clipboard and follow-up actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives a `Summary` by value and never talks to the backend. "Ask
//! Follow-up" only notifies the page, which decides whether chat is shown.

#[cfg(test)]
#[path = "summary_display_test.rs"]
mod summary_display_test;

use leptos::prelude::*;

use crate::net::types::Summary;
use crate::state::copy::{CopyFeedback, copy_label};
use crate::util::validation::question_id;

/// Optional sections of a summary; each is omitted when its list is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummarySection {
    KeyPoints,
    CodeSamples,
    Tags,
}

/// Optional sections that have content, in display order.
pub fn visible_sections(summary: &Summary) -> Vec<SummarySection> {
    [
        (SummarySection::KeyPoints, summary.key_points.is_empty()),
        (SummarySection::CodeSamples, summary.code_samples.is_empty()),
        (SummarySection::Tags, summary.tags.is_empty()),
    ]
    .into_iter()
    .filter_map(|(section, empty)| (!empty).then_some(section))
    .collect()
}

/// One-based heading for a code sample.
pub fn code_sample_label(index: usize) -> String {
    format!("Code Sample {}", index + 1)
}

/// Text of the source link, including the question number when the URL has one.
pub fn source_link_label(source_url: &str) -> String {
    match question_id(source_url) {
        Some(id) => format!("View Original (#{id})"),
        None => "View Original".to_owned(),
    }
}

#[component]
pub fn SummaryDisplay(summary: Summary, on_ask_follow_up: Callback<()>) -> impl IntoView {
    let copy = RwSignal::new(CopyFeedback::default());
    let sections = visible_sections(&summary);
    let show = move |section: SummarySection| sections.contains(&section);
    let show_key_points = show(SummarySection::KeyPoints);
    let show_code = show(SummarySection::CodeSamples);
    let show_tags = show(SummarySection::Tags);

    let Summary { title, summary: body, key_points, code_samples, tags, source_url } = summary;

    let on_copy = move |index: usize, text: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::write_text(&text).await {
                Ok(()) => {
                    let Some(token) = copy.try_update(|c| c.mark_copied(index)) else {
                        return;
                    };
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        crate::state::copy::COPY_FEEDBACK_MS,
                    ))
                    .await;
                    copy.try_update(|c| c.expire(token));
                }
                Err(e) => log::error!("failed to copy code sample {index}: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (index, text);
    };

    let header_link = source_url.clone().map(|href| {
        let label = source_link_label(&href);
        view! {
            <a class="summary__source" href=href target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
    });
    let footer_link = source_url.map(|href| {
        view! {
            <a class="btn btn--secondary" href=href target="_blank" rel="noopener noreferrer">
                "View Original Question"
            </a>
        }
    });

    view! {
        <div class="summary">
            <div class="card summary__header">
                <div class="summary__heading">
                    <h2>{title}</h2>
                    {header_link}
                </div>
                <button type="button" class="btn btn--primary" on:click=move |_| on_ask_follow_up.run(())>
                    "Ask Follow-up"
                </button>
            </div>

            <div class="card">
                <h3>"Summary"</h3>
                <p class="summary__body">{body}</p>
            </div>

            {show_key_points
                .then(|| {
                    view! {
                        <div class="card">
                            <h3>"Key Points"</h3>
                            <ul class="summary__points">
                                {key_points.into_iter().map(|point| view! { <li>{point}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })}

            {show_code
                .then(|| {
                    view! {
                        <div class="card">
                            <h3>"Code Examples"</h3>
                            {code_samples
                                .into_iter()
                                .enumerate()
                                .map(|(index, code)| {
                                    let text = code.clone();
                                    view! {
                                        <div class="code-sample">
                                            <div class="code-sample__header">
                                                <span>{code_sample_label(index)}</span>
                                                <button
                                                    type="button"
                                                    class="code-sample__copy"
                                                    on:click=move |_| on_copy(index, text.clone())
                                                >
                                                    {move || copy_label(copy.with(|c| c.is_copied(index)))}
                                                </button>
                                            </div>
                                            <pre class="code-block">
                                                <code>{code}</code>
                                            </pre>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}

            {show_tags
                .then(|| {
                    view! {
                        <div class="card">
                            <h3>"Tags"</h3>
                            <div class="summary__tags">
                                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })}

            <div class="summary__actions">
                <button type="button" class="btn btn--primary" on:click=move |_| on_ask_follow_up.run(())>
                    "Ask Follow-up Question"
                </button>
                {footer_link}
            </div>
        </div>
    }
}
