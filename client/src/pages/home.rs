//! Home page: submit a question, read its summary, chat about it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the input form, loading spinner, error banner, summary, and chat
//! panel around the shared `SummaryState`. Summarize requests are issued here
//! and their results applied through the state's ticket check.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::input_form::InputForm;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::site_header::SiteHeader;
use crate::components::summary_display::SummaryDisplay;
use crate::net::types::{SummarizeRequest, Summary};
use crate::state::summary::{Panel, SummaryState};

#[component]
pub fn HomePage() -> impl IntoView {
    let page = expect_context::<RwSignal<SummaryState>>();

    let on_submit = Callback::new(move |request: SummarizeRequest| {
        let Some(ticket) = page.try_update(SummaryState::begin_request) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::summarize(&crate::config::api_base_url(), &request).await;
            if !page.try_update(|s| s.finish_request(ticket, result)).unwrap_or(false) {
                log::debug!("discarded stale summarize response");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, request);
    });

    let on_ask_follow_up = Callback::new(move |()| page.update(SummaryState::ask_follow_up));

    let loading = Signal::derive(move || page.with(|s| s.loading));
    let panel = Memo::new(move |_| page.with(SummaryState::panel));
    let summary = Memo::new(move |_| page.with(|s| s.summary.clone()));
    let chat_context = Memo::new(move |_| {
        page.with(|s| if s.chat_open() { s.summary.as_ref().map(Summary::chat_context) } else { None })
    });

    view! {
        <div class="page">
            <SiteHeader/>

            <main class="page__main">
                <section class="page__intro">
                    <h1>"AI StackOverflow Summarizer"</h1>
                    <p>
                        "Paste a StackOverflow URL or ask a technical question to get an AI-powered summary and key insights."
                    </p>
                </section>

                <InputForm disabled=loading on_submit=on_submit/>

                {move || match panel.get() {
                    Panel::Loading => Some(view! { <LoadingSpinner/> }.into_any()),
                    Panel::Error => {
                        let message = page.with(|s| s.error.clone()).unwrap_or_default();
                        Some(
                            view! {
                                <div class="card error-banner" role="alert">
                                    <p>{message}</p>
                                </div>
                            }
                                .into_any(),
                        )
                    }
                    Panel::Summary => summary
                        .get()
                        .map(|summary| view! { <SummaryDisplay summary=summary on_ask_follow_up=on_ask_follow_up/> }.into_any()),
                    Panel::Empty => None,
                }}

                {move || chat_context.get().map(|context| view! { <ChatPanel context=context/> })}
            </main>

            <footer class="page__footer">
                <p>"Built with Leptos and Axum"</p>
                <p class="page__footer-note">"Summaries are generated by the summarizer backend."</p>
            </footer>
        </div>
    }
}
