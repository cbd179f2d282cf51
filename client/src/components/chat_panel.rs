//! Follow-up chat panel seeded with the current summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns its `ChatState` for as long as it is mounted. A new summary
//! unmounts it, so replies that arrive afterwards find the state disposed and
//! are dropped.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Sender};
use crate::util::markdown;
use crate::util::time::{clock_label, now_ms};

/// Chat transcript with an input box; `context` is captured once at mount.
#[component]
pub fn ChatPanel(context: String) -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(context, now_ms()));
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.sending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(pending) = chat.try_update(|c| c.begin_send(now_ms())).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::chat(&crate::config::api_base_url(), &pending.request).await;
            chat.try_update(|c| c.finish_send(pending.ticket, result, now_ms()));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = pending;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let sending = move || chat.with(|c| c.sending);
    let can_send = move || chat.with(ChatState::can_send);

    view! {
        <div class="card chat-panel">
            <div class="chat-panel__intro">
                <h3>"Chat with AI"</h3>
                <p>"Ask follow-up questions about the summary"</p>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || chat.with(|c| c.messages.iter().map(message_view).collect::<Vec<_>>())}
                {move || {
                    sending()
                        .then(|| {
                            view! {
                                <div class="chat-panel__message chat-panel__message--ai">
                                    <div class="chat-panel__bubble chat-panel__thinking">"AI is thinking..."</div>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <textarea
                    class="input-field chat-panel__input"
                    rows="2"
                    placeholder="Type your follow-up question..."
                    disabled=sending
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.input = value);
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button type="button" class="btn btn--primary chat-panel__send" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>

            <p class="chat-panel__hint">"Press Enter to send, Shift+Enter for new line"</p>
        </div>
    }
}

fn message_view(message: &ChatMessage) -> AnyView {
    let is_user = message.sender == Sender::User;
    let time = clock_label(message.timestamp);
    let body = if is_user {
        view! { <p class="chat-panel__text">{message.content.clone()}</p> }.into_any()
    } else {
        let rendered = markdown::to_safe_html(&message.content);
        view! { <div class="chat-panel__text chat-panel__markdown" inner_html=rendered></div> }.into_any()
    };

    view! {
        <div
            class="chat-panel__message"
            class:chat-panel__message--user=is_user
            class:chat-panel__message--ai=!is_user
        >
            <div class="chat-panel__bubble">
                {body}
                <p class="chat-panel__time">{time}</p>
            </div>
        </div>
    }
    .into_any()
}
