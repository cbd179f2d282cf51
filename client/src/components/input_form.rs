//! Input form for a StackOverflow URL or a free-form question.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the transient `FormState`; validation happens here and only valid
//! requests reach the page through `on_submit`.

#[cfg(test)]
#[path = "input_form_test.rs"]
mod input_form_test;

use leptos::prelude::*;

use crate::net::types::SummarizeRequest;
use crate::state::form::{Field, FormState, InputMode};

/// Sample question URLs offered below the URL field.
pub const EXAMPLE_URLS: [&str; 3] = [
    "https://stackoverflow.com/questions/123456/how-to-use-fastapi",
    "https://stackoverflow.com/questions/789012/react-hooks-best-practices",
    "https://stackoverflow.com/questions/345678/python-async-await-tutorial",
];

fn submit_label(busy: bool) -> &'static str {
    if busy { "Generating Summary..." } else { "Generate Summary" }
}

/// Mode toggle, the active field with its inline error, and the submit button.
#[component]
pub fn InputForm(disabled: Signal<bool>, on_submit: Callback<SummarizeRequest>) -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        let (next, request) = form.with_untracked(FormState::submit);
        form.set(next);
        if let Some(request) = request {
            on_submit.run(request);
        }
    };

    let select_mode = move |mode: InputMode| form.update(|f| *f = f.with_mode(mode));
    let is_mode = move |mode: InputMode| form.with(|f| f.mode == mode);
    let field_error = move |field: Field| form.with(|f| f.error(field));

    view! {
        <div class="card input-form">
            <div class="input-form__intro">
                <h2>"Get AI-Powered Summary"</h2>
                <p>"Paste a StackOverflow URL or ask a technical question to get instant insights."</p>
            </div>

            <form class="input-form__form" on:submit=handle_submit>
                <div class="input-form__toggle">
                    <button
                        type="button"
                        class="input-form__mode"
                        class:input-form__mode--active=move || is_mode(InputMode::Url)
                        on:click=move |_| select_mode(InputMode::Url)
                    >
                        "StackOverflow URL"
                    </button>
                    <button
                        type="button"
                        class="input-form__mode"
                        class:input-form__mode--active=move || is_mode(InputMode::Question)
                        on:click=move |_| select_mode(InputMode::Question)
                    >
                        "Ask Question"
                    </button>
                </div>

                <Show when=move || is_mode(InputMode::Url)>
                    <div class="input-form__field">
                        <label for="url">"StackOverflow Question URL"</label>
                        <input
                            id="url"
                            type="url"
                            class="input-field"
                            class:input-field--error=move || field_error(Field::Url).is_some()
                            placeholder="https://stackoverflow.com/questions/123456/how-to-use-fastapi"
                            disabled=move || disabled.get()
                            prop:value=move || form.with(|f| f.url.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| *f = f.with_url(value));
                            }
                        />
                        {move || field_error(Field::Url).map(|e| view! { <p class="input-form__error">{e}</p> })}
                        <p class="input-form__hint">
                            "Paste a valid StackOverflow question URL to get a comprehensive summary."
                        </p>
                    </div>
                </Show>

                <Show when=move || is_mode(InputMode::Question)>
                    <div class="input-form__field">
                        <label for="question">"Your Technical Question"</label>
                        <textarea
                            id="question"
                            rows="4"
                            class="input-field"
                            class:input-field--error=move || field_error(Field::Question).is_some()
                            placeholder="Describe your technical problem or question in detail..."
                            disabled=move || disabled.get()
                            prop:value=move || form.with(|f| f.question.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| *f = f.with_question(value));
                            }
                        ></textarea>
                        {move || field_error(Field::Question).map(|e| view! { <p class="input-form__error">{e}</p> })}
                        <p class="input-form__hint">
                            "Ask any technical question and get AI-powered insights and solutions."
                        </p>
                    </div>
                </Show>

                <button type="submit" class="btn btn--primary input-form__submit" disabled=move || disabled.get()>
                    {move || submit_label(disabled.get())}
                </button>
            </form>

            <Show when=move || is_mode(InputMode::Url)>
                <div class="input-form__examples">
                    <h3>"Example URLs:"</h3>
                    <ul>
                        {EXAMPLE_URLS
                            .iter()
                            .map(|&example| {
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="input-form__example"
                                            disabled=move || disabled.get()
                                            on:click=move |_| form.update(|f| *f = f.with_url(example))
                                        >
                                            {example}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
