//! Spinner shown while a summary is being generated.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" aria-busy="true">
            <div class="loading-spinner__ring"></div>
            <p class="loading-spinner__label">"Analyzing and summarizing..."</p>
        </div>
    }
}
