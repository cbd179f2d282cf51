//! Top bar with the product name.

use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <span class="site-header__logo">"SO"</span>
                <span class="site-header__name">"StackOverflow Summarizer"</span>
            </div>
        </header>
    }
}
