//! Error Card Component
//!
//! Shown when the fetch failed. The retry button starts exactly one new fetch.

use leptos::prelude::*;

use crate::context::use_view_context;
use crate::theme::{style, Style};

#[component]
pub fn ErrorCard(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_view_context();

    view! {
        <div class="error-card" role="alert" style=style(Style::ErrorCard)>
            <p>{message}</p>
            <button
                class="retry-btn"
                style=style(Style::RetryButton)
                on:click=move |_| ctx.retry()
            >
                "Retry"
            </button>
        </div>
    }
}
