use leptos::prelude::*;

use crate::theme::{style, Style};

/// Spinner shown while the dataset is in flight
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="progressbar" aria-label="Loading films" style=style(Style::Loading)></div>
    }
}
