//! Header Component
//!
//! Translucent blurred bar with the logo, pinned above the scrolling list.

use leptos::prelude::*;

use crate::chrome::LOGO_URL;
use crate::theme::{style, Style};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header" style=style(Style::Header)>
            <div class="header-backdrop" style=style(Style::Backdrop)></div>
            <img src=LOGO_URL alt="Star Wars API" style=style(Style::Logo) />
        </header>
    }
}
