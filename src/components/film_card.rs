//! Film Card Component
//!
//! One film: episode heading, title, crawl text and its characters.

use leptos::prelude::*;

use crate::components::CharacterChips;
use crate::render::FilmCardData;
use crate::theme::{style, Style};

#[component]
pub fn FilmCard(card: FilmCardData) -> impl IntoView {
    let FilmCardData { heading, subtitle, body, characters, .. } = card;

    view! {
        <div class="film-card" style=style(Style::FilmContainer)>
            <span style=style(Style::Title)>{heading}</span>
            <span style=style(Style::Subtitle)>{subtitle}</span>
            <div style=style(Style::Content)>
                <p style=style(Style::Text)>{body}</p>
                <CharacterChips characters=characters />
            </div>
        </div>
    }
}
