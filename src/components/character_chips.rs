//! Character Chips Component
//!
//! Wrapped row of character names under a film.

use leptos::prelude::*;

use crate::render::CharacterChipData;
use crate::theme::{style, Style};

#[component]
pub fn CharacterChips(characters: Vec<CharacterChipData>) -> impl IntoView {
    view! {
        <div style=style(Style::Info)>
            <span style=style(Style::InfoTitle)>"Characters:"</span>
            <div style=style(Style::Row)>
                <For
                    each=move || characters.clone()
                    key=|chip| chip.key.clone()
                    children=|chip| {
                        view! {
                            <div class="character-chip" style=style(Style::Character)>
                                <span style=style(Style::TextLight)>{chip.label}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
