//! UI Components
//!
//! Leptos components for the film list screen.

mod header;
mod film_card;
mod character_chips;
mod loading_indicator;
mod error_card;

pub use header::Header;
pub use film_card::FilmCard;
pub use character_chips::CharacterChips;
pub use loading_indicator::LoadingIndicator;
pub use error_card::ErrorCard;
