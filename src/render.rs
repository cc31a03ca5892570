//! Render Mapping
//!
//! Pure translation from `ViewState` to the ordered blocks the screen shows.
//! Components only draw what this produces.

use crate::models::{Character, Film};
use crate::state::ViewState;
use crate::text::normalize_text;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Loading,
    Failed { message: String },
    Film(FilmCardData),
}

impl Block {
    /// List key; film keys are the server ids
    pub fn key(&self) -> String {
        match self {
            Block::Loading => "loading".to_string(),
            Block::Failed { .. } => "failed".to_string(),
            Block::Film(card) => format!("film-{}", card.key),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilmCardData {
    pub key: String,
    pub heading: String,
    pub subtitle: String,
    /// Crawl text with forced line breaks removed
    pub body: String,
    pub characters: Vec<CharacterChipData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterChipData {
    pub key: String,
    pub label: String,
}

impl From<&Film> for FilmCardData {
    fn from(film: &Film) -> Self {
        Self {
            key: film.id.to_string(),
            heading: format!("Episode {}", film.episode_id),
            subtitle: film.title.clone(),
            body: normalize_text(&film.opening_crawl),
            characters: film.characters.iter().map(CharacterChipData::from).collect(),
        }
    }
}

impl From<&Character> for CharacterChipData {
    fn from(character: &Character) -> Self {
        Self {
            key: character.id.to_string(),
            label: character.name.clone(),
        }
    }
}

pub fn render_plan(state: &ViewState) -> Vec<Block> {
    match state {
        ViewState::Unloaded => vec![Block::Loading],
        ViewState::Loaded(result) => result
            .all_films
            .iter()
            .map(|film| Block::Film(FilmCardData::from(film)))
            .collect(),
        ViewState::Failed(err) => vec![Block::Failed {
            message: err.user_message().to_string(),
        }],
    }
}
