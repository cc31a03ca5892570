//! Frontend Models
//!
//! Data structures matching the GraphQL `allFilms` payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier as sent by the server.
///
/// Only ever used as a list key, so both JSON strings and integers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Text(String),
    Number(i64),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Text(id) => f.write_str(id),
            EntityId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// Full payload of the films query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "allFilms")]
    pub all_films: Vec<Film>,
}

/// One film, in the order the server returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: EntityId,
    #[serde(rename = "episodeId")]
    pub episode_id: i64,
    pub title: String,
    /// Raw crawl text, CRLF line breaks included
    #[serde(rename = "openingCrawl", default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "allFilms": [{
                "id": "cj0nxmy3fga5s01148gf8iy3c",
                "episodeId": 4,
                "title": "A New Hope",
                "openingCrawl": "It is a period of civil war.\r\nRebel spaceships",
                "characters": [{ "id": 1, "name": "Luke Skywalker" }]
            }]
        }"#;

        let result: QueryResult = serde_json::from_str(json).unwrap();
        let film = &result.all_films[0];
        assert_eq!(film.id, EntityId::Text("cj0nxmy3fga5s01148gf8iy3c".to_string()));
        assert_eq!(film.episode_id, 4);
        assert_eq!(film.characters[0].id, EntityId::Number(1));
        assert_eq!(film.characters[0].id.to_string(), "1");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{ "allFilms": [{ "id": "x", "episodeId": 1, "title": "T" }] }"#;
        let result: QueryResult = serde_json::from_str(json).unwrap();
        assert!(result.all_films[0].opening_crawl.is_empty());
        assert!(result.all_films[0].characters.is_empty());
    }
}
