//! Films Query
//!
//! The single dataset the app shows: every film, ordered by episode,
//! with its characters.

use tracing::info;

use super::execute;
use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::models::QueryResult;

pub const FILMS_QUERY: &str = r#"
query films {
  allFilms(orderBy: episodeId_ASC) {
    id
    episodeId
    title
    openingCrawl
    characters {
      id
      name
    }
  }
}
"#;

/// Fetch all films. Order is the server's; the client never re-sorts.
pub async fn fetch_dataset(config: &ClientConfig) -> Result<QueryResult, FetchError> {
    let result: QueryResult = execute(config, FILMS_QUERY).await?;
    info!(films = result.all_films.len(), "films query complete");
    Ok(result)
}
