//! GraphQL Transport
//!
//! One POST per query document, JSON envelope in and out.
//! Query-specific bindings live in submodules.

mod films;

pub use films::fetch_dataset;

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Longest slice of an error body kept in a `FetchError::Server` message
const MAX_ERROR_BODY: usize = 200;

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    /// Always present on the wire, `null` when the document takes no variables
    variables: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

// ========================
// Execution
// ========================

/// Send `document` to the configured endpoint and decode its `data` payload.
pub async fn execute<T: DeserializeOwned>(
    config: &ClientConfig,
    document: &str,
) -> Result<T, FetchError> {
    let client = build_client(config)?;
    let request = client.post(&config.endpoint).json(&QueryBody {
        query: document,
        variables: None,
    });

    let exchange = async move {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok::<_, FetchError>((status, body))
    };
    let (status, body) = bounded(config.timeout(), exchange).await?;
    debug!(status = status.as_u16(), bytes = body.len(), "graphql response received");

    if !status.is_success() {
        return Err(FetchError::Server {
            status: status.as_u16(),
            message: truncate(body.trim(), MAX_ERROR_BODY),
        });
    }

    decode_envelope(status.as_u16(), &body)
}

fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    let messages = envelope
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect::<Vec<_>>();

    match envelope.data {
        Some(data) => {
            if !messages.is_empty() {
                warn!(errors = ?messages, "graphql response carried partial errors");
            }
            Ok(data)
        }
        None if !messages.is_empty() => Err(FetchError::Server {
            status,
            message: messages.join("; "),
        }),
        None => Err(FetchError::Parse("response has no `data` field".to_string())),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn build_client(config: &ClientConfig) -> Result<reqwest::Client, FetchError> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = match config.timeout() {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    #[cfg(target_arch = "wasm32")]
    let _ = config;
    Ok(builder.build()?)
}

/// Race the exchange against a browser timer; the fetch backend has no timeout of its own.
#[cfg(target_arch = "wasm32")]
async fn bounded<T, F>(timeout: Option<Duration>, exchange: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let Some(limit) = timeout else {
        return exchange.await;
    };
    let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
    let timer = TimeoutFuture::new(millis);
    futures::pin_mut!(exchange, timer);

    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Network(format!(
            "request timed out after {} ms",
            millis
        ))),
    }
}

/// Native builds enforce the timeout in the client builder.
#[cfg(not(target_arch = "wasm32"))]
async fn bounded<T, F>(_timeout: Option<Duration>, exchange: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    exchange.await
}
