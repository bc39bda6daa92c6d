//! CheapShark API client.
//!
//! Async HTTP client using `reqwest`. One request per search, no retries,
//! no timeout, no caching.

use serde_json::Value;
use tracing::debug;

use crate::endpoints::Endpoints;
use crate::query::Query;
use crate::types::GameRecord;

/// Errors from the catalog client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CheapShark catalog client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl Client {
    /// Creates a client against the public CheapShark endpoints.
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dealcards/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoints: Endpoints::default(),
        })
    }

    /// Replaces the endpoint bases.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[cfg(test)]
    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Performs a GET request and returns the body of a 2xx response.
    async fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Searches games by title.
    ///
    /// An empty vector means the catalog had nothing for this title, which
    /// includes bodies that are valid JSON but not a list.
    pub async fn search(&self, query: &Query) -> Result<Vec<GameRecord>, Error> {
        let url = self.endpoints.search_url(query);
        debug!(%url, "searching catalog");

        let body = self.get(&url).await?;
        let records = parse_records(&body)?;
        debug!(query = %query, count = records.len(), "catalog search decoded");
        Ok(records)
    }
}

/// Decodes a `games` response body.
///
/// Only malformed JSON is an error. Anything other than an array yields no
/// records, and array elements that are not objects become empty records.
pub fn parse_records(body: &[u8]) -> Result<Vec<GameRecord>, Error> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Array(items) = value else {
        debug!("catalog response is not a list");
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_record(index, item))
        .collect())
}

fn decode_record(index: usize, item: Value) -> GameRecord {
    if !item.is_object() {
        debug!(index, "catalog entry is not an object");
        return GameRecord::default();
    }
    match serde_json::from_value(item) {
        Ok(record) => record,
        Err(e) => {
            debug!(index, error = %e, "catalog entry did not decode");
            GameRecord::default()
        }
    }
}
