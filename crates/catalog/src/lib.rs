//! CheapShark catalog client for game price search.
//!
//! Provides an async client for the [CheapShark](https://www.cheapshark.com)
//! API v1.0 `games` endpoint plus the URL helpers for deal redirect links.

pub mod client;
pub mod endpoints;
pub mod query;
pub mod types;

pub use client::{Client, Error, parse_records};
pub use endpoints::{Endpoints, PAGE_SIZE};
pub use query::{Query, QueryError};
pub use types::GameRecord;
