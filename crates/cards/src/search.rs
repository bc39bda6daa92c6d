//! Search flow: trigger → fetch → render → animate.
//!
//! Fetches run as independent tokio tasks and report back over a channel;
//! the owner of the surface applies each [`Resolved`] in arrival order.
//! Nothing is cancelled, so when searches overlap the last one to resolve
//! wins, not the last one issued.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use dealcards_catalog::{Client, Endpoints, Error as CatalogError, GameRecord, Query};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::animation::Animator;
use crate::input::{self, Submission};
use crate::render::render;
use crate::state::{EMPTY_QUERY_PROMPT, ViewState};
use crate::surface::Surface;

/// Future returned by [`Catalog::search`].
pub type CatalogFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<GameRecord>, CatalogError>> + Send + 'a>>;

/// Source of search results.
///
/// Implemented by the HTTP [`Client`]; tests provide scripted catalogs.
pub trait Catalog: Send + Sync {
    fn search<'a>(&'a self, query: &'a Query) -> CatalogFuture<'a>;
}

impl Catalog for Client {
    fn search<'a>(&'a self, query: &'a Query) -> CatalogFuture<'a> {
        Box::pin(Client::search(self, query))
    }
}

/// How a fetch ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<GameRecord>),
    /// Empty list, or a body that was not a list.
    Empty,
    /// Network, status or decoding failure. Details only go to the log.
    Failed,
}

/// A finished fetch, ready to be applied to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub query: Query,
    pub outcome: SearchOutcome,
}

/// Runs one catalog request and classifies the result.
pub async fn fetch(catalog: &dyn Catalog, query: &Query) -> SearchOutcome {
    match catalog.search(query).await {
        Ok(records) if records.is_empty() => SearchOutcome::Empty,
        Ok(records) => SearchOutcome::Found(records),
        Err(e) => {
            error!(query = %query, error = %e, "error fetching games");
            SearchOutcome::Failed
        }
    }
}

/// Spawns fetches and funnels their results into one channel.
pub struct Dispatcher {
    catalog: Arc<dyn Catalog>,
    tx: mpsc::UnboundedSender<Resolved>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiver its results arrive on.
    pub fn new(catalog: Arc<dyn Catalog>) -> (Self, mpsc::UnboundedReceiver<Resolved>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { catalog, tx }, rx)
    }

    /// Starts a fetch. Earlier fetches keep running.
    pub fn dispatch(&self, query: Query) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = fetch(catalog.as_ref(), &query).await;
            if tx.send(Resolved { query, outcome }).is_err() {
                debug!("search result dropped, receiver closed");
            }
        })
    }
}

/// Applies search transitions to a surface.
pub struct SearchFlow {
    endpoints: Endpoints,
    animator: Box<dyn Animator>,
}

impl SearchFlow {
    /// `endpoints` is used for deal links; `animator` is fixed for the
    /// lifetime of the flow.
    pub fn new(endpoints: Endpoints, animator: Box<dyn Animator>) -> Self {
        Self {
            endpoints,
            animator,
        }
    }

    /// Handles a search trigger with the input's current value.
    ///
    /// Returns the query to fetch, or `None` after showing the prompt for
    /// blank input. Blank input leaves the cards untouched.
    pub fn trigger(&self, surface: &mut dyn Surface, input_value: &str) -> Option<Query> {
        match input::submit(input_value) {
            Submission::Prompt => {
                surface.set_status(EMPTY_QUERY_PROMPT);
                None
            }
            Submission::Search(query) => {
                self.begin(surface, &query);
                Some(query)
            }
        }
    }

    /// Enters the searching state: status updated, cards cleared.
    pub fn begin(&self, surface: &mut dyn Surface, query: &Query) -> ViewState {
        let state = ViewState::Searching(query.clone());
        surface.set_status(&state.status_text());
        surface.clear_cards();
        state
    }

    /// Applies a finished fetch.
    ///
    /// Every outcome overwrites the cards, so the surface always reflects
    /// the most recently applied result.
    pub fn finish(&self, surface: &mut dyn Surface, resolved: Resolved, now: Instant) -> ViewState {
        let Resolved { query, outcome } = resolved;
        let state = match outcome {
            SearchOutcome::Found(records) => {
                render(surface, &records, &self.endpoints);
                ViewState::Shown {
                    query,
                    count: records.len(),
                }
            }
            SearchOutcome::Empty => {
                surface.clear_cards();
                ViewState::Empty(query)
            }
            SearchOutcome::Failed => {
                surface.clear_cards();
                ViewState::Failed
            }
        };

        surface.set_status(&state.status_text());
        if matches!(state, ViewState::Shown { .. }) {
            self.animator.animate(surface, now);
        }
        state
    }

    /// Runs a whole search in place, without a dispatcher.
    ///
    /// Returns `None` when the input was blank.
    pub async fn search(
        &self,
        surface: &mut dyn Surface,
        catalog: &dyn Catalog,
        input_value: &str,
    ) -> Option<ViewState> {
        let query = self.trigger(surface, input_value)?;
        let outcome = fetch(catalog, &query).await;
        Some(self.finish(surface, Resolved { query, outcome }, Instant::now()))
    }
}
