//! View state and status line text.

use dealcards_catalog::Query;

/// Status shown when a search is triggered with nothing typed.
pub const EMPTY_QUERY_PROMPT: &str = "Please type a game title first.";

/// Status shown for any network or decoding failure.
pub const FAILURE_MESSAGE: &str = "Error loading games. Please try again.";

/// Where the widget is in the search lifecycle.
///
/// A fresh state replaces the previous one on every search transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Searching(Query),
    Shown { query: Query, count: usize },
    Empty(Query),
    Failed,
}

impl ViewState {
    /// Text for the status region.
    pub fn status_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Searching(query) => format!("Searching for \"{query}\"..."),
            Self::Shown { query, count } => {
                format!("Showing {count} result(s) for \"{query}\".")
            }
            Self::Empty(query) => format!("No results found for \"{query}\"."),
            Self::Failed => FAILURE_MESSAGE.to_string(),
        }
    }
}
