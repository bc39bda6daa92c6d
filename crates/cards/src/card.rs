//! Card view model built from a catalog record.

use dealcards_catalog::{Endpoints, GameRecord};

pub const UNKNOWN_TITLE: &str = "Unknown title";
pub const NO_STEAM_ID: &str = "No Steam ID listed";
pub const PRICE_UNAVAILABLE: &str = "N/A";
pub const DEAL_LABEL: &str = "View Deal";

/// Link relation applied to outbound deal links.
pub const DEAL_REL: &str = "noopener noreferrer";

/// Outbound link to the cheapest deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealLink {
    pub url: String,
    pub label: &'static str,
    /// Opened in a new browsing context rather than replacing the page.
    pub new_context: bool,
    pub rel: &'static str,
}

/// Everything needed to draw one result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Thumbnail source; may be empty.
    pub thumb: String,
    pub thumb_alt: String,
    pub title: String,
    pub steam_line: String,
    /// `$` + two decimals, or `N/A`.
    pub price: String,
    pub deal: Option<DealLink>,
}

impl Card {
    pub fn from_record(record: &GameRecord, endpoints: &Endpoints) -> Self {
        let title = record
            .title
            .clone()
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let steam_line = match &record.steam_app_id {
            Some(id) => format!("Steam App ID: {id}"),
            None => NO_STEAM_ID.to_string(),
        };

        let deal = record.cheapest_deal_id.as_deref().map(|id| DealLink {
            url: endpoints.deal_url(id),
            label: DEAL_LABEL,
            new_context: true,
            rel: DEAL_REL,
        });

        Self {
            thumb: record.thumb.clone().unwrap_or_default(),
            thumb_alt: title.clone(),
            title,
            steam_line,
            price: format_price(record.cheapest),
            deal,
        }
    }
}

/// Formats a price with a currency prefix and exactly two decimals.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${p:.2}"),
        None => PRICE_UNAVAILABLE.to_string(),
    }
}
