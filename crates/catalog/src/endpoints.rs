//! Catalog endpoint URLs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::query::Query;

/// Base URL of the CheapShark JSON API.
pub const DEFAULT_API_BASE: &str = "https://www.cheapshark.com/api/1.0";

/// Base URL of the CheapShark site (hosts the deal redirector).
pub const DEFAULT_SITE_BASE: &str = "https://www.cheapshark.com";

/// Number of results requested per search.
pub const PAGE_SIZE: u32 = 8;

/// Characters escaped in the title parameter.
///
/// Same set as JavaScript's `encodeURIComponent`: everything except
/// alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// API and site base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    site_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_SITE_BASE)
    }
}

impl Endpoints {
    /// Creates endpoints from explicit bases. Trailing slashes are dropped.
    pub fn new(api_base: &str, site_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            site_base: site_base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` URL for a title search.
    pub fn search_url(&self, query: &Query) -> String {
        let title = utf8_percent_encode(query.as_str(), COMPONENT);
        format!(
            "{}/games?title={title}&pageSize={PAGE_SIZE}",
            self.api_base
        )
    }

    /// Redirect link for a deal.
    ///
    /// CheapShark deal ids arrive already URL-encoded, so the id is
    /// inserted verbatim.
    pub fn deal_url(&self, deal_id: &str) -> String {
        format!("{}/redirect?dealID={deal_id}", self.site_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Query {
        Query::parse(s).unwrap()
    }

    #[test]
    fn search_url_default_base() {
        let url = Endpoints::default().search_url(&q("portal"));
        assert_eq!(
            url,
            "https://www.cheapshark.com/api/1.0/games?title=portal&pageSize=8"
        );
    }

    #[test]
    fn search_url_encodes_like_uri_component() {
        let url = Endpoints::default().search_url(&q("half-life 2: ep.1 (gold)!"));
        assert!(
            url.ends_with("title=half-life%202%3A%20ep.1%20(gold)!&pageSize=8"),
            "{url}"
        );
    }

    #[test]
    fn search_url_encodes_reserved_and_unicode() {
        let url = Endpoints::default().search_url(&q("a&b=c/é"));
        assert!(url.contains("title=a%26b%3Dc%2F%C3%A9&"), "{url}");
    }

    #[test]
    fn deal_url_inserts_id() {
        let url = Endpoints::default().deal_url("123");
        assert_eq!(url, "https://www.cheapshark.com/redirect?dealID=123");
    }

    #[test]
    fn deal_url_keeps_encoded_id() {
        let url = Endpoints::default().deal_url("tyTH88J0PXRvYALB%3D");
        assert!(url.ends_with("dealID=tyTH88J0PXRvYALB%3D"));
    }

    #[test]
    fn custom_bases_drop_trailing_slash() {
        let e = Endpoints::new("http://127.0.0.1:9000/api/", "http://127.0.0.1:9000/");
        assert_eq!(
            e.search_url(&q("x")),
            "http://127.0.0.1:9000/api/games?title=x&pageSize=8"
        );
        assert_eq!(e.deal_url("x"), "http://127.0.0.1:9000/redirect?dealID=x");
    }
}
