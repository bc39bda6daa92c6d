//! Validated search query.

use std::fmt;
use std::str::FromStr;

/// Errors from query validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,
}

/// A trimmed, non-empty game title query.
///
/// The only way to obtain one is through [`Query::parse`], so holding a
/// `Query` means the input already passed the emptiness check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trims surrounding whitespace (including the BOM) and rejects empty
    /// input.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let q = Query::parse("  portal 2 \t").unwrap();
        assert_eq!(q.as_str(), "portal 2");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Query::parse(""), Err(QueryError::Empty));
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        for raw in [" ", "\t", "\n  \r\n", "\u{3000}"] {
            assert_eq!(Query::parse(raw), Err(QueryError::Empty), "input {raw:?}");
        }
    }

    #[test]
    fn parse_strips_byte_order_mark() {
        assert_eq!(Query::parse("\u{feff}"), Err(QueryError::Empty));
        assert_eq!(Query::parse(" \u{feff}\t"), Err(QueryError::Empty));
        let q = Query::parse("\u{feff}portal\u{feff} ").unwrap();
        assert_eq!(q.as_str(), "portal");
    }

    #[test]
    fn inner_whitespace_kept() {
        let q: Query = "half   life".parse().unwrap();
        assert_eq!(q.to_string(), "half   life");
    }
}
