//! API response types for the CheapShark `games` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A game entry from a title search.
///
/// Every field is optional on the wire. `null`, a missing key, and an empty
/// string all decode to `None`; numeric ids decode to their string form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "gameID", default, deserialize_with = "opt_text")]
    pub game_id: Option<String>,
    #[serde(rename = "external", default, deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_price")]
    pub cheapest: Option<f64>,
    #[serde(rename = "cheapestDealID", default, deserialize_with = "opt_text")]
    pub cheapest_deal_id: Option<String>,
    #[serde(rename = "steamAppID", default, deserialize_with = "opt_text")]
    pub steam_app_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub thumb: Option<String>,
}

fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Prices come back as strings (`"19.99"`) but numbers are accepted too.
fn opt_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let price = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_record_full() {
        let json = r#"{
            "gameID": "612",
            "steamAppID": "400",
            "cheapest": "19.99",
            "cheapestDealID": "tyTH88J0PXRvYALB%3D",
            "external": "Portal",
            "internalName": "PORTAL",
            "thumb": "https://cdn.example.com/portal.jpg"
        }"#;
        let rec: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.game_id.as_deref(), Some("612"));
        assert_eq!(rec.title.as_deref(), Some("Portal"));
        assert_eq!(rec.cheapest, Some(19.99));
        assert_eq!(rec.cheapest_deal_id.as_deref(), Some("tyTH88J0PXRvYALB%3D"));
        assert_eq!(rec.steam_app_id.as_deref(), Some("400"));
        assert_eq!(rec.thumb.as_deref(), Some("https://cdn.example.com/portal.jpg"));
    }

    #[test]
    fn game_record_all_missing() {
        let rec: GameRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(rec, GameRecord::default());
    }

    #[test]
    fn nulls_and_empty_strings_are_absent() {
        let json = r#"{
            "external": "",
            "cheapest": null,
            "cheapestDealID": "",
            "steamAppID": null,
            "thumb": ""
        }"#;
        let rec: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec, GameRecord::default());
    }

    #[test]
    fn numeric_price_and_ids() {
        let json = r#"{"cheapest": 19.9, "steamAppID": 620, "gameID": 7}"#;
        let rec: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.cheapest, Some(19.9));
        assert_eq!(rec.steam_app_id.as_deref(), Some("620"));
        assert_eq!(rec.game_id.as_deref(), Some("7"));
    }

    #[test]
    fn unparseable_price_is_absent() {
        for raw in [r#""free""#, r#""NaN""#, r#""inf""#, "true", "[]"] {
            let json = format!(r#"{{"cheapest": {raw}}}"#);
            let rec: GameRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(rec.cheapest, None, "price {raw}");
        }
    }

    #[test]
    fn zero_price_is_kept() {
        let rec: GameRecord = serde_json::from_str(r#"{"cheapest": "0.00"}"#).unwrap();
        assert_eq!(rec.cheapest, Some(0.0));
    }
}
