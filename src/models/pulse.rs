//! Pulse data structures.
//!
//! `RawPage` and friends mirror the wire shape of one paginated API
//! response and live only for the iteration that fetched them. `Pulse`
//! is the fixed-shape record written to the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of the paginated API response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    /// Pulses on this page, in API order.
    #[serde(default)]
    pub results: Vec<RawPulse>,

    /// Opaque indicator that more pages exist; absent or null on the
    /// last page.
    #[serde(default)]
    pub next: Option<String>,
}

impl RawPage {
    /// Whether the API advertised a further page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A pulse as the API returns it: every field optional, lists defaulting
/// to empty when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPulse {
    /// External identifier. Arrives as a string from the pulse API and
    /// as a number from its sibling catalog API, so it is kept untyped
    /// until normalization.
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Creation time as reported by the source, passed through verbatim.
    #[serde(default)]
    pub created: Option<String>,

    /// Last modification time as reported by the source.
    #[serde(default)]
    pub modified: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub references: Vec<String>,

    #[serde(default)]
    pub targeted_countries: Vec<String>,

    #[serde(default)]
    pub indicators: Vec<RawIndicator>,
}

/// An indicator embedded in a raw pulse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIndicator {
    #[serde(default)]
    pub indicator: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A normalized pulse, keyed by `id` for upserts.
///
/// Optional scalars serialize as explicit nulls and lists as `[]`, never
/// as absent keys, so repeated syncs overwrite stale values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pulse {
    /// Stable external identifier; the upsert key.
    pub id: String,

    /// Pulse title
    pub name: Option<String>,

    /// Author display name
    pub author_name: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// Source creation time
    pub created: Option<String>,

    /// Source modification time
    pub modified: Option<String>,

    /// Classification tags
    pub tags: Vec<String>,

    /// Reference URLs
    pub references: Vec<String>,

    /// ISO country codes targeted by the threat
    pub targeted_countries: Vec<String>,

    /// Indicators of compromise attached to the pulse
    pub indicators: Vec<Indicator>,

    /// When this copy was normalized, not when the source created it.
    pub ingestion_timestamp: DateTime<Utc>,
}

/// A normalized indicator of compromise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Indicator {
    /// The indicator value itself (IP, domain, hash, ...)
    pub indicator: Option<String>,

    /// Indicator type label
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Short title
    pub title: Option<String>,

    /// Free-text description
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let raw: RawPulse = serde_json::from_str(r#"{"id": "abc", "name": "A"}"#).unwrap();
        assert!(raw.tags.is_empty());
        assert!(raw.references.is_empty());
        assert!(raw.targeted_countries.is_empty());
        assert!(raw.indicators.is_empty());
    }

    #[test]
    fn test_missing_scalars_default_to_none() {
        let raw: RawPulse = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert!(raw.name.is_none());
        assert!(raw.author_name.is_none());
        assert!(raw.modified.is_none());
    }

    #[test]
    fn test_page_without_next() {
        let page: RawPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(!page.has_next());

        let page: RawPage = serde_json::from_str(r#"{"results": [], "next": null}"#).unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn test_numeric_id_survives_parsing() {
        let raw: RawPulse = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(raw.id, Some(Value::from(42)));
    }

    #[test]
    fn test_none_serializes_as_null() {
        let pulse = Pulse {
            id: "p1".to_string(),
            name: None,
            author_name: None,
            description: None,
            created: None,
            modified: None,
            tags: vec![],
            references: vec![],
            targeted_countries: vec![],
            indicators: vec![],
            ingestion_timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&pulse).unwrap();
        assert!(json.get("name").unwrap().is_null());
        assert!(json.get("tags").unwrap().as_array().unwrap().is_empty());
    }
}
