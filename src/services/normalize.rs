// src/services/normalize.rs

//! Pulse normalization.
//!
//! Maps one raw page into fixed-shape [`Pulse`] records, in input order,
//! stamping each with the ingestion time. Pure: no I/O, no retained state.

use chrono::Utc;
use serde_json::Value;

use crate::models::{Indicator, Pulse, RawIndicator, RawPage, RawPulse};

/// Normalize every usable record on a page.
///
/// Records without a usable external id are dropped; the id is the
/// upsert key and a record without one cannot be persisted. Output order
/// matches input order.
pub fn normalize_page(page: &RawPage) -> Vec<Pulse> {
    page.results.iter().filter_map(normalize_pulse).collect()
}

fn normalize_pulse(raw: &RawPulse) -> Option<Pulse> {
    let id = raw.id.as_ref().and_then(id_to_string)?;

    Some(Pulse {
        id,
        name: raw.name.clone(),
        author_name: raw.author_name.clone(),
        description: raw.description.clone(),
        created: raw.created.clone(),
        modified: raw.modified.clone(),
        tags: raw.tags.clone(),
        references: raw.references.clone(),
        targeted_countries: raw.targeted_countries.clone(),
        indicators: raw.indicators.iter().map(normalize_indicator).collect(),
        ingestion_timestamp: Utc::now(),
    })
}

fn normalize_indicator(raw: &RawIndicator) -> Indicator {
    Indicator {
        indicator: raw.indicator.clone(),
        kind: raw.kind.clone(),
        title: raw.title.clone(),
        description: raw.description.clone(),
    }
}

/// Coerce an external id to its string form.
///
/// The pulse API sends string ids, its sibling catalog API numeric ones;
/// both must upsert against the same key shape.
fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_from_json(json: serde_json::Value) -> RawPage {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_empty_page_normalizes_to_nothing() {
        let page = page_from_json(serde_json::json!({"results": []}));
        assert!(normalize_page(&page).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let page = page_from_json(serde_json::json!({
            "results": [{"id": "c"}, {"id": "a"}, {"id": "b"}]
        }));
        let ids: Vec<_> = normalize_page(&page).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let page = page_from_json(serde_json::json!({
            "results": [{"id": "p1", "name": "A"}]
        }));
        let pulses = normalize_page(&page);
        assert_eq!(pulses.len(), 1);
        let pulse = &pulses[0];
        assert_eq!(pulse.name.as_deref(), Some("A"));
        assert!(pulse.author_name.is_none());
        assert!(pulse.tags.is_empty());
        assert!(pulse.indicators.is_empty());
    }

    #[test]
    fn test_numeric_ids_coerce_to_strings() {
        let page = page_from_json(serde_json::json!({
            "results": [{"id": 7, "name": "numeric"}]
        }));
        let pulses = normalize_page(&page);
        assert_eq!(pulses[0].id, "7");
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        let page = page_from_json(serde_json::json!({
            "results": [{"name": "no id"}, {"id": null}, {"id": ""}, {"id": "kept"}]
        }));
        let pulses = normalize_page(&page);
        assert_eq!(pulses.len(), 1);
        assert_eq!(pulses[0].id, "kept");
    }

    #[test]
    fn test_indicators_are_normalized() {
        let page = page_from_json(serde_json::json!({
            "results": [{
                "id": "p1",
                "indicators": [
                    {"indicator": "1.2.3.4", "type": "IPv4"},
                    {"title": "only a title"}
                ]
            }]
        }));
        let pulses = normalize_page(&page);
        let indicators = &pulses[0].indicators;
        assert_eq!(indicators.len(), 2);
        assert_eq!(indicators[0].indicator.as_deref(), Some("1.2.3.4"));
        assert_eq!(indicators[0].kind.as_deref(), Some("IPv4"));
        assert!(indicators[1].indicator.is_none());
        assert_eq!(indicators[1].title.as_deref(), Some("only a title"));
    }

    #[test]
    fn test_ingestion_timestamp_is_set_at_normalization() {
        let before = Utc::now();
        let page = page_from_json(serde_json::json!({"results": [{"id": "p1"}]}));
        let pulses = normalize_page(&page);
        let after = Utc::now();
        assert!(pulses[0].ingestion_timestamp >= before);
        assert!(pulses[0].ingestion_timestamp <= after);
    }
}
