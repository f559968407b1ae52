//! Hack Club store models
//!
//! The store endpoint has shipped two shapes over time: a bare array of items
//! and `{"items": [...]}`. A persisted `store.json` additionally wraps the
//! array as `{"raw_data": {"items": [...]}}`. [`StorePayload`] accepts all
//! three. Ticket costs arrive as JSON numbers or numeric strings depending on
//! the item; garbage parses to "no price" rather than failing the document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A purchasable store item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreItem {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub ticket_cost: TicketCost,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Free-form tag; items tagged as accessories are excluded from catalogs
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Per-country pricing with a base fallback
///
/// The wire object mixes the `base_cost` key with arbitrary country-code keys
/// (`{"base_cost": 120, "us": 100, "ca": 130}`), hence the flattened map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketCost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_cost: Option<CostValue>,

    #[serde(flatten)]
    pub by_country: HashMap<String, CostValue>,
}

impl TicketCost {
    /// Base price as a number, if present and parsable
    pub fn base(&self) -> Option<f64> {
        self.base_cost.as_ref().and_then(CostValue::as_f64)
    }

    /// Country-specific price, keyed by normalized (trimmed, lowercased) code
    pub fn for_country(&self, country: &str) -> Option<f64> {
        let wanted = country.trim().to_lowercase();
        self.by_country
            .iter()
            .find(|(code, _)| code.trim().to_lowercase() == wanted)
            .and_then(|(_, cost)| cost.as_f64())
    }
}

/// A cost that may be a JSON number or a numeric string
///
/// Anything else (null, bools, nested objects) is carried as `Other` and
/// resolves to "no price" instead of failing the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl CostValue {
    /// Numeric value; unparsable strings and non-finite numbers are None
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            CostValue::Number(n) => *n,
            CostValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CostValue::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Any of the store document shapes seen in the wild
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StorePayload {
    Processed { raw_data: ItemList },
    Wrapped(ItemList),
    Bare(Vec<StoreItem>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<StoreItem>,
}

impl StorePayload {
    pub fn into_items(self) -> Vec<StoreItem> {
        match self {
            StorePayload::Processed { raw_data } => raw_data.items,
            StorePayload::Wrapped(list) => list.items,
            StorePayload::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_value_from_number_and_string() {
        let item: StoreItem = serde_json::from_str(
            r#"{"name": "Framework Laptop", "ticket_cost": {"base_cost": "450", "us": 420}}"#,
        )
        .unwrap();
        assert_eq!(item.ticket_cost.base(), Some(450.0));
        assert_eq!(item.ticket_cost.for_country("us"), Some(420.0));
        assert!(item.enabled);
    }

    #[test]
    fn test_unparsable_cost_is_none() {
        let cost = CostValue::Text("soon™".to_string());
        assert_eq!(cost.as_f64(), None);
    }

    #[test]
    fn test_non_cost_value_is_tolerated() {
        let item: StoreItem = serde_json::from_str(
            r#"{"name": "Weird", "ticket_cost": {"base_cost": null, "us": true}}"#,
        )
        .unwrap();
        assert_eq!(item.ticket_cost.base(), None);
        assert_eq!(item.ticket_cost.for_country("us"), None);
    }

    #[test]
    fn test_country_lookup_is_case_insensitive() {
        let item: StoreItem = serde_json::from_str(
            r#"{"name": "Sticker", "ticket_cost": {"base_cost": 5, "CA": 6}}"#,
        )
        .unwrap();
        assert_eq!(item.ticket_cost.for_country(" ca "), Some(6.0));
        assert_eq!(item.ticket_cost.for_country("de"), None);
    }

    #[test]
    fn test_payload_bare_array() {
        let payload: StorePayload =
            serde_json::from_str(r#"[{"name": "A", "ticket_cost": {"base_cost": 1}}]"#).unwrap();
        assert_eq!(payload.into_items().len(), 1);
    }

    #[test]
    fn test_payload_wrapped() {
        let payload: StorePayload =
            serde_json::from_str(r#"{"items": [{"name": "A"}, {"name": "B"}]}"#).unwrap();
        assert_eq!(payload.into_items().len(), 2);
    }

    #[test]
    fn test_payload_processed_document() {
        let payload: StorePayload = serde_json::from_str(
            r#"{
                "item_names": ["A"],
                "enabled_items": [{"name": "A", "enabled": true}],
                "ticket_costs": [{"name": "A", "cost": {"base_cost": 10}}],
                "raw_data": {"items": [{"name": "A", "ticket_cost": {"base_cost": 10}}]}
            }"#,
        )
        .unwrap();
        let items = payload.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ticket_cost.base(), Some(10.0));
    }
}
