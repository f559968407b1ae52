//! Store catalog: filtering, ordering, lookup
//!
//! Accessory-tagged items are excluded once, at construction, so lookups never
//! have to re-check. Items are held ascending by base cost; the sort is stable,
//! so equal-cost items keep their upstream order.

use crate::models::StoreItem;

/// An ordered, filtered view over store items
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<StoreItem>,
}

impl Catalog {
    /// Build a catalog from raw store items
    ///
    /// Drops any item whose `type` contains "accessory" (case-insensitive
    /// substring), then sorts ascending by base cost. Items without a parsable
    /// base cost sort last.
    pub fn build(raw_items: Vec<StoreItem>) -> Self {
        let mut items: Vec<StoreItem> = raw_items
            .into_iter()
            .filter(|item| {
                !item
                    .item_type
                    .as_deref()
                    .map(|t| t.to_lowercase().contains("accessory"))
                    .unwrap_or(false)
            })
            .collect();

        // Vec::sort_by is stable: ties keep input order
        items.sort_by(|a, b| {
            let cost_a = a.ticket_cost.base().unwrap_or(f64::INFINITY);
            let cost_b = b.ticket_cost.base().unwrap_or(f64::INFINITY);
            cost_a.total_cmp(&cost_b)
        });

        Self { items }
    }

    /// Find an item by trimmed, case-sensitive exact name
    pub fn find(&self, name: &str) -> Option<&StoreItem> {
        let wanted = name.trim();
        self.items.iter().find(|item| item.name.trim() == wanted)
    }

    /// Items in ascending base-cost order
    pub fn iter(&self) -> impl Iterator<Item = &StoreItem> {
        self.items.iter()
    }

    /// Item names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
