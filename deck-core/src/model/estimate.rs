//! Estimate line item produced by finalizing a deck session.

use serde::{Deserialize, Serialize};

use super::{ComponentInstance, OverallDeckDimensions};

/// Line item type reported for deck configurations.
pub const DECK_ITEM_TYPE: &str = "Deck Configuration";

/// Everything needed to reopen the configuration later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConfigurationData {
    pub overall_dimensions: OverallDeckDimensions,
    pub components: Vec<ComponentInstance>,
}

/// A configured entry in the running estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateLineItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub summary: String,
    pub price: f64,
    pub is_configured: bool,
    pub raw_configuration_data: RawConfigurationData,
}

/// Receiver of finalized line items (the estimate list).
pub trait EstimateSink {
    fn add_item(&mut self, item: EstimateLineItem);
}

/// Replaces an item with the same id, else appends.
impl EstimateSink for Vec<EstimateLineItem> {
    fn add_item(&mut self, item: EstimateLineItem) {
        match self.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.push(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, summary: &str) -> EstimateLineItem {
        EstimateLineItem {
            id: id.to_string(),
            item_type: DECK_ITEM_TYPE.to_string(),
            summary: summary.to_string(),
            price: 0.0,
            is_configured: true,
            raw_configuration_data: RawConfigurationData {
                overall_dimensions: OverallDeckDimensions::default(),
                components: vec![],
            },
        }
    }

    #[test]
    fn test_vec_sink_upserts_by_id() {
        let mut list: Vec<EstimateLineItem> = Vec::new();
        list.add_item(item("deck-1", "first"));
        list.add_item(item("deck-2", "other"));
        list.add_item(item("deck-1", "second"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].summary, "second");
    }

    #[test]
    fn test_type_field_name() {
        let json = serde_json::to_value(item("deck-1", "s")).unwrap();
        assert_eq!(json["type"], "Deck Configuration");
        assert_eq!(json["price"], 0.0);
    }
}
