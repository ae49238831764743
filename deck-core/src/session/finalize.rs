//! Turning a configured session into an estimate line item.

use crate::config::numeric;
use crate::error::{EstimateError, Result};
use crate::model::{
    ComponentInstance, DeckPartType, EstimateLineItem, OverallDeckDimensions,
    RawConfigurationData, DECK_ITEM_TYPE,
};

/// Instances that count toward the summary: every non-custom instance, plus
/// custom ones the user typed a value into.
pub fn counted_instances(instances: &[ComponentInstance]) -> usize {
    instances
        .iter()
        .filter(|i| i.original_id != DeckPartType::Custom || i.has_user_values())
        .count()
}

/// One-line description shown in the estimate sidebar.
pub fn summary(dims: &OverallDeckDimensions, instances: &[ComponentInstance]) -> String {
    let mut summary = String::from("Configured Deck");
    if dims.is_complete() {
        summary.push_str(&format!(
            ": {}ft x {}ft",
            numeric::format_number(dims.length()),
            numeric::format_number(dims.width())
        ));
    }
    let n = counted_instances(instances);
    summary.push_str(&format!(
        " ({} component instance{})",
        n,
        if n == 1 { "" } else { "s" }
    ));
    summary
}

/// Build the estimate line item for a deck session.
pub fn finalize(
    item_id: Option<&str>,
    dims: &OverallDeckDimensions,
    selected: &[DeckPartType],
    instances: &[ComponentInstance],
) -> Result<EstimateLineItem> {
    let id = match item_id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(EstimateError::MissingItemId),
    };
    if selected.is_empty() {
        return Err(EstimateError::NoPartsSelected);
    }

    Ok(EstimateLineItem {
        id,
        item_type: DECK_ITEM_TYPE.to_string(),
        summary: summary(dims, instances),
        price: 0.0,
        is_configured: true,
        raw_configuration_data: RawConfigurationData {
            overall_dimensions: dims.clone(),
            components: instances.to_vec(),
        },
    })
}
