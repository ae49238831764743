//! Per-part geometry formulas.
//!
//! Each formula returns `None` when the part has no such measurement, so the
//! engine leaves that dimension without a suggestion. Results that overflow
//! `f64` count as 0.

use crate::config::{numeric, RISER_FACTOR, STRINGER_FACTOR, TREAD_DEPTH};
use crate::model::{ComponentInstance, DeckPartType, Dimension, OverallDeckDimensions, StairOptions};

/// Suggested value for one dimension of an instance.
pub fn calculated(
    dimension: Dimension,
    instance: &ComponentInstance,
    dims: &OverallDeckDimensions,
) -> Option<f64> {
    match dimension {
        Dimension::Length => calculated_length(instance, dims),
        Dimension::SqFt => calculated_sq_ft(instance, dims),
        Dimension::Quantity => calculated_quantity(instance),
    }
}

/// Linear footage suggested for an instance.
pub fn calculated_length(
    instance: &ComponentInstance,
    dims: &OverallDeckDimensions,
) -> Option<f64> {
    match instance.part() {
        DeckPartType::Railings | DeckPartType::Fascias => {
            Some(numeric::finite_or_zero(dims.edge_run()))
        }
        DeckPartType::Floors
        | DeckPartType::Stairs
        | DeckPartType::SupportsColumns
        | DeckPartType::TrellisVerticals
        | DeckPartType::Custom => None,
    }
}

/// Count suggested for an instance.
pub fn calculated_quantity(instance: &ComponentInstance) -> Option<f64> {
    match instance.part() {
        DeckPartType::Stairs => Some(
            instance
                .stairs
                .as_ref()
                .map(|s| numeric::parse_or_zero(&s.num_stairs))
                .unwrap_or(0.0),
        ),
        DeckPartType::Railings
        | DeckPartType::Floors
        | DeckPartType::Fascias
        | DeckPartType::SupportsColumns
        | DeckPartType::TrellisVerticals
        | DeckPartType::Custom => None,
    }
}

/// Surface area suggested for an instance, rounded to a tenth.
///
/// Supports read the user's quantity and trellises the user's length, so
/// these must already be resolved for the current pass.
pub fn calculated_sq_ft(
    instance: &ComponentInstance,
    dims: &OverallDeckDimensions,
) -> Option<f64> {
    let area = match instance.part() {
        DeckPartType::Floors => dims.area(),
        DeckPartType::Stairs => instance.stairs.as_ref().map(stairs_area).unwrap_or(0.0),
        DeckPartType::SupportsColumns => {
            let width = instance
                .width
                .as_deref()
                .map(numeric::parse_or_zero)
                .unwrap_or(0.0);
            let height = numeric::parse_or_zero(&instance.height);
            let quantity = numeric::parse_or_zero(&instance.quantity.user);
            width * height * quantity
        }
        DeckPartType::TrellisVerticals => {
            numeric::parse_or_zero(&instance.length.user) * numeric::parse_or_zero(&instance.height)
        }
        DeckPartType::Railings | DeckPartType::Fascias | DeckPartType::Custom => return None,
    };
    Some(numeric::finite_or_zero(numeric::round_tenth(area)))
}

/// Paintable surface of a stair run.
pub fn stairs_area(stairs: &StairOptions) -> f64 {
    let base = numeric::parse_or_zero(&stairs.num_stairs)
        * numeric::parse_or_zero(&stairs.stair_width)
        * TREAD_DEPTH;

    let mut total = 0.0;
    if stairs.include_treads {
        total += base;
    }
    if stairs.include_risers {
        total += base * RISER_FACTOR;
    }
    if stairs.include_stringers {
        total += base * STRINGER_FACTOR;
    }
    total
}
