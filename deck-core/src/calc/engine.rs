//! Derivation of placeholders and effective values.

use crate::config::{numeric, DEFAULT_PERCENTAGE, SCALE_EPS};
use crate::model::{ComponentInstance, DeckPartType, Dimension, Measurement, OverallDeckDimensions};

use super::formula;

/// Resolution order within one pass. Area comes last because the supports
/// and trellis area formulas read the resolved user quantity and length.
const RESOLVE_ORDER: [Dimension; 3] = [Dimension::Length, Dimension::Quantity, Dimension::SqFt];

/// Scale a calculated value by a percentage and round up.
///
/// Returns the placeholder text: the rounded value when positive, else blank.
/// A percentage of 0 counts as the default. Values within float noise of a
/// whole number snap to it rather than rounding up past it.
pub fn scaled_placeholder(calculated: Option<f64>, percentage: u32) -> String {
    let percentage = if percentage == 0 {
        DEFAULT_PERCENTAGE
    } else {
        percentage
    };
    let raw = calculated.unwrap_or(0.0) * f64::from(percentage) / 100.0;
    if !raw.is_finite() {
        return String::new();
    }

    let nearest = raw.round();
    let scaled = if nearest != 0.0 && (raw - nearest).abs() <= SCALE_EPS * nearest.abs() {
        nearest
    } else {
        raw.ceil()
    };
    if scaled > 0.0 {
        numeric::format_number(scaled)
    } else {
        String::new()
    }
}

/// Fill placeholder, user and effective text for one measurement.
///
/// With `auto_fill` off, an untouched field stays blank instead of
/// mirroring the suggestion.
fn resolve(measurement: &mut Measurement, calculated: Option<f64>, percentage: u32, auto_fill: bool) {
    measurement.calculated = calculated;
    measurement.placeholder = scaled_placeholder(calculated, percentage);

    if measurement.has_override() {
        measurement.effective = measurement.user.clone();
    } else if measurement.edited {
        measurement.effective = measurement.placeholder.clone();
    } else if auto_fill {
        measurement.user = measurement.placeholder.clone();
        measurement.effective = measurement.placeholder.clone();
    } else {
        measurement.user.clear();
        measurement.effective.clear();
    }
}

/// Recompute every derived field of one instance in place.
pub fn derive_in_place(dims: &OverallDeckDimensions, instance: &mut ComponentInstance) {
    let percentage = instance.percentage_adjustment;
    let part = instance.part();

    for dimension in RESOLVE_ORDER {
        let calculated = formula::calculated(dimension, instance, dims);
        // Supports are counted by hand.
        let auto_fill = !(part == DeckPartType::SupportsColumns && dimension == Dimension::Quantity);
        resolve(instance.measurement_mut(dimension), calculated, percentage, auto_fill);
    }
}

/// Pure derivation: return a recomputed copy of `instance`.
pub fn derive(dims: &OverallDeckDimensions, instance: &ComponentInstance) -> ComponentInstance {
    let mut next = instance.clone();
    derive_in_place(dims, &mut next);
    next
}

/// Recompute all instances against the overall dimensions.
pub fn recompute_all(
    dims: &OverallDeckDimensions,
    instances: &[ComponentInstance],
) -> Vec<ComponentInstance> {
    instances.iter().map(|inst| derive(dims, inst)).collect()
}

/// Recompute in place, returning how many instances changed.
pub fn recompute_in_place(dims: &OverallDeckDimensions, instances: &mut [ComponentInstance]) -> usize {
    let mut changed = 0;
    for instance in instances.iter_mut() {
        let next = derive(dims, instance);
        if next != *instance {
            *instance = next;
            changed += 1;
        }
    }
    tracing::debug!("Recomputed {} instance(s), {} changed", instances.len(), changed);
    changed
}
