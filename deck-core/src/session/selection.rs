//! Instance bookkeeping for part selection and instance counts.

use serde::{Deserialize, Serialize};

use crate::config::InstanceDefaults;
use crate::model::{ComponentInstance, DeckPartType};

use super::naming::rename_instances;

/// Direction of an instance count change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountChange {
    Increment,
    Decrement,
}

/// Number of instances of a part.
pub fn instance_count(instances: &[ComponentInstance], part: DeckPartType) -> usize {
    instances.iter().filter(|i| i.original_id == part).count()
}

/// Bring instances in line with the selected parts.
///
/// Instances of deselected parts are dropped, still-selected ones are kept
/// untouched and each newly selected part gets a first instance.
pub fn sync_selection(
    instances: &mut Vec<ComponentInstance>,
    selected: &[DeckPartType],
    defaults: &InstanceDefaults,
) {
    instances.retain(|inst| selected.contains(&inst.original_id));

    for &part in selected {
        if instance_count(instances, part) == 0 {
            tracing::debug!("Creating first instance of {}", part);
            instances.push(ComponentInstance::new(part, 1, defaults));
        }
    }

    rename_instances(instances);
}

/// Add or remove one instance of a part.
///
/// Decrement removes the highest-numbered instance and never drops the last
/// one. Returns whether anything changed.
pub fn change_instance_count(
    instances: &mut Vec<ComponentInstance>,
    part: DeckPartType,
    change: CountChange,
    defaults: &InstanceDefaults,
) -> bool {
    let count = instance_count(instances, part) as u32;

    let changed = match change {
        CountChange::Increment => {
            let next = count + 1;
            tracing::debug!("Adding {} instance #{}", part, next);
            instances.push(ComponentInstance::new(part, next, defaults));
            true
        }
        CountChange::Decrement if count > 1 => {
            tracing::debug!("Removing {} instance #{}", part, count);
            instances.retain(|i| !(i.original_id == part && i.instance_number == count));
            true
        }
        CountChange::Decrement => false,
    };

    if changed {
        rename_instances(instances);
    }
    changed
}
