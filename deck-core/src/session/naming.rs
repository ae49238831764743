//! Display names for component instances.

use std::collections::HashMap;

use crate::model::{ComponentInstance, DeckPartType};

/// Automatic label for an instance given how many siblings it has.
pub fn auto_name(base_name: &str, instance_number: u32, sibling_count: usize) -> String {
    if sibling_count > 1 {
        format!("{} (Set {})", base_name, instance_number)
    } else {
        base_name.to_string()
    }
}

/// Recompute every instance's display name.
///
/// Non-blank names the user typed are kept. A name cleared by the user falls
/// back to the automatic label.
pub fn rename_instances(instances: &mut [ComponentInstance]) {
    let mut counts: HashMap<DeckPartType, usize> = HashMap::new();
    for inst in instances.iter() {
        *counts.entry(inst.original_id).or_default() += 1;
    }

    for inst in instances.iter_mut() {
        if inst.name_user_edited && !inst.name.trim().is_empty() {
            continue;
        }
        let siblings = counts.get(&inst.original_id).copied().unwrap_or(1);
        inst.name = auto_name(&inst.base_name, inst.instance_number, siblings);
        inst.name_user_edited = false;
    }
}
