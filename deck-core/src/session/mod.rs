//! Deck configurator session state.
//!
//! Every mutating method finishes with a full recompute pass, so the
//! instances always reflect the current inputs.

mod bulk;
mod edit;
mod finalize;
mod naming;
mod selection;

pub use bulk::{BulkEditor, BulkProperty, BulkValue};
pub use edit::{apply_edit, ComponentEdit};
pub use finalize::{counted_instances, finalize, summary};
pub use naming::{auto_name, rename_instances};
pub use selection::{change_instance_count, instance_count, sync_selection, CountChange};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calc;
use crate::config::InstanceDefaults;
use crate::error::{EstimateError, Result};
use crate::model::{ComponentInstance, DeckPartType, EstimateLineItem, EstimateSink, OverallDeckDimensions};

/// In-memory state of one deck configuration session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configurator {
    item_id: Option<String>,
    dimensions: OverallDeckDimensions,
    selected_parts: Vec<DeckPartType>,
    instances: Vec<ComponentInstance>,
    bulk: BulkEditor,
    #[serde(skip)]
    defaults: InstanceDefaults,
}

impl Configurator {
    /// Start an empty session.
    pub fn new(defaults: InstanceDefaults) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    /// Start a session for an existing estimate item.
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    pub fn set_item_id(&mut self, item_id: Option<String>) {
        self.item_id = item_id;
    }

    pub fn dimensions(&self) -> &OverallDeckDimensions {
        &self.dimensions
    }

    pub fn selected_parts(&self) -> &[DeckPartType] {
        &self.selected_parts
    }

    pub fn instances(&self) -> &[ComponentInstance] {
        &self.instances
    }

    pub fn bulk(&self) -> &BulkEditor {
        &self.bulk
    }

    /// Look up an instance by id.
    pub fn instance(&self, id: &str) -> Option<&ComponentInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// All instances of one part, in instance order.
    pub fn instances_of(&self, part: DeckPartType) -> impl Iterator<Item = &ComponentInstance> {
        self.instances.iter().filter(move |i| i.original_id == part)
    }

    pub fn is_selected(&self, part: DeckPartType) -> bool {
        self.selected_parts.contains(&part)
    }

    /// Update either overall dimension; `None` leaves it unchanged.
    pub fn set_dimensions(&mut self, deck_length: Option<String>, deck_width: Option<String>) {
        if let Some(length) = deck_length {
            self.dimensions.deck_length = length;
        }
        if let Some(width) = deck_width {
            self.dimensions.deck_width = width;
        }
        debug!(
            "Deck dimensions: {:?} x {:?}",
            self.dimensions.deck_length, self.dimensions.deck_width
        );
        self.recompute();
    }

    /// Flip a part in or out of the selection.
    pub fn toggle_part(&mut self, part: DeckPartType) {
        let mut selected = self.selected_parts.clone();
        if let Some(pos) = selected.iter().position(|p| *p == part) {
            selected.remove(pos);
        } else {
            selected.push(part);
        }
        self.set_selected_parts(&selected);
    }

    /// Replace the selection. Duplicates are ignored.
    pub fn set_selected_parts(&mut self, parts: &[DeckPartType]) {
        let mut selected = Vec::with_capacity(parts.len());
        for &part in parts {
            if !selected.contains(&part) {
                selected.push(part);
            }
        }
        debug!("Selected parts: {:?}", selected);
        sync_selection(&mut self.instances, &selected, &self.defaults);
        self.selected_parts = selected;
        self.recompute();
    }

    /// Add or remove an instance of a selected part.
    pub fn change_instance_count(&mut self, part: DeckPartType, change: CountChange) -> Result<()> {
        if !self.is_selected(part) {
            return Err(EstimateError::PartNotSelected { part });
        }
        if change_instance_count(&mut self.instances, part, change, &self.defaults) {
            self.recompute();
        }
        Ok(())
    }

    /// Apply a field edit to one instance.
    pub fn edit_instance(&mut self, id: &str, edit: ComponentEdit) -> Result<()> {
        let instance = self
            .instances
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| EstimateError::InstanceNotFound { id: id.to_string() })?;
        debug!("Edit {} on {}", edit.field_name(), id);
        apply_edit(instance, edit)?;
        self.recompute();
        Ok(())
    }

    /// Pick the bulk property (toggles off when already active).
    pub fn bulk_select(&mut self, property: BulkProperty) {
        self.bulk.select(property);
    }

    /// Leave bulk editing.
    pub fn bulk_done(&mut self) {
        self.bulk.done();
    }

    /// Choose the bulk value for the active property.
    pub fn bulk_value(&mut self, value: Option<BulkValue>) -> Result<()> {
        self.bulk.set_value(value)
    }

    /// Apply the bulk value. Returns the number of instances updated.
    pub fn bulk_apply(&mut self) -> usize {
        let updated = self.bulk.apply(&mut self.instances, &self.selected_parts);
        if updated > 0 {
            self.recompute();
        }
        updated
    }

    /// Recompute every derived field. Returns how many instances changed.
    pub fn recompute(&mut self) -> usize {
        calc::recompute_in_place(&self.dimensions, &mut self.instances)
    }

    /// Build the estimate line item for this session.
    pub fn finalize(&self) -> Result<EstimateLineItem> {
        finalize(
            self.item_id.as_deref(),
            &self.dimensions,
            &self.selected_parts,
            &self.instances,
        )
    }

    /// Finalize and hand the item to the estimate list.
    pub fn finalize_into(&self, sink: &mut dyn EstimateSink) -> Result<()> {
        let item = self.finalize()?;
        debug!("Adding estimate item {}: {}", item.id, item.summary);
        sink.add_item(item);
        Ok(())
    }
}
