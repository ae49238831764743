//! Bulk property editor: one value applied to every instance at once.

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};
use crate::model::{CoatingType, ComponentInstance, DeckPartType, Difficulty, Preparation, RailingMaterial};

use super::edit::{set_coating_type, set_percentage, set_railing_material, validate_coats};

/// Property the bulk editor is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkProperty {
    Difficulty,
    CoatingType,
    Coats,
    PercentageAdjustment,
    RailingMaterial,
    Preparation,
}

impl BulkProperty {
    /// Button label in the bulk toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            BulkProperty::Difficulty => "Difficulty",
            BulkProperty::CoatingType => "Finish",
            BulkProperty::Coats => "Coats",
            BulkProperty::PercentageAdjustment => "Percentage",
            BulkProperty::RailingMaterial => "Material",
            BulkProperty::Preparation => "Preparation",
        }
    }
}

impl std::fmt::Display for BulkProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Value chosen for the active property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "snake_case")]
pub enum BulkValue {
    Difficulty(Difficulty),
    CoatingType(CoatingType),
    Coats(u8),
    PercentageAdjustment(u32),
    RailingMaterial(RailingMaterial),
    Preparation(Preparation),
}

impl BulkValue {
    pub fn property(&self) -> BulkProperty {
        match self {
            BulkValue::Difficulty(_) => BulkProperty::Difficulty,
            BulkValue::CoatingType(_) => BulkProperty::CoatingType,
            BulkValue::Coats(_) => BulkProperty::Coats,
            BulkValue::PercentageAdjustment(_) => BulkProperty::PercentageAdjustment,
            BulkValue::RailingMaterial(_) => BulkProperty::RailingMaterial,
            BulkValue::Preparation(_) => BulkProperty::Preparation,
        }
    }

    fn apply_to(&self, instance: &mut ComponentInstance) {
        match self {
            BulkValue::Difficulty(d) => instance.difficulty = Some(*d),
            BulkValue::CoatingType(c) => set_coating_type(instance, Some(*c)),
            BulkValue::Coats(c) => instance.coats = Some(*c),
            BulkValue::PercentageAdjustment(p) => set_percentage(instance, *p),
            BulkValue::RailingMaterial(m) => set_railing_material(instance, Some(*m)),
            BulkValue::Preparation(p) => instance.preparation = p.clone(),
        }
    }
}

/// Two-step bulk editor state: pick a property, then a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkEditor {
    active: Option<BulkProperty>,
    value: Option<BulkValue>,
}

impl BulkEditor {
    pub fn active(&self) -> Option<BulkProperty> {
        self.active
    }

    pub fn value(&self) -> Option<&BulkValue> {
        self.value.as_ref()
    }

    /// Pick a property; picking the active one again deselects it.
    /// Either way the chosen value is discarded.
    pub fn select(&mut self, property: BulkProperty) {
        self.active = if self.active == Some(property) {
            None
        } else {
            Some(property)
        };
        self.value = None;
    }

    /// Leave bulk editing.
    pub fn done(&mut self) {
        self.active = None;
        self.value = None;
    }

    /// Choose (or clear) the value for the active property.
    pub fn set_value(&mut self, value: Option<BulkValue>) -> Result<()> {
        if let Some(v) = &value {
            if self.active != Some(v.property()) {
                return Err(EstimateError::BulkValueMismatch {
                    property: self
                        .active
                        .map(|p| p.label().to_string())
                        .unwrap_or_else(|| "none".to_string()),
                    value: v.property().label().to_string(),
                });
            }
            if let BulkValue::Coats(c) = v {
                validate_coats(Some(*c))?;
            }
        }
        self.value = value;
        Ok(())
    }

    /// Apply the chosen value to every instance of the selected parts.
    ///
    /// Returns the number of instances updated; 0 when nothing is chosen.
    pub fn apply(&self, instances: &mut [ComponentInstance], selected: &[DeckPartType]) -> usize {
        let Some(value) = self.value.as_ref() else {
            return 0;
        };
        if self.active.is_none() {
            return 0;
        }

        let mut updated = 0;
        for instance in instances
            .iter_mut()
            .filter(|i| selected.contains(&i.original_id))
        {
            value.apply_to(instance);
            updated += 1;
        }
        tracing::debug!("Bulk {} applied to {} instance(s)", value.property(), updated);
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstanceDefaults;
    use crate::model::PrepStep;

    fn setup() -> (Vec<ComponentInstance>, Vec<DeckPartType>) {
        let defaults = InstanceDefaults::default();
        let selected = vec![DeckPartType::Railings, DeckPartType::Stairs];
        let instances = vec![
            ComponentInstance::new(DeckPartType::Railings, 1, &defaults),
            ComponentInstance::new(DeckPartType::Railings, 2, &defaults),
            ComponentInstance::new(DeckPartType::Stairs, 1, &defaults),
        ];
        (instances, selected)
    }

    #[test]
    fn test_noop_without_property_or_value() {
        let (mut instances, selected) = setup();
        let before = instances.clone();
        let mut editor = BulkEditor::default();
        assert_eq!(editor.apply(&mut instances, &selected), 0);

        editor.select(BulkProperty::Difficulty);
        assert_eq!(editor.apply(&mut instances, &selected), 0);
        assert_eq!(instances, before);
    }

    #[test]
    fn test_select_toggles_and_clears_value() {
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::Coats);
        editor.set_value(Some(BulkValue::Coats(3))).unwrap();
        editor.select(BulkProperty::Coats);
        assert_eq!(editor.active(), None);
        assert!(editor.value().is_none());
    }

    #[test]
    fn test_value_must_match_property() {
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::Difficulty);
        let err = editor.set_value(Some(BulkValue::Coats(2))).unwrap_err();
        assert!(matches!(err, EstimateError::BulkValueMismatch { .. }));
    }

    #[test]
    fn test_coats_validated() {
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::Coats);
        assert!(editor.set_value(Some(BulkValue::Coats(0))).is_err());
    }

    #[test]
    fn test_apply_difficulty_to_all() {
        let (mut instances, selected) = setup();
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::Difficulty);
        editor.set_value(Some(BulkValue::Difficulty(Difficulty::Hard))).unwrap();
        assert_eq!(editor.apply(&mut instances, &selected), 3);
        assert!(instances.iter().all(|i| i.difficulty == Some(Difficulty::Hard)));
    }

    #[test]
    fn test_apply_material_cascades() {
        let (mut instances, selected) = setup();
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::RailingMaterial);
        editor
            .set_value(Some(BulkValue::RailingMaterial(RailingMaterial::Aluminum)))
            .unwrap();
        editor.apply(&mut instances, &selected);
        for inst in &instances {
            assert_eq!(inst.coating_type, Some(CoatingType::Paint));
            assert_eq!(inst.preparation.as_slice(), &[PrepStep::Tsp, PrepStep::Sand]);
        }
    }

    #[test]
    fn test_apply_percentage_clears_overrides() {
        let (mut instances, selected) = setup();
        instances[0].length.set_user("99");
        instances[2].quantity.set_user("7");
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::PercentageAdjustment);
        editor
            .set_value(Some(BulkValue::PercentageAdjustment(110)))
            .unwrap();
        editor.apply(&mut instances, &selected);
        for inst in &instances {
            assert_eq!(inst.percentage_adjustment, 110);
            assert!(!inst.length.edited && !inst.quantity.edited);
            assert!(inst.length.user.is_empty() && inst.quantity.user.is_empty());
        }
    }

    #[test]
    fn test_apply_skips_unselected_parts() {
        let (mut instances, _) = setup();
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::Coats);
        editor.set_value(Some(BulkValue::Coats(1))).unwrap();
        assert_eq!(editor.apply(&mut instances, &[DeckPartType::Stairs]), 1);
        assert_eq!(instances[0].coats, Some(2));
        assert_eq!(instances[2].coats, Some(1));
    }

    #[test]
    fn test_apply_preparation_replaces_set() {
        let (mut instances, selected) = setup();
        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::Preparation);
        let prep: Preparation = [PrepStep::Wash, PrepStep::FullPrime].into_iter().collect();
        editor.set_value(Some(BulkValue::Preparation(prep.clone()))).unwrap();
        editor.apply(&mut instances, &selected);
        assert!(instances.iter().all(|i| i.preparation == prep));
    }

    #[test]
    fn test_apply_coating_adds_scrape_on_wood() {
        let (mut instances, selected) = setup();
        instances[0].preparation = [PrepStep::Wash, PrepStep::Caulk].into_iter().collect();
        instances[2].railing_material = Some(RailingMaterial::Aluminum);
        instances[2].preparation = Preparation::for_material(Some(RailingMaterial::Aluminum));

        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::CoatingType);
        editor
            .set_value(Some(BulkValue::CoatingType(CoatingType::Paint)))
            .unwrap();
        assert_eq!(editor.apply(&mut instances, &selected), 3);

        assert!(instances.iter().all(|i| i.coating_type == Some(CoatingType::Paint)));
        assert_eq!(
            instances[0].preparation.as_slice(),
            &[PrepStep::Wash, PrepStep::Caulk, PrepStep::Scrape]
        );
        assert_eq!(
            instances[1].preparation.as_slice(),
            &[PrepStep::Sand, PrepStep::Wash, PrepStep::Scrape]
        );
        assert_eq!(instances[2].preparation.as_slice(), &[PrepStep::Tsp, PrepStep::Sand]);
    }

    #[test]
    fn test_apply_stain_leaves_preparation() {
        let (mut instances, selected) = setup();
        instances[0].preparation = [PrepStep::Wash, PrepStep::Caulk].into_iter().collect();
        let before: Vec<Preparation> = instances.iter().map(|i| i.preparation.clone()).collect();

        let mut editor = BulkEditor::default();
        editor.select(BulkProperty::CoatingType);
        editor
            .set_value(Some(BulkValue::CoatingType(CoatingType::SemiTransparentStain)))
            .unwrap();
        editor.apply(&mut instances, &selected);

        let after: Vec<Preparation> = instances.iter().map(|i| i.preparation.clone()).collect();
        assert_eq!(after, before);
        assert!(instances
            .iter()
            .all(|i| i.coating_type == Some(CoatingType::SemiTransparentStain)));
    }
}
