//! Per-instance field edits and the finish rules they trigger.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_COATS, MIN_COATS};
use crate::error::{EstimateError, Result};
use crate::model::{
    CoatingType, ComponentInstance, Difficulty, PrepStep, Preparation, RailingMaterial,
    StairOptions,
};

/// A single user edit to one component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ComponentEdit {
    Name(String),
    UserLength(String),
    UserSqFt(String),
    UserQuantity(String),
    Height(String),
    Width(String),
    NumStairs(String),
    StairWidth(String),
    IncludeTreads(bool),
    IncludeRisers(bool),
    IncludeStringers(bool),
    DetailVisible(bool),
    CoatingType(Option<CoatingType>),
    Difficulty(Option<Difficulty>),
    RailingMaterial(Option<RailingMaterial>),
    Coats(Option<u8>),
    PercentageAdjustment(u32),
    Preparation(Preparation),
    TogglePreparation(PrepStep),
}

impl ComponentEdit {
    /// Field name as used in session files and error messages.
    pub fn field_name(&self) -> &'static str {
        match self {
            ComponentEdit::Name(_) => "name",
            ComponentEdit::UserLength(_) => "user_length",
            ComponentEdit::UserSqFt(_) => "user_sq_ft",
            ComponentEdit::UserQuantity(_) => "user_quantity",
            ComponentEdit::Height(_) => "height",
            ComponentEdit::Width(_) => "width",
            ComponentEdit::NumStairs(_) => "num_stairs",
            ComponentEdit::StairWidth(_) => "stair_width",
            ComponentEdit::IncludeTreads(_) => "include_treads",
            ComponentEdit::IncludeRisers(_) => "include_risers",
            ComponentEdit::IncludeStringers(_) => "include_stringers",
            ComponentEdit::DetailVisible(_) => "detail_visible",
            ComponentEdit::CoatingType(_) => "coating_type",
            ComponentEdit::Difficulty(_) => "difficulty",
            ComponentEdit::RailingMaterial(_) => "railing_material",
            ComponentEdit::Coats(_) => "coats",
            ComponentEdit::PercentageAdjustment(_) => "percentage_adjustment",
            ComponentEdit::Preparation(_) => "preparation",
            ComponentEdit::TogglePreparation(_) => "toggle_preparation",
        }
    }
}

/// Apply one edit to an instance.
///
/// Derived values are not touched; the caller recomputes afterwards.
pub fn apply_edit(instance: &mut ComponentInstance, edit: ComponentEdit) -> Result<()> {
    let field = edit.field_name();
    match edit {
        ComponentEdit::Name(name) => {
            instance.name = name;
            instance.name_user_edited = true;
        }
        ComponentEdit::UserLength(v) => instance.length.set_user(v),
        ComponentEdit::UserSqFt(v) => instance.sq_ft.set_user(v),
        ComponentEdit::UserQuantity(v) => instance.quantity.set_user(v),
        ComponentEdit::Height(v) => instance.height = v,
        ComponentEdit::Width(v) => {
            let part = instance.part();
            let width = instance
                .width
                .as_mut()
                .ok_or_else(|| EstimateError::FieldNotApplicable {
                    field: field.to_string(),
                    part,
                })?;
            *width = v;
        }
        ComponentEdit::NumStairs(v) => stairs_mut(instance, field)?.num_stairs = v,
        ComponentEdit::StairWidth(v) => stairs_mut(instance, field)?.stair_width = v,
        ComponentEdit::IncludeTreads(v) => stairs_mut(instance, field)?.include_treads = v,
        ComponentEdit::IncludeRisers(v) => stairs_mut(instance, field)?.include_risers = v,
        ComponentEdit::IncludeStringers(v) => stairs_mut(instance, field)?.include_stringers = v,
        ComponentEdit::DetailVisible(v) => {
            if !instance.part().has_detail_panel() {
                return Err(not_applicable(field, instance));
            }
            instance.detail_visible = Some(v);
        }
        ComponentEdit::CoatingType(coating) => set_coating_type(instance, coating),
        ComponentEdit::Difficulty(difficulty) => instance.difficulty = difficulty,
        ComponentEdit::RailingMaterial(material) => set_railing_material(instance, material),
        ComponentEdit::Coats(coats) => {
            validate_coats(coats)?;
            instance.coats = coats;
        }
        ComponentEdit::PercentageAdjustment(p) => set_percentage(instance, p),
        ComponentEdit::Preparation(prep) => instance.preparation = prep,
        ComponentEdit::TogglePreparation(step) => instance.preparation.toggle(step),
    }
    Ok(())
}

/// Set the coating; paint or opaque stain on wood adds scraping.
pub(crate) fn set_coating_type(instance: &mut ComponentInstance, coating: Option<CoatingType>) {
    instance.coating_type = coating;
    if coating.is_some_and(|c| c.needs_scrape_on_wood())
        && instance.railing_material == Some(RailingMaterial::Wood)
    {
        instance.preparation.insert(PrepStep::Scrape);
    }
}

/// Set the material, forcing paint where required and resetting preparation.
pub(crate) fn set_railing_material(
    instance: &mut ComponentInstance,
    material: Option<RailingMaterial>,
) {
    if material.is_some_and(|m| m.forces_paint()) {
        instance.coating_type = Some(CoatingType::Paint);
    }
    instance.railing_material = material;
    instance.preparation = Preparation::for_material(material);
}

/// Set the percentage; the scaled placeholder becomes authoritative again.
pub(crate) fn set_percentage(instance: &mut ComponentInstance, percentage: u32) {
    instance.percentage_adjustment = percentage;
    instance.clear_overrides();
}

pub(crate) fn validate_coats(coats: Option<u8>) -> Result<()> {
    match coats {
        Some(c) if !(MIN_COATS..=MAX_COATS).contains(&c) => Err(EstimateError::InvalidValue {
            field: "coats".into(),
            expected: format!("{} to {}", MIN_COATS, MAX_COATS),
            value: c.to_string(),
        }),
        _ => Ok(()),
    }
}

fn stairs_mut<'a>(
    instance: &'a mut ComponentInstance,
    field: &str,
) -> Result<&'a mut StairOptions> {
    let part = instance.part();
    instance
        .stairs
        .as_mut()
        .ok_or_else(|| EstimateError::FieldNotApplicable {
            field: field.to_string(),
            part,
        })
}

fn not_applicable(field: &str, instance: &ComponentInstance) -> EstimateError {
    EstimateError::FieldNotApplicable {
        field: field.to_string(),
        part: instance.part(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstanceDefaults;
    use crate::model::DeckPartType;

    fn instance(part: DeckPartType) -> ComponentInstance {
        ComponentInstance::new(part, 1, &InstanceDefaults::default())
    }

    // ==================== Geometry edit tests ====================

    #[test]
    fn test_user_fields_set_edited_flag() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(&mut inst, ComponentEdit::UserLength("30".into())).unwrap();
        apply_edit(&mut inst, ComponentEdit::UserSqFt("5".into())).unwrap();
        apply_edit(&mut inst, ComponentEdit::UserQuantity("2".into())).unwrap();
        assert!(inst.length.edited && inst.sq_ft.edited && inst.quantity.edited);
        assert_eq!(inst.length.user, "30");
    }

    #[test]
    fn test_percentage_clears_overrides() {
        let mut inst = instance(DeckPartType::Floors);
        apply_edit(&mut inst, ComponentEdit::UserLength("30".into())).unwrap();
        apply_edit(&mut inst, ComponentEdit::UserSqFt("150".into())).unwrap();
        apply_edit(&mut inst, ComponentEdit::UserQuantity("2".into())).unwrap();
        apply_edit(&mut inst, ComponentEdit::PercentageAdjustment(120)).unwrap();
        assert_eq!(inst.percentage_adjustment, 120);
        for m in [&inst.length, &inst.sq_ft, &inst.quantity] {
            assert!(!m.edited);
            assert!(m.user.is_empty());
        }
    }

    #[test]
    fn test_stairs_fields_only_on_stairs() {
        let mut stairs = instance(DeckPartType::Stairs);
        apply_edit(&mut stairs, ComponentEdit::NumStairs("4".into())).unwrap();
        apply_edit(&mut stairs, ComponentEdit::IncludeRisers(true)).unwrap();
        let opts = stairs.stairs.as_ref().unwrap();
        assert_eq!(opts.num_stairs, "4");
        assert!(opts.include_risers);

        let mut floors = instance(DeckPartType::Floors);
        let err = apply_edit(&mut floors, ComponentEdit::NumStairs("4".into())).unwrap_err();
        assert!(matches!(err, EstimateError::FieldNotApplicable { .. }));
    }

    #[test]
    fn test_width_only_on_posts_and_trellis() {
        let mut posts = instance(DeckPartType::SupportsColumns);
        apply_edit(&mut posts, ComponentEdit::Width("0.5".into())).unwrap();
        assert_eq!(posts.width.as_deref(), Some("0.5"));

        let mut railings = instance(DeckPartType::Railings);
        assert!(apply_edit(&mut railings, ComponentEdit::Width("1".into())).is_err());
    }

    #[test]
    fn test_detail_visibility() {
        let mut trellis = instance(DeckPartType::TrellisVerticals);
        apply_edit(&mut trellis, ComponentEdit::DetailVisible(false)).unwrap();
        assert_eq!(trellis.detail_visible, Some(false));

        let mut floors = instance(DeckPartType::Floors);
        assert!(apply_edit(&mut floors, ComponentEdit::DetailVisible(false)).is_err());
    }

    #[test]
    fn test_rename_marks_user_edited() {
        let mut posts = instance(DeckPartType::SupportsColumns);
        let preset = DeckPartType::SupportsColumns.name_presets()[0];
        apply_edit(&mut posts, ComponentEdit::Name(preset.into())).unwrap();
        assert_eq!(posts.name, "Columns");
        assert!(posts.name_user_edited);
    }

    // ==================== Finish rule tests ====================

    #[test]
    fn test_metal_forces_paint_and_prep() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(&mut inst, ComponentEdit::RailingMaterial(Some(RailingMaterial::Metal))).unwrap();
        assert_eq!(inst.coating_type, Some(CoatingType::Paint));
        assert_eq!(inst.preparation.as_slice(), &[PrepStep::Scrape, PrepStep::Grind]);
    }

    #[test]
    fn test_wood_keeps_coating_and_resets_prep() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(&mut inst, ComponentEdit::TogglePreparation(PrepStep::Caulk)).unwrap();
        apply_edit(&mut inst, ComponentEdit::RailingMaterial(Some(RailingMaterial::Wood))).unwrap();
        assert_eq!(inst.coating_type, Some(CoatingType::SemiTransparentStain));
        assert_eq!(inst.preparation.as_slice(), &[PrepStep::Sand, PrepStep::Wash]);
    }

    #[test]
    fn test_cleared_material_clears_prep() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(&mut inst, ComponentEdit::RailingMaterial(None)).unwrap();
        assert!(inst.preparation.is_empty());
        assert_eq!(inst.coating_type, Some(CoatingType::SemiTransparentStain));
    }

    #[test]
    fn test_paint_on_wood_adds_scrape() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(&mut inst, ComponentEdit::TogglePreparation(PrepStep::Fill)).unwrap();
        apply_edit(&mut inst, ComponentEdit::CoatingType(Some(CoatingType::Paint))).unwrap();
        assert_eq!(
            inst.preparation.as_slice(),
            &[PrepStep::Sand, PrepStep::Wash, PrepStep::Fill, PrepStep::Scrape]
        );

        apply_edit(&mut inst, ComponentEdit::CoatingType(Some(CoatingType::OpaqueStain))).unwrap();
        assert_eq!(inst.preparation.len(), 4);
    }

    #[test]
    fn test_semi_transparent_on_wood_no_scrape() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(
            &mut inst,
            ComponentEdit::CoatingType(Some(CoatingType::SemiTransparentStain)),
        )
        .unwrap();
        assert!(!inst.preparation.contains(PrepStep::Scrape));
    }

    #[test]
    fn test_paint_on_composite_no_scrape() {
        let mut inst = instance(DeckPartType::Railings);
        apply_edit(&mut inst, ComponentEdit::RailingMaterial(Some(RailingMaterial::Composite))).unwrap();
        apply_edit(&mut inst, ComponentEdit::CoatingType(Some(CoatingType::Paint))).unwrap();
        assert!(inst.preparation.is_empty());
    }

    #[test]
    fn test_coats_range() {
        let mut inst = instance(DeckPartType::Floors);
        apply_edit(&mut inst, ComponentEdit::Coats(Some(3))).unwrap();
        apply_edit(&mut inst, ComponentEdit::Coats(None)).unwrap();
        assert_eq!(inst.coats, None);
        let err = apply_edit(&mut inst, ComponentEdit::Coats(Some(4))).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidValue { .. }));
    }

    // ==================== Serde tests ====================

    #[test]
    fn test_edit_json_shape() {
        let edit: ComponentEdit =
            serde_json::from_str(r#"{"field": "railing_material", "value": "metal"}"#).unwrap();
        assert_eq!(edit, ComponentEdit::RailingMaterial(Some(RailingMaterial::Metal)));

        let edit: ComponentEdit =
            serde_json::from_str(r#"{"field": "toggle_preparation", "value": "Spot Prime"}"#).unwrap();
        assert_eq!(edit, ComponentEdit::TogglePreparation(PrepStep::SpotPrime));

        let edit: ComponentEdit =
            serde_json::from_str(r#"{"field": "coats", "value": null}"#).unwrap();
        assert_eq!(edit, ComponentEdit::Coats(None));
    }
}
