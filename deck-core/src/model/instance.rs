//! A configured occurrence of a deck part.

use serde::{Deserialize, Serialize};

use crate::config::InstanceDefaults;

use super::{CoatingType, DeckPartType, Difficulty, Dimension, Measurement, Preparation, RailingMaterial};

/// Stair run inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairOptions {
    pub num_stairs: String,
    pub stair_width: String,
    pub include_treads: bool,
    pub include_risers: bool,
    pub include_stringers: bool,
}

impl Default for StairOptions {
    fn default() -> Self {
        Self {
            num_stairs: String::new(),
            stair_width: String::new(),
            include_treads: true,
            include_risers: false,
            include_stringers: false,
        }
    }
}

impl StairOptions {
    /// Whether any stair surface is part of the job.
    pub fn has_surfaces(&self) -> bool {
        self.include_treads || self.include_risers || self.include_stringers
    }
}

/// One configured instance of a deck part type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: String,
    pub original_id: DeckPartType,
    /// 1-based; contiguous within a part type.
    pub instance_number: u32,
    pub base_name: String,
    pub name: String,
    pub name_user_edited: bool,

    pub length: Measurement,
    pub sq_ft: Measurement,
    pub quantity: Measurement,

    pub height: String,
    /// Only on Supports/Columns and Trellis/Verticals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Only on Stairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stairs: Option<StairOptions>,
    /// Only on parts with a detail panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_visible: Option<bool>,

    pub coating_type: Option<CoatingType>,
    pub difficulty: Option<Difficulty>,
    pub railing_material: Option<RailingMaterial>,
    pub coats: Option<u8>,
    pub percentage_adjustment: u32,
    pub preparation: Preparation,
}

/// Identifier of the n-th instance of a part.
pub fn instance_id(part: DeckPartType, instance_number: u32) -> String {
    if instance_number <= 1 {
        part.slug().to_string()
    } else {
        format!("{}_{}", part.slug(), instance_number)
    }
}

impl ComponentInstance {
    /// Create a fresh instance with the session defaults.
    pub fn new(part: DeckPartType, instance_number: u32, defaults: &InstanceDefaults) -> Self {
        let base_name = part.display_name().to_string();
        Self {
            id: instance_id(part, instance_number),
            original_id: part,
            instance_number,
            name: base_name.clone(),
            base_name,
            name_user_edited: false,
            length: Measurement::default(),
            sq_ft: Measurement::default(),
            quantity: Measurement::default(),
            height: String::new(),
            width: part.has_width().then(String::new),
            stairs: (part == DeckPartType::Stairs).then(StairOptions::default),
            detail_visible: part.has_detail_panel().then_some(true),
            coating_type: defaults.coating_type,
            difficulty: defaults.difficulty,
            railing_material: defaults.railing_material,
            coats: defaults.coats,
            percentage_adjustment: defaults.percentage_adjustment,
            preparation: defaults.initial_preparation(),
        }
    }

    pub fn part(&self) -> DeckPartType {
        self.original_id
    }

    pub fn measurement(&self, dimension: Dimension) -> &Measurement {
        match dimension {
            Dimension::Length => &self.length,
            Dimension::SqFt => &self.sq_ft,
            Dimension::Quantity => &self.quantity,
        }
    }

    pub fn measurement_mut(&mut self, dimension: Dimension) -> &mut Measurement {
        match dimension {
            Dimension::Length => &mut self.length,
            Dimension::SqFt => &mut self.sq_ft,
            Dimension::Quantity => &mut self.quantity,
        }
    }

    /// Clear all three user overrides.
    pub fn clear_overrides(&mut self) {
        self.length.clear_override();
        self.sq_ft.clear_override();
        self.quantity.clear_override();
    }

    /// Whether the user typed a non-blank length, area or quantity.
    pub fn has_user_values(&self) -> bool {
        [&self.length, &self.sq_ft, &self.quantity]
            .iter()
            .any(|m| !m.user.trim().is_empty())
    }

    /// Whether every effective value is blank.
    pub fn is_empty(&self) -> bool {
        [&self.length, &self.sq_ft, &self.quantity]
            .iter()
            .all(|m| m.effective.trim().is_empty())
    }
}
