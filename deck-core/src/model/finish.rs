//! Finish attributes: coating, difficulty, material and surface preparation.

use serde::{Deserialize, Serialize};

/// Coating applied to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatingType {
    Paint,
    OpaqueStain,
    SemiTransparentStain,
}

impl CoatingType {
    /// Coatings that need loose finish scraped off bare wood first.
    pub fn needs_scrape_on_wood(&self) -> bool {
        matches!(self, CoatingType::Paint | CoatingType::OpaqueStain)
    }
}

/// Job difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Substrate material of the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailingMaterial {
    Wood,
    Composite,
    Metal,
    Concrete,
    Aluminum,
}

impl RailingMaterial {
    /// Materials that can only be painted, never stained.
    pub fn forces_paint(&self) -> bool {
        !matches!(self, RailingMaterial::Wood)
    }
}

/// A surface preparation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrepStep {
    #[serde(rename = "TSP")]
    Tsp,
    Scrape,
    Grind,
    Fill,
    Caulk,
    Glaze,
    Sand,
    Wash,
    #[serde(rename = "Spot Prime")]
    SpotPrime,
    #[serde(rename = "Full Prime")]
    FullPrime,
}

impl PrepStep {
    /// All steps in the order the picker lists them.
    pub const ALL: [PrepStep; 10] = [
        PrepStep::Tsp,
        PrepStep::Scrape,
        PrepStep::Grind,
        PrepStep::Fill,
        PrepStep::Caulk,
        PrepStep::Glaze,
        PrepStep::Sand,
        PrepStep::Wash,
        PrepStep::SpotPrime,
        PrepStep::FullPrime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrepStep::Tsp => "TSP",
            PrepStep::Scrape => "Scrape",
            PrepStep::Grind => "Grind",
            PrepStep::Fill => "Fill",
            PrepStep::Caulk => "Caulk",
            PrepStep::Glaze => "Glaze",
            PrepStep::Sand => "Sand",
            PrepStep::Wash => "Wash",
            PrepStep::SpotPrime => "Spot Prime",
            PrepStep::FullPrime => "Full Prime",
        }
    }
}

impl std::fmt::Display for PrepStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of preparation steps: insertion order kept, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PrepStep>", into = "Vec<PrepStep>")]
pub struct Preparation(Vec<PrepStep>);

impl Preparation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default steps for a material.
    pub fn for_material(material: Option<RailingMaterial>) -> Self {
        let steps: &[PrepStep] = match material {
            Some(RailingMaterial::Wood) => &[PrepStep::Sand, PrepStep::Wash],
            Some(RailingMaterial::Aluminum) => &[PrepStep::Tsp, PrepStep::Sand],
            Some(RailingMaterial::Metal) => &[PrepStep::Scrape, PrepStep::Grind],
            Some(RailingMaterial::Concrete) => &[PrepStep::Scrape],
            Some(RailingMaterial::Composite) | None => &[],
        };
        steps.iter().copied().collect()
    }

    /// Append a step unless already present. Returns true if added.
    pub fn insert(&mut self, step: PrepStep) -> bool {
        if self.contains(step) {
            return false;
        }
        self.0.push(step);
        true
    }

    /// Remove a step. Returns true if it was present.
    pub fn remove(&mut self, step: PrepStep) -> bool {
        let before = self.0.len();
        self.0.retain(|s| *s != step);
        self.0.len() != before
    }

    /// Flip a step on or off, as a picker button does.
    pub fn toggle(&mut self, step: PrepStep) {
        if !self.remove(step) {
            self.0.push(step);
        }
    }

    pub fn contains(&self, step: PrepStep) -> bool {
        self.0.contains(&step)
    }

    pub fn iter(&self) -> impl Iterator<Item = PrepStep> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[PrepStep] {
        &self.0
    }
}

impl FromIterator<PrepStep> for Preparation {
    fn from_iter<I: IntoIterator<Item = PrepStep>>(iter: I) -> Self {
        let mut prep = Preparation::new();
        for step in iter {
            prep.insert(step);
        }
        prep
    }
}

impl From<Vec<PrepStep>> for Preparation {
    fn from(steps: Vec<PrepStep>) -> Self {
        steps.into_iter().collect()
    }
}

impl From<Preparation> for Vec<PrepStep> {
    fn from(prep: Preparation) -> Self {
        prep.0
    }
}
