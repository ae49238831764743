//! Deck part catalog.

use serde::{Deserialize, Serialize};

/// A deck part type the user can pick on the deck picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckPartType {
    #[serde(alias = "deck-railings")]
    Railings,
    #[serde(alias = "deck-flooring")]
    Floors,
    #[serde(alias = "deck-fascia")]
    Fascias,
    #[serde(alias = "deck-stairs")]
    Stairs,
    #[serde(alias = "deck-posts")]
    SupportsColumns,
    #[serde(alias = "deck-trellis")]
    TrellisVerticals,
    #[serde(alias = "deck-custom")]
    Custom,
}

impl DeckPartType {
    /// Catalog order, as shown to the user.
    pub const ALL: [DeckPartType; 7] = [
        DeckPartType::Railings,
        DeckPartType::Floors,
        DeckPartType::Fascias,
        DeckPartType::Stairs,
        DeckPartType::SupportsColumns,
        DeckPartType::TrellisVerticals,
        DeckPartType::Custom,
    ];

    /// Stable identifier; also the id of the first instance.
    pub fn slug(&self) -> &'static str {
        match self {
            DeckPartType::Railings => "deck-railings",
            DeckPartType::Floors => "deck-flooring",
            DeckPartType::Fascias => "deck-fascia",
            DeckPartType::Stairs => "deck-stairs",
            DeckPartType::SupportsColumns => "deck-posts",
            DeckPartType::TrellisVerticals => "deck-trellis",
            DeckPartType::Custom => "deck-custom",
        }
    }

    /// Look a part up by its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Human-readable name, used as every instance's base name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckPartType::Railings => "Railings",
            DeckPartType::Floors => "Floors",
            DeckPartType::Fascias => "Fascias",
            DeckPartType::Stairs => "Stairs",
            DeckPartType::SupportsColumns => "Supports/Columns",
            DeckPartType::TrellisVerticals => "Trellis/Verticals",
            DeckPartType::Custom => "Custom",
        }
    }

    /// One-click rename options offered in the detail panel.
    pub fn name_presets(&self) -> &'static [&'static str] {
        match self {
            DeckPartType::SupportsColumns => &["Columns", "Supports"],
            DeckPartType::TrellisVerticals => &["Trellis", "Verticals"],
            _ => &[],
        }
    }

    /// Parts with a collapsible detail panel.
    pub fn has_detail_panel(&self) -> bool {
        matches!(
            self,
            DeckPartType::Stairs | DeckPartType::SupportsColumns | DeckPartType::TrellisVerticals
        )
    }

    /// Parts that carry a width field.
    pub fn has_width(&self) -> bool {
        matches!(
            self,
            DeckPartType::SupportsColumns | DeckPartType::TrellisVerticals
        )
    }

    /// Parts whose geometry comes from the overall deck dimensions.
    pub fn uses_deck_dimensions(&self) -> bool {
        matches!(
            self,
            DeckPartType::Railings | DeckPartType::Floors | DeckPartType::Fascias
        )
    }
}

impl std::fmt::Display for DeckPartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
