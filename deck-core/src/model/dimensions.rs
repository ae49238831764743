//! Overall deck dimensions entered once per session.

use serde::{Deserialize, Serialize};

use crate::config::numeric;

/// Overall deck size as typed by the user, in feet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallDeckDimensions {
    pub deck_length: String,
    pub deck_width: String,
}

impl OverallDeckDimensions {
    pub fn new(deck_length: impl Into<String>, deck_width: impl Into<String>) -> Self {
        Self {
            deck_length: deck_length.into(),
            deck_width: deck_width.into(),
        }
    }

    /// Deck length (0 when blank or non-numeric).
    pub fn length(&self) -> f64 {
        numeric::parse_or_zero(&self.deck_length)
    }

    /// Deck width (0 when blank or non-numeric).
    pub fn width(&self) -> f64 {
        numeric::parse_or_zero(&self.deck_width)
    }

    /// Both dimensions are strictly positive.
    pub fn is_complete(&self) -> bool {
        self.length() > 0.0 && self.width() > 0.0
    }

    /// Perimeter run along the outer edges: both sides plus the front.
    pub fn edge_run(&self) -> f64 {
        (2.0 * self.width() + self.length()).max(0.0)
    }

    /// Deck surface area.
    pub fn area(&self) -> f64 {
        self.length() * self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_accessors() {
        let dims = OverallDeckDimensions::new("20", "10");
        assert_eq!(dims.length(), 20.0);
        assert_eq!(dims.width(), 10.0);
        assert_eq!(dims.edge_run(), 40.0);
        assert_eq!(dims.area(), 200.0);
        assert!(dims.is_complete());
    }

    #[test]
    fn test_blank_dimensions() {
        let dims = OverallDeckDimensions::default();
        assert_eq!(dims.edge_run(), 0.0);
        assert!(!dims.is_complete());
    }

    #[test]
    fn test_edge_run_never_negative() {
        let dims = OverallDeckDimensions::new("5", "-10");
        assert_eq!(dims.edge_run(), 0.0);
    }
}
