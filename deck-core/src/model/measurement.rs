//! One derived quantity of a component with its user override.

use serde::{Deserialize, Serialize};

use crate::config::numeric;

/// Which measurement of a component a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    SqFt,
    Quantity,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::SqFt, Dimension::Quantity];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::SqFt => "sq ft",
            Dimension::Quantity => "quantity",
        }
    }
}

/// Derived value and user override for one dimension.
///
/// `calculated` is the raw geometry, `placeholder` the scaled and rounded-up
/// suggestion, `user` the text shown in the input, and `effective` the value
/// used downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub calculated: Option<f64>,
    pub placeholder: String,
    pub user: String,
    /// Set once the user has typed into the field.
    pub edited: bool,
    pub effective: String,
}

impl Measurement {
    /// Record text typed by the user.
    pub fn set_user(&mut self, value: impl Into<String>) {
        self.user = value.into();
        self.edited = true;
    }

    /// Drop the user override so the placeholder becomes authoritative.
    pub fn clear_override(&mut self) {
        self.user.clear();
        self.edited = false;
    }

    /// Whether the user has an override in effect.
    pub fn has_override(&self) -> bool {
        self.edited && !numeric::is_blank(&self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_override() {
        let mut m = Measurement::default();
        assert!(!m.has_override());
        m.set_user("42");
        assert!(m.edited);
        assert!(m.has_override());
        m.clear_override();
        assert!(!m.edited);
        assert!(m.user.is_empty());
    }

    #[test]
    fn test_blank_edit_is_not_an_override() {
        let mut m = Measurement::default();
        m.set_user("  ");
        assert!(m.edited);
        assert!(!m.has_override());
    }
}
