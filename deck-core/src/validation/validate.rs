//! Validation logic for deck sessions.

use crate::config::numeric;
use crate::error::{EstimateError, Result};
use crate::model::{ComponentInstance, DeckPartType, Dimension};
use crate::session::Configurator;

/// Findings from checking a session before it is finalized.
///
/// Errors block finalizing; warnings only flag input worth a second look.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Fold the findings for one instance into the session result.
    pub fn absorb(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Emit every finding through `tracing`.
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        for error in &self.errors {
            tracing::error!("{}", error);
        }
    }
}

/// Validate a whole session.
pub fn validate_session(session: &Configurator) -> ValidationResult {
    let mut result = ValidationResult::default();

    if session
        .item_id()
        .map(|id| id.trim().is_empty())
        .unwrap_or(true)
    {
        result.fail("Estimate item ID is missing");
    }

    if session.selected_parts().is_empty() {
        result.fail("No deck parts selected");
    }

    for &part in session.selected_parts() {
        if session.instances_of(part).next().is_none() {
            result.fail(format!("{}: selected but has no instances", part));
        }
    }

    let dims = session.dimensions();
    let needs_dims: Vec<_> = session
        .selected_parts()
        .iter()
        .filter(|p| p.uses_deck_dimensions())
        .map(|p| p.display_name())
        .collect();
    if !needs_dims.is_empty() && !dims.is_complete() {
        result.warn(format!(
            "Deck length and width should both be positive for {}",
            needs_dims.join(", ")
        ));
    }

    for instance in session.instances() {
        result.absorb(validate_instance(instance));
    }

    result
}

/// Validate a single instance. Only ever produces warnings.
pub fn validate_instance(instance: &ComponentInstance) -> ValidationResult {
    let mut result = ValidationResult::default();
    let name = &instance.name;

    for dimension in Dimension::ALL {
        let m = instance.measurement(dimension);
        if m.has_override() && !numeric::is_numeric(&m.user) {
            result.warn(format!(
                "{}: {} '{}' is not a number and counts as {}",
                name,
                dimension.label(),
                m.user,
                numeric::format_number(numeric::parse_or_zero(&m.user))
            ));
        }
    }

    if instance.original_id == DeckPartType::Custom && !instance.has_user_values() {
        result.warn(format!("{}: custom component has no values", name));
    } else if instance.is_empty() {
        result.warn(format!("{}: no length, area or quantity", name));
    }

    if let Some(stairs) = &instance.stairs {
        if !stairs.has_surfaces() {
            result.warn(format!(
                "{}: no treads, risers or stringers included",
                name
            ));
        }
    }

    result
}

/// Validate, log the findings, and turn a failing result into an error.
///
/// On success the result is returned so callers can inspect the warnings.
pub fn quick_validate(session: &Configurator) -> Result<ValidationResult> {
    let result = validate_session(session);
    result.log();

    if !result.passed() {
        return Err(EstimateError::InvalidSession {
            message: result.errors.join("; "),
        });
    }

    Ok(result)
}
