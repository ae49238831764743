//! deck-core - Core library for the deck configuration calculator.
//!
//! This library derives suggested linear footage, surface area and counts
//! for deck components from the overall deck size and per-component inputs,
//! tracks repeatable component instances, and finalizes a configuration
//! into an estimate line item.
//!
//! # Example
//!
//! ```
//! use deck_core::{Configurator, DeckPartType, InstanceDefaults};
//!
//! let mut session = Configurator::new(InstanceDefaults::default()).with_item_id("deck-1");
//! session.set_dimensions(Some("20".into()), Some("10".into()));
//! session.toggle_part(DeckPartType::Floors);
//!
//! let item = session.finalize().unwrap();
//! assert_eq!(item.summary, "Configured Deck: 20ft x 10ft (1 component instance)");
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod model;
pub mod script;
pub mod session;
pub mod validation;

// Re-exports for convenience
pub use calc::{derive, recompute_all};
pub use config::InstanceDefaults;
pub use error::{ErrorCode, EstimateError, Result};
pub use model::{
    CoatingType, ComponentInstance, DeckPartType, Difficulty, EstimateLineItem, EstimateSink,
    Measurement, OverallDeckDimensions, PrepStep, Preparation, RailingMaterial,
};
pub use script::{load_session, parse_session_str, Action, SessionScript};
pub use session::{
    BulkProperty, BulkValue, ComponentEdit, Configurator, CountChange,
};
pub use validation::{quick_validate, validate_session, ValidationResult};

/// Replay a session file and finalize it.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Load the session file
/// 2. Replay its actions (each one followed by a recompute pass)
/// 3. Validate the result, logging warnings and failing on errors
/// 4. Build the estimate line item
///
/// # Arguments
///
/// * `input_path` - Path to the JSON session file
/// * `defaults` - Finish defaults for newly created instances
pub fn estimate_session_file(
    input_path: &std::path::Path,
    defaults: &InstanceDefaults,
) -> Result<EstimateLineItem> {
    let script = load_session(input_path)?;
    let session = script.replay(defaults)?;

    quick_validate(&session)?;
    session.finalize()
}
