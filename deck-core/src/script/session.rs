//! JSON session files.
//!
//! A session file records the inputs a user made on the deck page, in order:
//!
//! ```json
//! {
//!   "item_id": "deck-1",
//!   "actions": [
//!     { "action": "set_dimensions", "deck_length": "20", "deck_width": "10" },
//!     { "action": "toggle_part", "part": "floors" },
//!     { "action": "edit", "instance": "deck-flooring",
//!       "edit": { "field": "percentage_adjustment", "value": 110 } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::InstanceDefaults;
use crate::error::{EstimateError, Result};
use crate::model::DeckPartType;
use crate::session::{BulkProperty, BulkValue, ComponentEdit, Configurator, CountChange};

/// One recorded user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetItemId {
        item_id: Option<String>,
    },
    SetDimensions {
        #[serde(default)]
        deck_length: Option<String>,
        #[serde(default)]
        deck_width: Option<String>,
    },
    TogglePart {
        part: DeckPartType,
    },
    SelectParts {
        parts: Vec<DeckPartType>,
    },
    IncrementInstances {
        part: DeckPartType,
    },
    DecrementInstances {
        part: DeckPartType,
    },
    Edit {
        instance: String,
        edit: ComponentEdit,
    },
    BulkSelect {
        property: BulkProperty,
    },
    BulkValue {
        value: Option<BulkValue>,
    },
    BulkApply,
    BulkDone,
}

impl Action {
    /// Apply this action to a session.
    pub fn apply(&self, session: &mut Configurator) -> Result<()> {
        match self {
            Action::SetItemId { item_id } => session.set_item_id(item_id.clone()),
            Action::SetDimensions {
                deck_length,
                deck_width,
            } => session.set_dimensions(deck_length.clone(), deck_width.clone()),
            Action::TogglePart { part } => session.toggle_part(*part),
            Action::SelectParts { parts } => session.set_selected_parts(parts),
            Action::IncrementInstances { part } => {
                session.change_instance_count(*part, CountChange::Increment)?
            }
            Action::DecrementInstances { part } => {
                session.change_instance_count(*part, CountChange::Decrement)?
            }
            Action::Edit { instance, edit } => session.edit_instance(instance, edit.clone())?,
            Action::BulkSelect { property } => session.bulk_select(*property),
            Action::BulkValue { value } => session.bulk_value(value.clone())?,
            Action::BulkApply => {
                session.bulk_apply();
            }
            Action::BulkDone => session.bulk_done(),
        }
        Ok(())
    }
}

/// A recorded deck configuration session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl SessionScript {
    /// Replay every action on a fresh session.
    ///
    /// Stops at the first failing action.
    pub fn replay(&self, defaults: &InstanceDefaults) -> Result<Configurator> {
        let mut session = Configurator::new(defaults.clone());
        session.set_item_id(self.item_id.clone());

        for (index, action) in self.actions.iter().enumerate() {
            action
                .apply(&mut session)
                .map_err(|source| EstimateError::ActionFailed {
                    index,
                    source: Box::new(source),
                })?;
        }

        tracing::debug!(
            "Replayed {} action(s): {} instance(s)",
            self.actions.len(),
            session.instances().len()
        );
        Ok(session)
    }
}

/// Parse a session from JSON text.
pub fn parse_session_str(content: &str) -> Result<SessionScript> {
    serde_json::from_str(content).map_err(|e| EstimateError::ParseError {
        line: e.line(),
        message: e.to_string(),
    })
}

/// Load a session file.
pub fn load_session(path: &Path) -> Result<SessionScript> {
    if !path.exists() {
        return Err(EstimateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(EstimateError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_session_str(&content)
}
