//! Data model for the deck configurator.

mod dimensions;
mod estimate;
mod finish;
mod instance;
mod measurement;
mod part;

pub use dimensions::OverallDeckDimensions;
pub use estimate::{EstimateLineItem, EstimateSink, RawConfigurationData, DECK_ITEM_TYPE};
pub use finish::{CoatingType, Difficulty, PrepStep, Preparation, RailingMaterial};
pub use instance::{instance_id, ComponentInstance, StairOptions};
pub use measurement::{Dimension, Measurement};
pub use part::DeckPartType;
