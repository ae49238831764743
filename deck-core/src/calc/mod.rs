//! Derived-quantity engine for deck components.

mod engine;
pub mod formula;

pub use engine::{derive, derive_in_place, recompute_all, recompute_in_place, scaled_placeholder};
