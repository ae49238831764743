//! Session validation before finalizing.

mod validate;

pub use validate::{quick_validate, validate_instance, validate_session, ValidationResult};
