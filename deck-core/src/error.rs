//! Error types for deck configuration and estimate finalization.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::DeckPartType;

/// Error codes for deck estimate processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Session file not found (-1)
    FileNotFound = -1,
    /// Empty session file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Estimate item identifier missing (E100)
    MissingItemId = 100,
    /// No deck parts selected (E101)
    NoPartsSelected = 101,
    /// Unknown component instance (E200)
    InstanceNotFound = 200,
    /// Part type not in the current selection (E201)
    PartNotSelected = 201,
    /// Field does not exist for the part type (E202)
    FieldNotApplicable = 202,
    /// Field value out of range (E203)
    InvalidValue = 203,
    /// Bulk value does not match the active property (E204)
    BulkValueMismatch = 204,
    /// Session failed validation (E300)
    InvalidSession = 300,
}

/// Main error type for the deck calculator.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Estimate item ID is missing; cannot save the deck configuration")]
    MissingItemId,

    #[error("No deck parts were selected or configured")]
    NoPartsSelected,

    #[error("Component instance not found: {id}")]
    InstanceNotFound { id: String },

    #[error("Deck part '{part}' is not selected")]
    PartNotSelected { part: DeckPartType },

    #[error("Field '{field}' does not apply to {part}")]
    FieldNotApplicable { field: String, part: DeckPartType },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Bulk value for '{value}' does not match active property '{property}'")]
    BulkValueMismatch { property: String, value: String },

    #[error("Session is not valid: {message}")]
    InvalidSession { message: String },

    #[error("Action {index} failed: {source}")]
    ActionFailed {
        index: usize,
        #[source]
        source: Box<EstimateError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimateError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EstimateError::FileNotFound { .. } => ErrorCode::FileNotFound,
            EstimateError::EmptyFile { .. } => ErrorCode::EmptyFile,
            EstimateError::ParseError { .. } => ErrorCode::ParseError,
            EstimateError::MissingItemId => ErrorCode::MissingItemId,
            EstimateError::NoPartsSelected => ErrorCode::NoPartsSelected,
            EstimateError::InstanceNotFound { .. } => ErrorCode::InstanceNotFound,
            EstimateError::PartNotSelected { .. } => ErrorCode::PartNotSelected,
            EstimateError::FieldNotApplicable { .. } => ErrorCode::FieldNotApplicable,
            EstimateError::InvalidValue { .. } => ErrorCode::InvalidValue,
            EstimateError::BulkValueMismatch { .. } => ErrorCode::BulkValueMismatch,
            EstimateError::InvalidSession { .. } => ErrorCode::InvalidSession,
            EstimateError::ActionFailed { source, .. } => source.code(),
            EstimateError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
