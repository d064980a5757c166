//! Error types for the document picker.

use thiserror::Error;

/// Result type for picker operations.
pub type PickerResult<T> = Result<T, PickerError>;

/// Errors from operator actions the picker cannot honor in its current state.
///
/// Remote failures are not errors here; they become error phases.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Action not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: &'static str, phase: String },

    /// Collection index outside the resolved list.
    #[error("collection index {index} out of range (have {len})")]
    CollectionOutOfRange { index: usize, len: usize },

    /// No collection with that plural name among the resolved ones.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// No loaded entry carries that document id.
    #[error("unknown entry: {0}")]
    UnknownEntry(String),
}
