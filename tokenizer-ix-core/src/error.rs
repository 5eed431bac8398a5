//! Structured error types for instruction building.
//!
//! Every failure is detected locally and synchronously. Nothing here is
//! transient, so callers should treat any of these as a programming error
//! on their side rather than something to retry.

use thiserror::Error;

use crate::schema::FieldType;

/// Result type alias for instruction building operations.
pub type InstructionResult<T> = Result<T, InstructionError>;

/// Error type for building and decoding instructions.
///
/// # Example
/// ```rust
/// use tokenizer_ix_core::error::InstructionError;
///
/// fn check_accounts(expected: usize, actual: usize) -> Result<(), InstructionError> {
///     if expected != actual {
///         return Err(InstructionError::AccountCountMismatch {
///             instruction: "create_mint".to_string(),
///             expected,
///             actual,
///         });
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstructionError {
    /// Tag is not part of the program's closed instruction set
    #[error("Unknown instruction tag {tag} for program {program}")]
    UnknownVariant {
        program: String,
        tag: u8,
    },

    /// Name lookup did not match any instruction of the program
    #[error("Unknown instruction '{name}' for program {program}")]
    UnknownInstructionName {
        program: String,
        name: String,
    },

    /// Wrong number of arguments for the instruction's field schema
    #[error("Instruction {instruction} expects {expected} arguments, got {actual}")]
    ArgumentCountMismatch {
        instruction: String,
        expected: usize,
        actual: usize,
    },

    /// Argument cannot be represented by its declared field type
    #[error("Argument '{field}' of {instruction} expects {expected}, got {found}")]
    ArgumentTypeMismatch {
        instruction: String,
        field: String,
        expected: FieldType,
        found: String,
    },

    /// Wrong number of accounts provided for this instruction
    #[error("Instruction {instruction} expects {expected} accounts, got {actual}")]
    AccountCountMismatch {
        instruction: String,
        expected: usize,
        actual: usize,
    },

    /// Typed account struct names a different account than the schema slot
    #[error("Instruction {instruction} expects account '{expected}' at index {index}, got '{found}'")]
    AccountOrderMismatch {
        instruction: String,
        index: usize,
        expected: String,
        found: String,
    },

    /// Instruction data could not be decoded against the schema
    #[error("Malformed instruction data: {message}")]
    MalformedPayload {
        message: String,
    },
}

impl InstructionError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        InstructionError::MalformedPayload {
            message: message.into(),
        }
    }

    /// Get a numeric error code for client-side handling.
    pub fn error_code(&self) -> u32 {
        match self {
            InstructionError::UnknownVariant { .. } => 1000,
            InstructionError::UnknownInstructionName { .. } => 1001,
            InstructionError::ArgumentCountMismatch { .. } => 1002,
            InstructionError::ArgumentTypeMismatch { .. } => 1003,
            InstructionError::AccountCountMismatch { .. } => 1004,
            InstructionError::MalformedPayload { .. } => 1005,
            InstructionError::AccountOrderMismatch { .. } => 1006,
        }
    }
}
