//! Error handling module for the publish wizard
//!
//! Field validation failures are plain data held by the validator. The
//! types here cover everything else: draft files that are not a form,
//! unknown steps where a typed step is required, and attempts to publish
//! an invalid draft. File I/O and JSON parsing are reported through
//! `anyhow` with context by the file helpers.

use thiserror::Error;

use crate::types::Field;

/// Main error type for the publish wizard
#[derive(Error, Debug)]
pub enum PublishError {
    /// Draft file is readable JSON but not a form object
    #[error("Form error: {0}")]
    Form(String),

    /// Step number outside the wizard
    #[error("Unknown wizard step: {0}")]
    UnknownStep(u8),

    /// Draft still has invalid fields and cannot be published
    #[error("Draft is not ready to publish: {} invalid field(s)", .0.len())]
    InvalidDraft(Vec<FieldError>),
}

/// First failing message for one field of a rejected draft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Result type alias for publish wizard operations
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create a form error
    pub fn form(msg: impl Into<String>) -> Self {
        Self::Form(msg.into())
    }

    /// Invalid fields carried by an `InvalidDraft` error, empty otherwise.
    pub fn invalid_fields(&self) -> &[FieldError] {
        match self {
            Self::InvalidDraft(fields) => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PublishError::form("expected a JSON object");
        assert_eq!(err.to_string(), "Form error: expected a JSON object");

        let err = PublishError::UnknownStep(11);
        assert_eq!(err.to_string(), "Unknown wizard step: 11");
    }

    #[test]
    fn test_invalid_draft_counts_fields() {
        let err = PublishError::InvalidDraft(vec![
            FieldError {
                field: Field::Price,
                message: "El precio es obligatorio",
            },
            FieldError {
                field: Field::City,
                message: "El departamento es obligatorio",
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Draft is not ready to publish: 2 invalid field(s)"
        );
        assert_eq!(err.invalid_fields().len(), 2);
    }

    #[test]
    fn test_other_errors_have_no_invalid_fields() {
        assert!(PublishError::UnknownStep(0).invalid_fields().is_empty());
        assert!(PublishError::form("empty file").invalid_fields().is_empty());
    }
}
