//! Publish Wizard Library
//!
//! Validation engine for the multi-step "publish your venue" wizard: a
//! rule table per form field, step gating for navigation, whole-form
//! validation with per-field error lists, progress reporting, and the
//! request payload submitted once the draft is valid.

pub mod cli;
pub mod error;
pub mod form;
pub mod request;
pub mod rules;
pub mod types;
pub mod validation;
pub mod value;
pub mod wizard;

// Re-export main types for convenience
pub use error::{FieldError, PublishError, Result};
pub use form::{FormState, LocalDraft, NumericInput};
pub use request::LocalRequest;
pub use rules::{Check, FieldRule, rules_for};
pub use types::Field;
pub use validation::{ErrorState, PublishValidator, StepProgress};
pub use wizard::WizardStep;
