//! Step validation engine for the publish wizard
//!
//! [`PublishValidator`] owns the per-field error lists shown by the UI and
//! evaluates fields, steps and the whole form against the rule table in
//! [`crate::rules`]. The form itself stays with the caller and is passed
//! to every operation that reads it, so results always reflect the values
//! on screen.
//!
//! # Unknown Names
//!
//! Field names and step numbers come from UI code as plain strings and
//! integers. An unknown field has no rules and is always valid; an unknown
//! step has no fields. Both are logged at `warn` level since a typo here
//! silently disables validation.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::form::FormState;
use crate::rules::{failing_messages, satisfies};
use crate::types::Field;
use crate::wizard::{WizardStep, gate_fields_for, validation_fields_for};

/// Summary of how far the user is through the trackable steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    /// Trackable steps currently passing their gate.
    pub completed: usize,
    /// Number of trackable steps.
    pub total: usize,
    /// `completed / total` as a rounded percentage.
    pub percentage: u8,
    /// Numbers of the completed steps, in wizard order.
    pub steps: Vec<u8>,
}

/// Per-field error lists, keyed in field order.
pub type ErrorState = BTreeMap<Field, Vec<&'static str>>;

/// Validation state for one publish wizard session.
#[derive(Debug, Clone)]
pub struct PublishValidator {
    errors: ErrorState,
}

impl Default for PublishValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishValidator {
    /// Create a validator with every field tracked and error-free.
    pub fn new() -> Self {
        Self {
            errors: Field::all().map(|field| (field, Vec::new())).collect(),
        }
    }

    /// Validate one field against `value`, replacing its error list.
    ///
    /// Returns `true` when every rule passes. Unknown fields are valid.
    pub fn validate_field(&mut self, field: impl AsRef<str>, value: &Value) -> bool {
        let name = field.as_ref();
        let Some(field) = Field::lookup(name) else {
            warn!(field = name, "validating unknown field, treating as valid");
            return true;
        };
        self.check_field(field, value)
    }

    fn check_field(&mut self, field: Field, value: &Value) -> bool {
        let failures = failing_messages(field, value);
        if !failures.is_empty() {
            debug!(%field, errors = failures.len(), first = failures[0], "field invalid");
        }
        let valid = failures.is_empty();
        self.errors.insert(field, failures);
        valid
    }

    /// Fully validate a step, updating the error list of each of its fields.
    ///
    /// Uses the step's full-validation field set, which for the location
    /// step includes the map coordinates.
    pub fn validate_step<F>(&mut self, step: u8, form: &F) -> bool
    where
        F: FormState + ?Sized,
    {
        let fields = step_fields(step, validation_fields_for);

        // Every field is validated so all messages surface at once
        fields.iter().fold(true, |valid, &field| {
            let value = form.field_value(field);
            self.check_field(field, &value) && valid
        })
    }

    /// Validate every field of the form.
    pub fn validate_all<F>(&mut self, form: &F) -> bool
    where
        F: FormState + ?Sized,
    {
        Field::all().fold(true, |valid, field| {
            let value = form.field_value(field);
            self.check_field(field, &value) && valid
        })
    }

    /// Navigation gate for a step. Reads the form but leaves error lists alone.
    pub fn is_step_valid<F>(&self, step: u8, form: &F) -> bool
    where
        F: FormState + ?Sized,
    {
        step_fields(step, gate_fields_for)
            .iter()
            .all(|&field| satisfies(field, &form.field_value(field)))
    }

    /// Progress over the trackable steps, computed from the current form.
    pub fn step_progress<F>(&self, form: &F) -> StepProgress
    where
        F: FormState + ?Sized,
    {
        let steps: Vec<u8> = WizardStep::TRACKABLE
            .into_iter()
            .filter(|&step| self.is_step_valid(step.number(), form))
            .map(u8::from)
            .collect();
        let total = WizardStep::TRACKABLE.len();
        let percentage = (steps.len() as f64 / total as f64 * 100.0).round() as u8;

        StepProgress {
            completed: steps.len(),
            total,
            percentage,
            steps,
        }
    }

    /// First error message of a field, if any.
    pub fn first_error(&self, field: impl AsRef<str>) -> Option<&'static str> {
        self.errors_for(field).first().copied()
    }

    /// Whether the field currently has errors.
    pub fn has_error(&self, field: impl AsRef<str>) -> bool {
        !self.errors_for(field).is_empty()
    }

    /// Full error list of a field, empty for unknown fields.
    pub fn errors_for(&self, field: impl AsRef<str>) -> &[&'static str] {
        Field::lookup(field.as_ref())
            .and_then(|field| self.errors.get(&field))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Error lists of every tracked field.
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Fields that currently have errors, with their messages.
    pub fn invalid_fields(&self) -> impl Iterator<Item = (Field, &[&'static str])> {
        self.errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(&field, messages)| (field, messages.as_slice()))
    }

    /// Clear one field's errors, or every field's when `field` is `None`.
    pub fn clear_errors(&mut self, field: Option<&str>) {
        match field {
            Some(name) => match Field::lookup(name) {
                Some(field) => {
                    self.errors.insert(field, Vec::new());
                }
                None => debug!(field = name, "clearing unknown field, nothing to do"),
            },
            None => self.errors.values_mut().for_each(Vec::clear),
        }
    }
}

fn step_fields(step: u8, table: fn(u8) -> &'static [Field]) -> &'static [Field] {
    if WizardStep::from_number(step).is_none() {
        warn!(step, "unknown wizard step, no fields to validate");
    }
    table(step)
}
