//! Form state read by the validator
//!
//! The validator never owns the form. Anything that can produce the raw
//! value of a [`Field`] implements [`FormState`]: plain JSON objects as
//! sent by the UI, and the typed [`LocalDraft`] kept by Rust callers.
//! A field missing from the source reads as null.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::PublishError;
use crate::types::Field;

/// Read access to the current value of each form field.
pub trait FormState {
    /// Current raw value of the field, null when unset.
    fn field_value(&self, field: Field) -> Value;
}

impl FormState for Map<String, Value> {
    fn field_value(&self, field: Field) -> Value {
        self.get(field.as_ref()).cloned().unwrap_or(Value::Null)
    }
}

impl FormState for HashMap<String, Value> {
    fn field_value(&self, field: Field) -> Value {
        self.get(field.as_ref()).cloned().unwrap_or(Value::Null)
    }
}

/// Non-object values have no fields; every field reads as null.
impl FormState for Value {
    fn field_value(&self, field: Field) -> Value {
        self.get(field.as_ref()).cloned().unwrap_or(Value::Null)
    }
}

impl<T: FormState + ?Sized> FormState for &T {
    fn field_value(&self, field: Field) -> Value {
        (**self).field_value(field)
    }
}

/// A numeric input that may still hold the text the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl NumericInput {
    fn to_value(&self) -> Value {
        match self {
            // NaN and infinities have no JSON number; keep them as text so
            // the numeric rules still see a non-number.
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(n.to_string())),
            Self::Text(text) => Value::String(text.clone()),
        }
    }
}

/// Typed draft of a venue being published.
///
/// Field names serialize in camelCase, matching the UI payload. Missing
/// keys deserialize to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalDraft {
    pub local_name: String,
    pub description_message: String,
    pub country: String,
    pub city: String,
    pub district: String,
    pub street: String,
    /// Set once the user drops a pin on the map.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Hourly price.
    pub price: Option<NumericInput>,
    /// Maximum number of guests.
    pub capacity: Option<NumericInput>,
    pub photo_urls: Vec<String>,
    pub features: Vec<String>,
    pub local_category_id: Option<i64>,
}

impl LocalDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the draft to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize draft to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write draft to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a draft from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read draft from {:?}", path.as_ref()))?;

        let draft: Self = serde_json::from_str(&content).context("Failed to parse draft JSON")?;

        Ok(draft)
    }
}

impl FormState for LocalDraft {
    fn field_value(&self, field: Field) -> Value {
        match field {
            Field::LocalName => Value::from(self.local_name.as_str()),
            Field::DescriptionMessage => Value::from(self.description_message.as_str()),
            Field::Country => Value::from(self.country.as_str()),
            Field::City => Value::from(self.city.as_str()),
            Field::District => Value::from(self.district.as_str()),
            Field::Street => Value::from(self.street.as_str()),
            Field::Latitude => self.latitude.map_or(Value::Null, Value::from),
            Field::Longitude => self.longitude.map_or(Value::Null, Value::from),
            Field::Price => self.price.as_ref().map_or(Value::Null, NumericInput::to_value),
            Field::Capacity => self
                .capacity
                .as_ref()
                .map_or(Value::Null, NumericInput::to_value),
            Field::PhotoUrls => Value::from(self.photo_urls.clone()),
            Field::Features => Value::from(self.features.clone()),
            Field::LocalCategoryId => self.local_category_id.map_or(Value::Null, Value::from),
        }
    }
}

/// Load a raw form object from a JSON file.
///
/// Values are kept exactly as written so every field reaches the rules
/// untouched, whatever its JSON type.
pub fn load_form_file<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read form from {:?}", path.as_ref()))?;

    let value: Value = serde_json::from_str(&content).context("Failed to parse form JSON")?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(PublishError::form(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        )))
        .with_context(|| format!("Invalid form in {:?}", path.as_ref())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
