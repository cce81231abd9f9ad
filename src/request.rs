//! Publish request payload
//!
//! Once the whole form validates, the wizard submits a `LocalRequest` to
//! the venues API. The payload is built from the same form state the
//! validator reads, with numeric inputs coerced and the feature list
//! flattened to a comma-separated string.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{FieldError, PublishError, Result};
use crate::form::FormState;
use crate::types::Field;
use crate::validation::PublishValidator;
use crate::value::{as_text, is_integer, to_number};

/// Body of the "create local" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRequest {
    pub local_name: String,
    pub description_message: String,
    pub country: String,
    pub city: String,
    pub district: String,
    pub street: String,
    /// `None` when no pin was placed (or it sits exactly on 0).
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: f64,
    pub capacity: i64,
    pub photo_urls: Vec<String>,
    /// Feature names joined with `,`.
    pub features: String,
    pub local_category_id: i64,
    pub user_id: i64,
}

impl LocalRequest {
    /// Build the request for `user_id` from a form.
    ///
    /// The form is validated in full first; if any field fails, the error
    /// lists the first message of every invalid field. A valid form can
    /// still be refused when a list holds non-string items or the category
    /// is not a whole number within `i64`; nothing is truncated or dropped.
    pub fn from_form<F>(form: &F, user_id: i64) -> Result<Self>
    where
        F: FormState + ?Sized,
    {
        let mut validator = PublishValidator::new();
        if !validator.validate_all(form) {
            let fields: Vec<FieldError> = validator
                .invalid_fields()
                .map(|(field, messages)| FieldError {
                    field,
                    message: messages[0],
                })
                .collect();
            debug!(invalid = fields.len(), "refusing to build publish request");
            return Err(PublishError::InvalidDraft(fields));
        }

        // Values the rules accept but the payload cannot carry as given
        let payload = (
            strings(form, Field::PhotoUrls, "Cada imagen debe ser una URL"),
            strings(form, Field::Features, "Cada caracteristica debe ser un texto"),
            category_id(form),
        );
        let (photo_urls, features, local_category_id) = match payload {
            (Ok(photo_urls), Ok(features), Ok(category)) => (photo_urls, features, category),
            (photo_urls, features, category) => {
                let fields: Vec<FieldError> = [photo_urls.err(), features.err(), category.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                debug!(invalid = fields.len(), "form values do not fit the publish request");
                return Err(PublishError::InvalidDraft(fields));
            }
        };

        let request = Self {
            local_name: text(form, Field::LocalName),
            description_message: text(form, Field::DescriptionMessage),
            country: text(form, Field::Country),
            city: text(form, Field::City),
            district: text(form, Field::District),
            street: text(form, Field::Street),
            latitude: coordinate(form, Field::Latitude),
            longitude: coordinate(form, Field::Longitude),
            price: to_number(&form.field_value(Field::Price)),
            capacity: to_number(&form.field_value(Field::Capacity)) as i64,
            photo_urls,
            features: features.join(","),
            local_category_id,
            user_id,
        };
        info!(local_name = %request.local_name, user_id, "built publish request");
        Ok(request)
    }
}

fn text<F: FormState + ?Sized>(form: &F, field: Field) -> String {
    as_text(&form.field_value(field))
        .map(|text| text.into_owned())
        .unwrap_or_default()
}

fn coordinate<F: FormState + ?Sized>(form: &F, field: Field) -> Option<f64> {
    let n = to_number(&form.field_value(field));
    (n != 0.0 && !n.is_nan()).then_some(n)
}

/// List items must all be strings; numbers or nested values are refused.
fn strings<F: FormState + ?Sized>(
    form: &F,
    field: Field,
    message: &'static str,
) -> std::result::Result<Vec<String>, FieldError> {
    match form.field_value(field) {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                _ => Err(FieldError { field, message }),
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// The category must be a whole number that fits an `i64`.
fn category_id<F: FormState + ?Sized>(form: &F) -> std::result::Result<i64, FieldError> {
    let n = to_number(&form.field_value(Field::LocalCategoryId));
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if is_integer(n) && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Ok(n as i64)
    } else {
        Err(FieldError {
            field: Field::LocalCategoryId,
            message: "La categoria seleccionada no es valida",
        })
    }
}
