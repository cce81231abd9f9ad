//! Field rule table for the publish form
//!
//! Each field owns an ordered list of rules. A rule pairs a [`Check`] with
//! the message shown when it fails. Order matters: the first failing
//! message is the one the wizard shows under the input, the rest are kept
//! for the full error list.
//!
//! Length and magnitude checks pass on empty values (null or `""`) so a
//! blank field reports only its `required` message.

use serde_json::Value;

use crate::types::Field;
use crate::value::{
    as_text, has_text, is_empty, is_integer, is_web_whitespace, item_count, text_length, to_number,
};

/// Predicate applied to a raw field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Text that is not blank after trimming
    RequiredText,
    /// Anything but null or `""`
    Required,
    /// Anything but null
    Present,
    /// Text length (UTF-16 units) of at least n
    MinLength(usize),
    /// Text length (UTF-16 units) of at most n
    MaxLength(usize),
    /// Only characters accepted in a venue name
    NameCharacters,
    /// Numeric value within `[min, max]`
    Between(f64, f64),
    /// Numeric value strictly greater than the bound
    GreaterThan(f64),
    /// Numeric value of at least the bound
    AtLeast(f64),
    /// Numeric value of at most the bound
    AtMost(f64),
    /// Numeric value without a fractional part
    Integer,
    /// A list with at least one element
    NonEmptyList,
    /// A list with at most n elements
    MaxItems(usize),
    /// Non-null identifier greater than zero
    PositiveId,
}

impl Check {
    /// Evaluate the check against a raw value.
    pub fn passes(&self, value: &Value) -> bool {
        match *self {
            Self::RequiredText => has_text(value),
            Self::Required => !is_empty(value),
            Self::Present => !value.is_null(),
            Self::MinLength(min) => {
                is_empty(value) || text_length(value).is_some_and(|len| len >= min)
            }
            Self::MaxLength(max) => {
                is_empty(value) || text_length(value).is_some_and(|len| len <= max)
            }
            Self::NameCharacters => {
                is_empty(value) || as_text(value).is_some_and(|text| text.chars().all(is_name_char))
            }
            Self::Between(min, max) => {
                if is_empty(value) {
                    return true;
                }
                let n = to_number(value);
                n >= min && n <= max
            }
            Self::GreaterThan(bound) => is_empty(value) || to_number(value) > bound,
            Self::AtLeast(bound) => is_empty(value) || to_number(value) >= bound,
            Self::AtMost(bound) => is_empty(value) || to_number(value) <= bound,
            Self::Integer => is_empty(value) || is_integer(to_number(value)),
            Self::NonEmptyList => item_count(value).is_some_and(|count| count > 0),
            Self::MaxItems(max) => {
                is_empty(value) || item_count(value).is_some_and(|count| count <= max)
            }
            Self::PositiveId => !value.is_null() && to_number(value) > 0.0,
        }
    }
}

/// Letters (with Spanish accented vowels and ñ), digits, whitespace and `-.,()`.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || is_web_whitespace(c)
        || matches!(
            c,
            'á' | 'é' | 'í' | 'ó' | 'ú' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'ñ' | 'Ñ'
        )
        || matches!(c, '-' | '.' | ',' | '(' | ')')
}

/// A check paired with its failure message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }

    pub fn passes(&self, value: &Value) -> bool {
        self.check.passes(value)
    }
}

const LOCAL_NAME: &[FieldRule] = &[
    FieldRule::new(Check::RequiredText, "El nombre es obligatorio"),
    FieldRule::new(Check::MinLength(5), "El nombre debe tener al menos 5 caracteres"),
    FieldRule::new(Check::MaxLength(100), "El nombre no puede exceder 100 caracteres"),
    FieldRule::new(Check::NameCharacters, "El nombre contiene caracteres no permitidos"),
];

const DESCRIPTION_MESSAGE: &[FieldRule] = &[
    FieldRule::new(Check::RequiredText, "La descripcion es obligatoria"),
    FieldRule::new(Check::MinLength(20), "La descripcion debe tener al menos 20 caracteres"),
    FieldRule::new(Check::MaxLength(1000), "La descripcion no puede exceder 1000 caracteres"),
];

const COUNTRY: &[FieldRule] = &[
    FieldRule::new(Check::RequiredText, "El pais es obligatorio"),
    FieldRule::new(Check::MinLength(3), "Ingresa un pais valido"),
];

const CITY: &[FieldRule] = &[
    FieldRule::new(Check::RequiredText, "El departamento es obligatorio"),
    FieldRule::new(Check::MinLength(3), "Ingresa un departamento valido"),
];

const DISTRICT: &[FieldRule] = &[
    FieldRule::new(Check::RequiredText, "El distrito es obligatorio"),
    FieldRule::new(Check::MinLength(3), "Ingresa un distrito valido"),
];

const STREET: &[FieldRule] = &[
    FieldRule::new(Check::RequiredText, "La direccion es obligatoria"),
    FieldRule::new(Check::MinLength(5), "La direccion debe tener al menos 5 caracteres"),
];

const LATITUDE: &[FieldRule] = &[
    FieldRule::new(Check::Present, "Selecciona la ubicacion en el mapa"),
    FieldRule::new(Check::Between(-90.0, 90.0), "Latitud invalida"),
];

const LONGITUDE: &[FieldRule] = &[
    FieldRule::new(Check::Present, "Selecciona la ubicacion en el mapa"),
    FieldRule::new(Check::Between(-180.0, 180.0), "Longitud invalida"),
];

const PRICE: &[FieldRule] = &[
    FieldRule::new(Check::Required, "El precio es obligatorio"),
    FieldRule::new(Check::GreaterThan(0.0), "El precio debe ser mayor a 0"),
    FieldRule::new(Check::AtMost(10_000.0), "El precio no puede exceder S/ 10,000 por hora"),
];

const CAPACITY: &[FieldRule] = &[
    FieldRule::new(Check::Required, "El aforo es obligatorio"),
    FieldRule::new(Check::AtLeast(1.0), "El aforo minimo es 1 persona"),
    FieldRule::new(Check::AtMost(10_000.0), "El aforo no puede exceder 10,000 personas"),
    FieldRule::new(Check::Integer, "El aforo debe ser un numero entero"),
];

const PHOTO_URLS: &[FieldRule] = &[
    FieldRule::new(Check::NonEmptyList, "Debes agregar al menos una imagen"),
    FieldRule::new(Check::MaxItems(10), "No puedes agregar mas de 10 imagenes"),
];

const FEATURES: &[FieldRule] = &[FieldRule::new(
    Check::NonEmptyList,
    "Debes agregar al menos una caracteristica",
)];

const LOCAL_CATEGORY_ID: &[FieldRule] = &[FieldRule::new(
    Check::PositiveId,
    "Debes seleccionar una categoria",
)];

/// Ordered rules for a field.
pub fn rules_for(field: Field) -> &'static [FieldRule] {
    match field {
        Field::LocalName => LOCAL_NAME,
        Field::DescriptionMessage => DESCRIPTION_MESSAGE,
        Field::Country => COUNTRY,
        Field::City => CITY,
        Field::District => DISTRICT,
        Field::Street => STREET,
        Field::Latitude => LATITUDE,
        Field::Longitude => LONGITUDE,
        Field::Price => PRICE,
        Field::Capacity => CAPACITY,
        Field::PhotoUrls => PHOTO_URLS,
        Field::Features => FEATURES,
        Field::LocalCategoryId => LOCAL_CATEGORY_ID,
    }
}

/// Messages of every rule the value fails, in rule order.
pub fn failing_messages(field: Field, value: &Value) -> Vec<&'static str> {
    rules_for(field)
        .iter()
        .filter(|rule| !rule.passes(value))
        .map(|rule| rule.message)
        .collect()
}

/// True when the value passes every rule of the field. Stops at the first failure.
pub fn satisfies(field: Field, value: &Value) -> bool {
    rules_for(field).iter().all(|rule| rule.passes(value))
}
