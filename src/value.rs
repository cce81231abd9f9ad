//! Value coercion shared by the field rules
//!
//! Form values arrive raw from the UI: text inputs produce strings, map
//! pickers produce numbers or null, list editors produce arrays. Rules
//! never reject a value for its JSON type alone; they look at it through
//! the helpers below.

use serde_json::Value;
use std::borrow::Cow;

/// Null or the empty string.
///
/// Length and range rules pass on empty values; the field's `required`
/// rule is the one that reports them.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Text view of a scalar value. Arrays and objects have none.
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Bool(false) => Some(Cow::Borrowed("false")),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whitespace as the browser's regular expressions and `trim` see it.
///
/// Unlike [`char::is_whitespace`] this excludes U+0085 (next line) and
/// includes U+FEFF (byte order mark).
pub fn is_web_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' ' | '\u{00A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn trim_web(text: &str) -> &str {
    text.trim_matches(is_web_whitespace)
}

/// True when the value has text that is not only whitespace.
pub fn has_text(value: &Value) -> bool {
    as_text(value).is_some_and(|text| !trim_web(&text).is_empty())
}

/// Length of the text view in UTF-16 code units.
///
/// The browser client counts characters this way, so limits such as
/// "at most 100 characters" agree with what the user saw in the input.
pub fn text_length(value: &Value) -> Option<usize> {
    as_text(value).map(|text| text.encode_utf16().count())
}

/// Number of elements when the value is a list.
pub fn item_count(value: &Value) -> Option<usize> {
    value.as_array().map(Vec::len)
}

/// Numeric view of a value.
///
/// Booleans read as 0/1 and null as 0; strings go through
/// [`parse_number`]; arrays and objects are NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Parse user-entered numeric text.
///
/// Surrounding whitespace is ignored and blank text is 0. Accepts decimal
/// and exponent notation, `Infinity` with an optional sign, and unsigned
/// `0x`/`0o`/`0b` integers of any length. Anything else is NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = trim_web(text);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16u32), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.is_empty() {
                return f64::NAN;
            }
            // Accumulate in f64 so long literals stay finite instead of overflowing
            let mut n = 0.0;
            for c in digits.chars() {
                match c.to_digit(radix) {
                    Some(digit) => n = n * f64::from(radix) + f64::from(digit),
                    None => return f64::NAN,
                }
            }
            return n;
        }
    }

    // Rust's float parser also takes "inf" and "nan"; user text must not.
    let numeric_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric_chars {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// Finite and without a fractional part.
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!(" ")));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!([])));
    }

    #[test]
    fn test_has_text() {
        assert!(has_text(&json!("Lima")));
        assert!(has_text(&json!(42)));
        assert!(!has_text(&json!("   \t")));
        assert!(!has_text(&Value::Null));
        assert!(!has_text(&json!(["Lima"])));
        assert!(!has_text(&json!("\u{FEFF}\u{3000}")));
        assert!(has_text(&json!("\u{0085}")));
    }

    #[test]
    fn test_web_whitespace_set() {
        for c in [' ', '\t', '\u{000B}', '\u{00A0}', '\u{2007}', '\u{FEFF}'] {
            assert!(is_web_whitespace(c), "{:?}", c);
        }
        for c in ['\u{0085}', '\u{200B}', 'a', '-'] {
            assert!(!is_web_whitespace(c), "{:?}", c);
        }
    }

    #[test]
    fn test_text_length_counts_utf16_units() {
        assert_eq!(text_length(&json!("Salón El Recreo")), Some(15));
        assert_eq!(text_length(&json!("ñandú")), Some(5));
        // Astral characters take two code units
        assert_eq!(text_length(&json!("🎉")), Some(2));
        assert_eq!(text_length(&json!(12345)), Some(5));
        assert_eq!(text_length(&json!([1, 2])), None);
    }

    #[test]
    fn test_item_count() {
        assert_eq!(item_count(&json!(["a", "b"])), Some(2));
        assert_eq!(item_count(&json!([])), Some(0));
        assert_eq!(item_count(&json!("ab")), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(12.5)), 12.5);
        assert_eq!(to_number(&json!("  3.5 ")), 3.5);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&Value::Null), 0.0);
        assert!(to_number(&json!("abc")).is_nan());
        assert!(to_number(&json!([1])).is_nan());
        assert!(to_number(&json!({"a": 1})).is_nan());
    }

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("-45.25"), -45.25);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number("0x").is_nan());
        assert!(parse_number("1e").is_nan());
        assert!(parse_number("0xG1").is_nan());
        assert_eq!(parse_number("\u{FEFF} 42 "), 42.0);
    }

    #[test]
    fn test_parse_long_radix_literals() {
        let n = parse_number(&format!("0x{}", "F".repeat(20)));
        assert!(n.is_finite());
        assert_eq!(n, 2f64.powi(80));
        assert_eq!(parse_number(&format!("0b1{}", "0".repeat(70))), 2f64.powi(70));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(3.0));
        assert!(is_integer(-0.0));
        assert!(!is_integer(3.5));
        assert!(!is_integer(f64::NAN));
        assert!(!is_integer(f64::INFINITY));
    }
}
